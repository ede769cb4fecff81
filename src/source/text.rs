//! Plain-text image format
//!
//! ```text
//! width height
//! r g b
//! r g b
//! ...
//! ```
//!
//! One pixel per line in row-major order. Blank lines are ignored.

use crate::error::{GraymapError, Result};
use crate::models::{ColorImage, Rgb};
use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

fn parse_fields<const N: usize>(line_no: usize, line: &str, what: &str) -> Result<[u64; N]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != N {
        return Err(GraymapError::malformed(
            line_no,
            format!("{what}: expected {N} integers, found {}", tokens.len()),
        ));
    }
    let mut values = [0u64; N];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = token.parse::<u64>().map_err(|e| {
            GraymapError::malformed(line_no, format!("{what}: invalid integer {token:?}: {e}"))
        })?;
    }
    Ok(values)
}

fn channel(line_no: usize, value: u64) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        GraymapError::malformed(line_no, format!("channel value {value} outside 0..=255"))
    })
}

/// Parse a text image from a string
pub fn parse_text_image(input: &str) -> Result<ColorImage> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| GraymapError::malformed(1, "missing `width height` header"))?;
    let [width, height] = parse_fields::<2>(header_no, header, "header")?;
    if width == 0 || height == 0 {
        return Err(GraymapError::malformed(
            header_no,
            format!("dimensions must be positive, got {width}x{height}"),
        ));
    }
    let (width, height) = match (usize::try_from(width), usize::try_from(height)) {
        (Ok(w), Ok(h)) if w.checked_mul(h).is_some() => (w, h),
        _ => {
            return Err(GraymapError::malformed(
                header_no,
                format!("dimensions {width}x{height} are too large"),
            ));
        }
    };

    let expected = width * height;
    let mut pixels = Vec::with_capacity(expected.min(1 << 20));
    let mut last_line = header_no;
    for (line_no, line) in lines {
        let [r, g, b] = parse_fields::<3>(line_no, line, "pixel")?;
        pixels.push(Rgb::new(
            channel(line_no, r)?,
            channel(line_no, g)?,
            channel(line_no, b)?,
        ));
        last_line = line_no;
    }

    if pixels.len() != expected {
        return Err(GraymapError::malformed(
            last_line,
            format!(
                "expected {expected} pixels for {width}x{height}, found {}",
                pixels.len()
            ),
        ));
    }

    log::debug!("parsed {}x{} text image", width, height);
    ColorImage::new(width, height, pixels)
}

/// Read and parse a text image from disk
pub fn read_text_image<P: AsRef<Path>>(path: P) -> Result<ColorImage> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GraymapError::NotFound {
            path: path.to_path_buf(),
        },
        _ => GraymapError::io(path, e),
    })?;
    parse_text_image(&content)
}

/// Render an image in the text format accepted by [`parse_text_image`]
pub fn format_text_image(image: &ColorImage) -> String {
    let mut out = String::with_capacity(16 + image.len() * 12);
    let _ = writeln!(out, "{} {}", image.width(), image.height());
    for p in image.pixels() {
        let _ = writeln!(out, "{} {} {}", p.r, p.g, p.b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let img = parse_text_image("2 1\n10 20 30\n40 50 60\n").unwrap();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 1);
        assert_eq!(img.pixels(), &[Rgb::new(10, 20, 30), Rgb::new(40, 50, 60)]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_extra_whitespace() {
        let img = parse_text_image("\n  1   2 \n\n0 0 0\n   \n\t255\t255  255\n\n").unwrap();
        assert_eq!(img.pixels(), &[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
    }

    #[test]
    fn test_parse_crlf() {
        let img = parse_text_image("1 1\r\n1 2 3\r\n").unwrap();
        assert_eq!(img.pixels(), &[Rgb::new(1, 2, 3)]);
    }

    fn malformed_line(input: &str) -> usize {
        match parse_text_image(input) {
            Err(GraymapError::Malformed { line, .. }) => line,
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(malformed_line(""), 1);
        assert_eq!(malformed_line("2\n"), 1);
        assert_eq!(malformed_line("a b\n"), 1);
        assert_eq!(malformed_line("0 3\n"), 1);
        assert_eq!(malformed_line("1 2\n1 2 3\n4 5\n"), 3);
        assert_eq!(malformed_line("1 1\n1 2 3 4\n"), 2);
        assert_eq!(malformed_line("1 1\n1 x 3\n"), 2);
        assert_eq!(malformed_line("1 1\n1 -2 3\n"), 2);
        assert_eq!(malformed_line("1 1\n256 0 0\n"), 2);
    }

    #[test]
    fn test_parse_pixel_count_mismatch() {
        assert!(matches!(
            parse_text_image("2 2\n1 2 3\n"),
            Err(GraymapError::Malformed { .. })
        ));
        assert!(parse_text_image("1 1\n1 2 3\n4 5 6\n").is_err());
    }

    #[test]
    fn test_error_message_names_cause() {
        let err = parse_text_image("1 1\n1 x 3\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains("\"x\""), "{msg}");
    }

    #[test]
    fn test_format_then_parse() {
        let img = ColorImage::new(
            2,
            2,
            vec![
                Rgb::new(255, 0, 0),
                Rgb::new(0, 255, 0),
                Rgb::new(0, 0, 255),
                Rgb::new(9, 99, 199),
            ],
        )
        .unwrap();
        let text = format_text_image(&img);
        assert!(text.starts_with("2 2\n255 0 0\n"));
        assert_eq!(parse_text_image(&text).unwrap(), img);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_text_image("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, GraymapError::NotFound { .. }));
    }
}
