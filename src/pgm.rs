//! Binary portable graymap (`P5`) writer
//!
//! Layout, byte for byte:
//!
//! ```text
//! P5\n
//! {width} {height}\n
//! 255\n
//! <width * height raw bytes, row-major>
//! ```

use crate::error::{GraymapError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Magic number of the binary graymap variant
pub const MAGIC: &str = "P5";

/// Maximum intensity declared in the header
pub const MAX_VALUE: u8 = 255;

fn header(width: usize, height: usize) -> String {
    format!("{MAGIC}\n{width} {height}\n{MAX_VALUE}\n")
}

fn check_len(width: usize, height: usize, intensities: &[u8]) -> Result<()> {
    if width.checked_mul(height) != Some(intensities.len()) {
        return Err(GraymapError::DimensionMismatch {
            width,
            height,
            len: intensities.len(),
        });
    }
    Ok(())
}

/// Encode a full PGM file into memory
pub fn encode(width: usize, height: usize, intensities: &[u8]) -> Result<Vec<u8>> {
    check_len(width, height, intensities)?;
    let header = header(width, height);
    let mut out = Vec::with_capacity(header.len() + intensities.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(intensities);
    Ok(out)
}

/// Write an encoded PGM to any writer
///
/// I/O errors are reported against the pseudo-path `<writer>`.
pub fn write_to<W: Write>(
    mut writer: W,
    width: usize,
    height: usize,
    intensities: &[u8],
) -> Result<()> {
    let bytes = encode(width, height, intensities)?;
    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| GraymapError::io("<writer>", e))
}

/// Write a PGM file, creating or truncating `path`
///
/// The payload is validated and encoded before the file is opened, so a
/// length mismatch never touches the filesystem.
pub fn write<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
    intensities: &[u8],
) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode(width, height, intensities)?;

    let mut file = File::create(path).map_err(|e| GraymapError::io(path, e))?;
    file.write_all(&bytes)
        .and_then(|_| file.flush())
        .map_err(|e| GraymapError::io(path, e))?;

    log::info!(
        "wrote {}x{} graymap to {}",
        width,
        height,
        path.display()
    );
    Ok(())
}
