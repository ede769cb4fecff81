//! RGB to grayscale conversion
//!
//! Y = 0.299*R + 0.587*G + 0.114*B, evaluated in `f64` left to right and
//! truncated toward zero. Rounding or a fixed-point approximation changes
//! the result for many triples (e.g. mid-gray 128,128,128 sums to
//! 127.99999999999999 and must give 127), so outputs are only bit-compatible
//! with this exact evaluation.

use crate::models::{ColorImage, GrayImage, Rgb};

const COEF_R: f64 = 0.299;
const COEF_G: f64 = 0.587;
const COEF_B: f64 = 0.114;

/// Luma of a single RGB triple
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    let lum = COEF_R * r as f64 + COEF_G * g as f64 + COEF_B * b as f64;
    // Weights sum to 1.0, so lum never exceeds 255.0; `as` truncates.
    lum as u8
}

/// Convert a pixel sequence to grayscale, preserving order
pub fn rgb_to_grayscale(pixels: &[Rgb]) -> Vec<u8> {
    pixels.iter().map(|p| rgb_to_gray(p.r, p.g, p.b)).collect()
}

/// Convert packed `RGBRGB...` bytes to grayscale
///
/// A trailing partial pixel is ignored.
pub fn rgb_bytes_to_grayscale(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3)
        .map(|c| rgb_to_gray(c[0], c[1], c[2]))
        .collect()
}

/// Convert a color image to grayscale
///
/// Width and height are carried over unchanged; the conversion itself is
/// per pixel.
pub fn to_grayscale(image: &ColorImage) -> GrayImage {
    let gray = rgb_to_grayscale(image.pixels());
    log::debug!(
        "grayscale pass: {}x{} ({} pixels)",
        image.width(),
        image.height(),
        gray.len()
    );
    GrayImage::from_converted(image.width(), image.height(), gray)
}
