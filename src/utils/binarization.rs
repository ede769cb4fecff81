use crate::models::{BinaryImage, GrayImage};

/// Threshold used when the caller does not pick one
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Intensity written for pixels at or above the threshold
pub const WHITE: u8 = 255;

/// Intensity written for pixels below the threshold
pub const BLACK: u8 = 0;

/// Map one grayscale value to 0 or 255
///
/// The comparison is inclusive: `value == threshold` is white.
#[inline]
pub fn gray_to_binary(value: u8, threshold: u8) -> u8 {
    if value >= threshold { WHITE } else { BLACK }
}

/// Threshold a sequence of grayscale values, preserving order
pub fn grayscale_to_binary(gray: &[u8], threshold: u8) -> Vec<u8> {
    gray.iter().map(|&v| gray_to_binary(v, threshold)).collect()
}

/// Simple global threshold binarization
pub fn to_binary(gray: &GrayImage, threshold: u8) -> BinaryImage {
    let binary = grayscale_to_binary(gray.as_bytes(), threshold);
    log::debug!(
        "binary pass: {}x{} at threshold {}",
        gray.width(),
        gray.height(),
        threshold
    );
    BinaryImage::from_thresholded(gray.width(), gray.height(), binary)
}
