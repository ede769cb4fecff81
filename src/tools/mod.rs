use crate::models::BinaryImage;
use crate::utils::binarization::WHITE;

/// Summary statistics for grayscale data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GrayStats {
    /// Minimum grayscale value.
    pub min: u8,
    /// Maximum grayscale value.
    pub max: u8,
    /// Average grayscale value (truncated).
    pub avg: u8,
}

/// Summary statistics for a binary image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BinaryStats {
    /// Count of white (255) pixels.
    pub white_pixels: usize,
    /// Count of black (0) pixels.
    pub black_pixels: usize,
    /// Total pixels in the image.
    pub total_pixels: usize,
    /// Ratio of white pixels to total pixels.
    pub white_ratio: f64,
}

/// Compute min/max/avg for grayscale values.
pub fn grayscale_stats(gray: &[u8]) -> GrayStats {
    if gray.is_empty() {
        return GrayStats::default();
    }
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum: u64 = 0;
    for &v in gray {
        min = min.min(v);
        max = max.max(v);
        sum += v as u64;
    }
    let avg = (sum / gray.len() as u64) as u8;
    GrayStats { min, max, avg }
}

/// Compute white/black pixel counts for a binary image.
pub fn binary_stats(binary: &BinaryImage) -> BinaryStats {
    let white = binary.as_bytes().iter().filter(|&&v| v == WHITE).count();
    let total = binary.len();
    let ratio = if total == 0 {
        0.0
    } else {
        white as f64 / total as f64
    };
    BinaryStats {
        white_pixels: white,
        black_pixels: total - white,
        total_pixels: total,
        white_ratio: ratio,
    }
}
