//! Owned raster types for each pipeline stage
//!
//! All three types store pixels in row-major order (`y * width + x`) and
//! guarantee `len() == width * height`. [`BinaryImage`] additionally
//! guarantees every value is 0 or 255; it can only be produced by
//! thresholding.

use super::Rgb;
use crate::error::{GraymapError, Result};
use crate::pgm;
use std::path::Path;

fn check_len(width: usize, height: usize, len: usize) -> Result<()> {
    if width.checked_mul(height) != Some(len) {
        return Err(GraymapError::DimensionMismatch { width, height, len });
    }
    Ok(())
}

/// Color input image
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorImage {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl ColorImage {
    /// Create a color image, checking `pixels.len() == width * height`
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self> {
        check_len(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from packed `RGBRGB...` bytes
    pub fn from_rgb_bytes(width: usize, height: usize, rgb: &[u8]) -> Result<Self> {
        if rgb.len() % 3 != 0 {
            return Err(GraymapError::DimensionMismatch {
                width,
                height,
                len: rgb.len() / 3,
            });
        }
        let pixels = rgb.chunks_exact(3).map(|c| Rgb::new(c[0], c[1], c[2])).collect();
        Self::new(width, height, pixels)
    }

    /// Image width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True for a 0-pixel image
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels in row-major order
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }
}

/// Single-channel 8-bit image
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GrayImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a grayscale image, checking `data.len() == width * height`
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        check_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Caller guarantees `data.len() == width * height`
    pub(crate) fn from_converted(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a 0-pixel image
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Intensities in row-major order
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Intensity at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Consume the image and return its intensities
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Write as a binary PGM file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        pgm::write(path, self.width, self.height, &self.data)
    }
}

/// Two-level image whose values are only 0 or 255
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinaryImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BinaryImage {
    /// Caller guarantees every value is 0 or 255 and the length matches
    pub(crate) fn from_thresholded(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        debug_assert!(data.iter().all(|&v| v == 0 || v == 255));
        Self {
            width,
            height,
            data,
        }
    }

    /// Threshold a grayscale image; see [`crate::utils::binarization::to_binary`]
    pub fn from_gray(gray: &GrayImage, threshold: u8) -> Self {
        crate::utils::binarization::to_binary(gray, threshold)
    }

    /// Image width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a 0-pixel image
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Values (0 or 255) in row-major order
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Value at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// True if the pixel at (x, y) is white
    pub fn is_white(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Some(255)
    }

    /// Consume the image and return its values
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// View as a grayscale image (same bytes)
    pub fn to_gray(&self) -> GrayImage {
        GrayImage {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }

    /// Write as a binary PGM file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        pgm::write(path, self.width, self.height, &self.data)
    }
}
