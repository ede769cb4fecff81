//! Per-pixel conversions
//!
//! - Grayscale conversion (RGB to luma)
//! - Binarization (global threshold)

pub mod binarization;
pub mod grayscale;
