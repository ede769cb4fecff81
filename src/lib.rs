//! RustGraymap - color to grayscale to binary image reduction
//!
//! Converts an RGB raster to grayscale with the standard luma weights
//! (`0.299 R + 0.587 G + 0.114 B`, truncated), thresholds it to pure black
//! and white, and writes either stage as a binary portable graymap (`P5`).
//!
//! ```
//! use rust_graymap::{ColorImage, Rgb, reduce};
//!
//! let image = ColorImage::new(2, 1, vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]).unwrap();
//! let reduction = reduce(&image, 128);
//! assert_eq!(reduction.gray.as_bytes(), &[76, 149]);
//! assert_eq!(reduction.binary.as_bytes(), &[0, 255]);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Reduction settings (threshold, output naming)
pub mod config;
/// Error type and result alias
pub mod error;
/// Core data structures (Rgb, ColorImage, GrayImage, BinaryImage)
pub mod models;
/// Binary PGM serialization
pub mod pgm;
/// End-to-end runs: read, convert, write
pub mod pipeline;
/// Image sources (text files, synthetic palette)
pub mod source;
/// Summary statistics
pub mod tools;
/// Per-pixel conversions (grayscale, binarization)
pub mod utils;

pub use config::ReduceConfig;
pub use error::{GraymapError, Result};
pub use models::{BinaryImage, ColorImage, GrayImage, Rgb};
pub use pipeline::{OutputPaths, Reduction, process_file, process_file_with, reduce};
pub use utils::binarization::{DEFAULT_THRESHOLD, gray_to_binary, to_binary};
pub use utils::grayscale::{rgb_to_gray, to_grayscale};
