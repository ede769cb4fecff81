//! Image sources
//!
//! - Text files holding a `width height` header and one `r g b` line per pixel
//! - Synthetic images generated from a fixed 8-color palette

pub mod synthetic;
pub mod text;

pub use synthetic::{DEFAULT_SYNTHETIC_SIZE, PALETTE, synthetic_image};
pub use text::{format_text_image, parse_text_image, read_text_image};
