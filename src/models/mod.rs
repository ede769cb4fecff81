pub mod image;
pub mod pixel;

pub use image::{BinaryImage, ColorImage, GrayImage};
pub use pixel::Rgb;
