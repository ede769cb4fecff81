use crate::models::{ColorImage, Rgb};

/// Side length of the default synthetic image
pub const DEFAULT_SYNTHETIC_SIZE: usize = 8;

/// Colors cycled by [`synthetic_image`]
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(255, 0, 0),     // red
    Rgb::new(0, 255, 0),     // green
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(255, 0, 255),   // magenta
    Rgb::new(0, 255, 255),   // cyan
    Rgb::new(128, 128, 128), // mid gray
    Rgb::new(255, 255, 255), // white
];

/// Deterministic diagonal-stripe test image
///
/// Pixel (x, y) takes `PALETTE[(x + y) % 8]`.
pub fn synthetic_image(width: usize, height: usize) -> ColorImage {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            pixels.push(PALETTE[(x + y) % PALETTE.len()]);
        }
    }
    // Exactly width * height pixels were pushed above.
    ColorImage::new(width, height, pixels).unwrap_or_default()
}
