use crate::config::ReduceConfig;
use crate::error::Result;
use crate::models::{BinaryImage, ColorImage, GrayImage};
use crate::source::{DEFAULT_SYNTHETIC_SIZE, read_text_image, synthetic_image};
use crate::tools::{BinaryStats, binary_stats};
use crate::utils::binarization::to_binary;
use crate::utils::grayscale::to_grayscale;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File name of the grayscale output of [`process_synthetic`]
pub const SYNTHETIC_GRAY_NAME: &str = "imagem_cinza.pgm";

/// File name of the binary output of [`process_synthetic`]
pub const SYNTHETIC_BINARY_NAME: &str = "imagem_binaria.pgm";

/// Both derived images of one color image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Grayscale pass output
    pub gray: GrayImage,
    /// Binary pass output
    pub binary: BinaryImage,
}

impl Reduction {
    /// White/black counts of the binary image
    pub fn binary_stats(&self) -> BinaryStats {
        binary_stats(&self.binary)
    }

    /// Write both images as PGM files
    pub fn save(&self, paths: &OutputPaths) -> Result<()> {
        self.gray.save(&paths.gray)?;
        self.binary.save(&paths.binary)
    }
}

/// Destination files for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Grayscale PGM
    pub gray: PathBuf,
    /// Binary PGM
    pub binary: PathBuf,
}

/// Run the grayscale and binary passes
pub fn reduce(image: &ColorImage, threshold: u8) -> Reduction {
    let gray = to_grayscale(image);
    let binary = to_binary(&gray, threshold);
    Reduction { gray, binary }
}

fn with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = input.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Output paths derived from an input path
///
/// The suffixes are appended to the whole path, so `photo.txt` becomes
/// `photo.txt_cinza.pgm` and `photo.txt_binaria.pgm` with the default
/// configuration.
pub fn output_paths<P: AsRef<Path>>(input: P, config: &ReduceConfig) -> OutputPaths {
    let input = input.as_ref();
    OutputPaths {
        gray: with_suffix(input, &config.gray_suffix),
        binary: with_suffix(input, &config.binary_suffix),
    }
}

/// Reduce a text image file and write both outputs next to it
pub fn process_file<P: AsRef<Path>>(input: P, threshold: u8) -> Result<OutputPaths> {
    process_file_with(input, &ReduceConfig::default().with_threshold(threshold))
}

/// [`process_file`] with explicit configuration
///
/// The input is fully read and converted before any output is created, so a
/// missing or malformed input leaves nothing on disk.
pub fn process_file_with<P: AsRef<Path>>(input: P, config: &ReduceConfig) -> Result<OutputPaths> {
    let input = input.as_ref();
    let image = read_text_image(input)?;
    log::debug!(
        "loaded {}: {}x{} pixels",
        input.display(),
        image.width(),
        image.height()
    );

    let reduction = reduce(&image, config.threshold);
    let paths = output_paths(input, config);
    reduction.save(&paths)?;
    Ok(paths)
}

/// Reduce the default synthetic image and write the outputs into `dir`
pub fn process_synthetic<P: AsRef<Path>>(dir: P, config: &ReduceConfig) -> Result<OutputPaths> {
    let dir = dir.as_ref();
    let image = synthetic_image(DEFAULT_SYNTHETIC_SIZE, DEFAULT_SYNTHETIC_SIZE);
    let reduction = reduce(&image, config.threshold);
    let paths = OutputPaths {
        gray: dir.join(SYNTHETIC_GRAY_NAME),
        binary: dir.join(SYNTHETIC_BINARY_NAME),
    };
    reduction.save(&paths)?;
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;

    #[test]
    fn test_reduce_reference_pixels() {
        let image = ColorImage::new(
            3,
            1,
            vec![
                Rgb::new(255, 0, 0),
                Rgb::new(255, 255, 255),
                Rgb::new(128, 128, 128),
            ],
        )
        .unwrap();
        let reduction = reduce(&image, 128);
        assert_eq!(reduction.gray.as_bytes(), &[76, 255, 127]);
        assert_eq!(reduction.binary.as_bytes(), &[0, 255, 0]);
    }

    #[test]
    fn test_reduce_lengths_match() {
        let image = synthetic_image(5, 3);
        let reduction = reduce(&image, 100);
        assert_eq!(reduction.gray.len(), 15);
        assert_eq!(reduction.binary.len(), 15);
        assert_eq!(reduction.binary.width(), 5);
        assert_eq!(reduction.binary.height(), 3);
    }

    #[test]
    fn test_output_paths() {
        let paths = output_paths("dir/photo.txt", &ReduceConfig::default());
        assert_eq!(paths.gray, PathBuf::from("dir/photo.txt_cinza.pgm"));
        assert_eq!(paths.binary, PathBuf::from("dir/photo.txt_binaria.pgm"));
    }

    #[test]
    fn test_synthetic_stats() {
        let reduction = reduce(&synthetic_image(8, 8), 128);
        let stats = reduction.binary_stats();
        assert_eq!(stats.total_pixels, 64);
        assert_eq!(stats.white_pixels + stats.black_pixels, 64);
        // palette grays: 76 149 29 225 105 178 127 255 -> 4 of 8 are white
        assert_eq!(stats.white_pixels, 32);
    }
}
