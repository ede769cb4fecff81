use crate::utils::binarization::DEFAULT_THRESHOLD;
use std::env;

/// Environment variable overriding the binarization threshold
pub const THRESHOLD_ENV: &str = "GRAYMAP_THRESHOLD";

/// Suffix appended to the input file name for the grayscale output
pub const GRAY_SUFFIX: &str = "_cinza.pgm";

/// Suffix appended to the input file name for the binary output
pub const BINARY_SUFFIX: &str = "_binaria.pgm";

/// Settings for a reduction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceConfig {
    /// Binarization threshold (inclusive on the white side)
    pub threshold: u8,
    /// Appended to the input path for the grayscale output
    pub gray_suffix: String,
    /// Appended to the input path for the binary output
    pub binary_suffix: String,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            gray_suffix: GRAY_SUFFIX.to_string(),
            binary_suffix: BINARY_SUFFIX.to_string(),
        }
    }
}

impl ReduceConfig {
    /// Defaults, with the threshold taken from `GRAYMAP_THRESHOLD` when set
    pub fn from_env() -> Self {
        let threshold = parse_threshold(env::var(THRESHOLD_ENV).ok().as_deref());
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Replace the threshold
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }
}

fn parse_threshold(value: Option<&str>) -> u8 {
    let Some(value) = value else {
        return DEFAULT_THRESHOLD;
    };
    match value.trim().parse::<u8>() {
        Ok(v) => v,
        Err(_) => {
            log::warn!(
                "ignoring {}={:?}: expected an integer in 0..=255, using {}",
                THRESHOLD_ENV,
                value,
                DEFAULT_THRESHOLD
            );
            DEFAULT_THRESHOLD
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ReduceConfig::default();
        assert_eq!(cfg.threshold, 128);
        assert_eq!(cfg.gray_suffix, "_cinza.pgm");
        assert_eq!(cfg.binary_suffix, "_binaria.pgm");
        assert_eq!(cfg.with_threshold(10).threshold, 10);
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold(None), 128);
        assert_eq!(parse_threshold(Some("0")), 0);
        assert_eq!(parse_threshold(Some(" 200 ")), 200);
        assert_eq!(parse_threshold(Some("255")), 255);
        assert_eq!(parse_threshold(Some("256")), 128);
        assert_eq!(parse_threshold(Some("-1")), 128);
        assert_eq!(parse_threshold(Some("dark")), 128);
    }
}
