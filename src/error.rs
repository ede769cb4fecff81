//! Error type shared by every fallible operation in the crate

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, converting or writing images
#[derive(Debug, Error)]
pub enum GraymapError {
    /// The input path does not exist
    #[error("input file not found: {}", .path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// A line of a text image could not be parsed
    #[error("malformed input at line {line}: {reason}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// A pixel sequence does not match the declared dimensions
    #[error("expected {width}x{height} = {} values, got {len}", .width * .height)]
    DimensionMismatch {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Actual number of values
        len: usize,
    },

    /// Reading or writing a file failed
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl GraymapError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        GraymapError::Malformed {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GraymapError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, GraymapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GraymapError::NotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.to_string(), "input file not found: missing.txt");

        let err = GraymapError::malformed(3, "expected 3 values, found 2");
        assert_eq!(
            err.to_string(),
            "malformed input at line 3: expected 3 values, found 2"
        );

        let err = GraymapError::DimensionMismatch {
            width: 2,
            height: 2,
            len: 3,
        };
        assert_eq!(err.to_string(), "expected 2x2 = 4 values, got 3");
    }

    #[test]
    fn test_io_source_is_exposed() {
        use std::error::Error;

        let err = GraymapError::io(
            "out.pgm",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
        assert!(err.to_string().contains("out.pgm"));
    }
}
