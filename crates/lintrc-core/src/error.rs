//! Error types for configuration assembly and emission

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration operations
///
/// Assembly itself is total and cannot fail; errors only arise at the
/// edges, when the assembled value is written to or compared against disk.
#[derive(Debug, Error)]
pub enum LintrcError {
    /// Configuration comparison or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error("Serialization error: {source}")]
    SerializeError {
        #[from]
        source: serde_json::Error,
    },
}

impl LintrcError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for LintrcError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}
