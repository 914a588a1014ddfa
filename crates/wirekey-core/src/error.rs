//! Error types for generation runs

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for generation operations
pub type WirekeyResult<T> = Result<T, WirekeyError>;

/// Error type for generation operations
///
/// None of these are produced by key mapping or extraction, which never fail.
/// They cover the surrounding run: configuration, reading sources, writing the
/// artifact.
#[derive(Error, Debug)]
pub enum WirekeyError {
    /// No input folder was configured
    #[error("no input folder provided; pass --input <dir> or set `input` in wirekey.toml")]
    MissingInput,

    /// The configured input folder does not exist
    #[error("input folder not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Reading or writing a file failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be parsed
    #[error("failed to parse {}: {message}", path.display())]
    SourceParse { path: PathBuf, message: String },

    /// Configuration file error
    #[error("configuration error: {0}")]
    Config(String),
}

impl WirekeyError {
    /// Wrap an I/O error with the path it happened at
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        WirekeyError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns true for errors caused by configuration rather than by input content
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            WirekeyError::MissingInput | WirekeyError::InputNotFound(_) | WirekeyError::Config(_)
        )
    }
}
