//! Error types for tsloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during line counting
#[derive(Error, Debug)]
pub enum TsLocError {
    /// Failed to list a directory or stat an entry during traversal
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("failed to decode file '{path}' as UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

impl TsLocError {
    /// Whether this error concerns the content of a single file, as opposed to
    /// the traversal itself.
    pub fn is_file_error(&self) -> bool {
        matches!(self, TsLocError::FileRead { .. } | TsLocError::Decode { .. })
    }
}
