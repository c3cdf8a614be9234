use std::path::Path;

use thiserror::Error;

use crate::services::playback::PlaybackError;

/// Error types for the airtime crate.
///
/// This enum represents the failures that can surface from playback
/// operations and from loading player configuration.
#[derive(Error, Debug)]
pub enum AirtimeError {
    /// Playback operation error
    #[error(transparent)]
    Playback(#[from] PlaybackError),

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for airtime operations.
///
/// This type alias simplifies error handling by defaulting the error type
/// to `AirtimeError` for all airtime operations.
pub type Result<T> = std::result::Result<T, AirtimeError>;

impl AirtimeError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        AirtimeError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }
}
