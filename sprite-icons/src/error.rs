//! Error types and error handling
//!
//! Rendering never fails. These errors come from setup: loading configuration
//! or reading an asset manifest.

use std::path::PathBuf;
use thiserror::Error;

/// Setup error type
#[derive(Debug, Error)]
pub enum IconError {
    /// Asset manifest could not be read
    #[error("failed to read asset manifest '{}': {source}", path.display())]
    ManifestRead {
        /// Manifest location
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Asset manifest is not a JSON object of strings
    #[error("invalid asset manifest '{}': {source}", path.display())]
    ManifestParse {
        /// Manifest location
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Default configuration could not be serialized
    #[error("failed to serialize default configuration: {0}")]
    Defaults(#[from] toml::ser::Error),
}

impl From<figment::Error> for IconError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
