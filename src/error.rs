//! Error types for slidein
//!
//! The widget itself is infallible; only configuration loading can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for slidein
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid color '{0}' (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for slidein operations
pub type Result<T> = std::result::Result<T, Error>;
