//! Error types for the cvscan runtime.

use thiserror::Error;

use cvscan_core::SearchError;

/// Runtime error type.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rejected search request or engine configuration
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using the runtime Error.
pub type Result<T> = std::result::Result<T, Error>;
