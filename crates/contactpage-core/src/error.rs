//! Error types for the page interaction layer

use thiserror::Error;

/// Main error type for interaction-layer operations.
///
/// None of these reach the visitor: the only user-facing failure (an
/// incomplete contact form) is a [`crate::contact::SubmitOutcome`], not an
/// error.
#[derive(Error, Debug)]
pub enum PageError {
    /// Country option id that the selector was not initialized with
    #[error("Unknown country option: {0}")]
    UnknownOption(String),

    /// CSS margin shorthand that could not be parsed as px lengths
    #[error("Invalid root margin: {0}")]
    InvalidRootMargin(String),

    /// Configuration value out of range or malformed
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// General I/O error (reading a config file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`crate::config::PageConfig`]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PageError
pub type PageResult<T> = Result<T, PageError>;
