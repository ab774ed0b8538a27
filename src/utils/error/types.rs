//! Error types for realm-admin

use thiserror::Error;

/// Result type alias for realm-admin
pub type Result<T> = std::result::Result<T, AdminError>;

/// Main error type for realm-admin
#[derive(Error, Debug)]
pub enum AdminError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// URL errors
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
