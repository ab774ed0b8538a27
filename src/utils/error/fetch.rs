//! Errors raised while talking to the identity provider

use std::fmt;
use thiserror::Error;

/// Result type for identity provider calls
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// How a failed fetch should be treated by the retry layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// The resource does not exist. Terminal, never retried.
    NotFound,
    /// Any other failed exchange with the server. Retried with backoff.
    Transient,
    /// Failure unrelated to the remote call. Surfaced as-is.
    PassThrough,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchErrorKind::NotFound => "not_found",
            FetchErrorKind::Transient => "transient",
            FetchErrorKind::PassThrough => "pass_through",
        };
        f.write_str(name)
    }
}

/// A failed request against the identity provider
///
/// `message` is the short summary shown as a banner title; `detail` is the
/// server supplied `error` string, when the response carried one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    kind: FetchErrorKind,
    status: Option<u16>,
    message: String,
    detail: Option<String>,
}

impl FetchError {
    /// Error for a non-success HTTP status
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        let kind = if status == 404 {
            FetchErrorKind::NotFound
        } else {
            FetchErrorKind::Transient
        };

        Self {
            kind,
            status: Some(status),
            message: format!("Request failed with status code {}", status),
            detail,
        }
    }

    /// Error for a transport level failure (connect, timeout, broken body)
    pub fn transport(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        let kind = if status == Some(404) {
            FetchErrorKind::NotFound
        } else {
            FetchErrorKind::Transient
        };

        Self {
            kind,
            status,
            message: err.to_string(),
            detail: None,
        }
    }

    /// Error for a response body that could not be decoded
    pub fn decode(status: u16, err: impl fmt::Display) -> Self {
        Self {
            kind: FetchErrorKind::Transient,
            status: Some(status),
            message: format!("Failed to decode response body: {}", err),
            detail: None,
        }
    }

    /// Error that never reached the server
    pub fn pass_through<S: Into<String>>(message: S) -> Self {
        Self {
            kind: FetchErrorKind::PassThrough,
            status: None,
            message: message.into(),
            detail: None,
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == FetchErrorKind::NotFound
    }
}
