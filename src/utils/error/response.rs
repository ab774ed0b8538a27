//! User facing rendering of fetch errors

use super::fetch::FetchError;
use serde::Serialize;
use std::fmt;

/// One error message block
///
/// `message` is the server supplied detail, or an empty string when the
/// server sent none. The block is rendered either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBanner {
    pub title: String,
    pub message: String,
}

impl From<&FetchError> for ErrorBanner {
    fn from(error: &FetchError) -> Self {
        Self {
            title: error.message().to_string(),
            message: error.detail().unwrap_or_default().to_string(),
        }
    }
}

impl ErrorBanner {
    /// One banner per populated slot, in slot order
    pub fn from_slots(errors: &[Option<FetchError>]) -> Vec<Self> {
        errors.iter().flatten().map(Self::from).collect()
    }
}

impl fmt::Display for ErrorBanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}
