//! Helper functions for creating specific error types

use super::types::AdminError;

impl AdminError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}
