//! Filter configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Text filter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Quiet period before a text query is applied
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl FilterConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
