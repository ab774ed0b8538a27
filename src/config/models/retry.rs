//! Retry configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Retry configuration for identity provider requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Attempt count at which retrying stops
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay before the first retry, doubled on each further attempt
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}
