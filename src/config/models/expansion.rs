//! Composite role expansion configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Composite role expansion configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionConfig {
    /// Maximum number of composite roles expanded for one user
    #[serde(default = "default_max_composites")]
    pub max_composites: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_composites: default_max_composites(),
        }
    }
}
