//! Identity provider connection configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Identity provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdpConfig {
    /// Base URL of the identity provider, e.g. `https://idp.example.com`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Realm whose users and roles are administered
    #[serde(default = "default_realm")]
    pub realm: String,
    /// Bearer token forwarded on every request
    #[serde(default)]
    pub access_token: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for IdpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            realm: default_realm(),
            access_token: None,
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
