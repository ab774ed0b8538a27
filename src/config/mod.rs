//! Configuration management for realm-admin
//!
//! Configuration is read from a YAML file and then overlaid with
//! `REALM_ADMIN_*` environment variables.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::roles::AssignableRoles;
use crate::utils::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "REALM_ADMIN_";

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Identity provider connection
    #[serde(default)]
    pub idp: IdpConfig,
    /// Retry policy for identity provider requests
    #[serde(default)]
    pub retry: RetryConfig,
    /// Text filter behaviour
    #[serde(default)]
    pub filter: FilterConfig,
    /// Composite role expansion limits
    #[serde(default)]
    pub expansion: ExpansionConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Role names treated as primary, directly assignable roles
    #[serde(default)]
    pub assignable_roles: AssignableRoles,
}

impl Config {
    /// Load configuration from file
    ///
    /// The file is parsed, environment overrides are applied, and the result
    /// is validated.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(Some(path.as_ref()), std::iter::empty()).await
    }

    /// Load configuration from an optional file plus overrides
    ///
    /// Layers, lowest first: defaults, the file, `REALM_ADMIN_*` environment
    /// variables, then `overrides` (same keys as the environment).
    pub async fn load<I>(path: Option<&Path>, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = match path {
            Some(path) => {
                info!("Loading configuration from: {:?}", path);
                let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                    AdminError::config(format!("Failed to read config file: {}", e))
                })?;
                Self::from_yaml_str(&content)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(std::env::vars())?;
        config.apply_env_overrides(overrides)?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse a YAML document without validating it
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AdminError::config(format!("Failed to parse config: {}", e)))
    }

    /// Apply `REALM_ADMIN_*` overrides from the given variables
    ///
    /// Unknown variables are ignored.
    pub fn apply_env_overrides<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };

            match name {
                "BASE_URL" => self.idp.base_url = value,
                "REALM" => self.idp.realm = value,
                "TOKEN" => self.idp.access_token = Some(value),
                "TIMEOUT" => {
                    self.idp.timeout_secs = value
                        .parse()
                        .map_err(|e| AdminError::config(format!("Invalid timeout: {}", e)))?;
                }
                "MAX_RETRIES" => {
                    self.retry.max_retries = value
                        .parse()
                        .map_err(|e| AdminError::config(format!("Invalid max retries: {}", e)))?;
                }
                "ASSIGNABLE_ROLES" => {
                    self.assignable_roles = value
                        .split(',')
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .collect();
                }
                "LOG_LEVEL" => self.logging.level = value,
                _ => {}
            }
            debug!(variable = %key, "Applied environment override");
        }

        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(self).map_err(AdminError::Config)?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AdminError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
