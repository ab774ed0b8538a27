//! Configuration validators

use super::trait_def::Validate;
use super::url::validate_base_url;
use crate::config::Config;
use crate::config::models::*;
use crate::core::roles::AssignableRoles;
use std::collections::HashSet;
use tracing::debug;

/// Longest accepted debounce period
const MAX_DEBOUNCE_MS: u64 = 10_000;

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.idp.validate()?;
        self.retry.validate()?;
        self.filter.validate()?;
        self.expansion.validate()?;
        self.assignable_roles.validate()?;
        Ok(())
    }
}

impl Validate for IdpConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating identity provider configuration");

        validate_base_url(&self.base_url, "Identity provider base_url")?;

        if self.realm.trim().is_empty() {
            return Err("Realm cannot be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.user_agent.is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for RetryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_retries > 0 && self.base_delay_ms == 0 {
            return Err("Retry base_delay_ms must be greater than 0 when retries are enabled".to_string());
        }
        Ok(())
    }
}

impl Validate for FilterConfig {
    fn validate(&self) -> Result<(), String> {
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(format!(
                "Filter debounce_ms must be at most {}",
                MAX_DEBOUNCE_MS
            ));
        }
        Ok(())
    }
}

impl Validate for ExpansionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_composites == 0 {
            return Err("Expansion max_composites must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for AssignableRoles {
    fn validate(&self) -> Result<(), String> {
        if self.is_empty() {
            return Err("At least one assignable role must be configured".to_string());
        }

        let mut seen = HashSet::new();
        for name in self.iter() {
            if name.trim().is_empty() {
                return Err("Assignable role names cannot be blank".to_string());
            }
            if !seen.insert(name) {
                return Err(format!("Duplicate assignable role: {}", name));
            }
        }
        Ok(())
    }
}
