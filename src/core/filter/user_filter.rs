//! User list filter

use super::debounce::Debounced;
use super::predicates::{is_all_string_included, is_any_value_selected, is_selected};
use crate::core::models::UserRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Account state as offered by the enabled filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserEnabled {
    Enabled,
    Disabled,
}

impl UserEnabled {
    pub const ALL: [UserEnabled; 2] = [UserEnabled::Enabled, UserEnabled::Disabled];

    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            UserEnabled::Enabled
        } else {
            UserEnabled::Disabled
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserEnabled::Enabled => "enabled",
            UserEnabled::Disabled => "disabled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserEnabled::Enabled => "Enabled",
            UserEnabled::Disabled => "Disabled",
        }
    }
}

impl fmt::Display for UserEnabled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserEnabled {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(UserEnabled::Enabled),
            "disabled" => Ok(UserEnabled::Disabled),
            other => Err(format!(
                "invalid value '{}', expected 'enabled' or 'disabled'",
                other
            )),
        }
    }
}

/// Multi-select option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
}

/// Options offered by the user list multi-selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSelectOptions {
    pub enabled: Vec<SelectOption<UserEnabled>>,
    /// Role names over all records, first seen first
    pub role: Vec<String>,
}

/// Current (raw) user query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserQuery {
    pub username: String,
    pub last_name: String,
    pub first_name: String,
    pub enabled: Vec<UserEnabled>,
    pub roles: Vec<String>,
}

/// Filter over the user list
#[derive(Debug)]
pub struct UserFilter {
    username: Debounced<String>,
    last_name: Debounced<String>,
    first_name: Debounced<String>,
    enabled: Vec<UserEnabled>,
    roles: Vec<String>,
}

impl UserFilter {
    pub fn new(debounce: Duration) -> Self {
        Self {
            username: Debounced::new(String::new(), debounce),
            last_name: Debounced::new(String::new(), debounce),
            first_name: Debounced::new(String::new(), debounce),
            enabled: Vec::new(),
            roles: Vec::new(),
        }
    }

    pub fn set_username(&mut self, query: impl Into<String>) {
        self.username.set(query.into());
    }

    pub fn set_last_name(&mut self, query: impl Into<String>) {
        self.last_name.set(query.into());
    }

    pub fn set_first_name(&mut self, query: impl Into<String>) {
        self.first_name.set(query.into());
    }

    pub fn set_enabled(&mut self, selected: Vec<UserEnabled>) {
        self.enabled = selected;
    }

    pub fn set_roles(&mut self, selected: Vec<String>) {
        self.roles = selected;
    }

    pub fn query(&self) -> UserQuery {
        UserQuery {
            username: self.username.raw().clone(),
            last_name: self.last_name.raw().clone(),
            first_name: self.first_name.raw().clone(),
            enabled: self.enabled.clone(),
            roles: self.roles.clone(),
        }
    }

    /// Apply pending text queries immediately
    pub fn flush(&mut self) {
        self.username.flush();
        self.last_name.flush();
        self.first_name.flush();
    }

    pub fn is_pending(&self) -> bool {
        self.username.is_pending() || self.last_name.is_pending() || self.first_name.is_pending()
    }

    /// Records matching the applied queries, in input order
    pub fn apply<'a>(&self, records: &'a [UserRecord]) -> Vec<&'a UserRecord> {
        let username = self.username.applied();
        let last_name = self.last_name.applied();
        let first_name = self.first_name.applied();

        records
            .iter()
            .filter(|record| {
                is_all_string_included(&record.username, &username)
                    && is_all_string_included(&record.last_name, &last_name)
                    && is_all_string_included(&record.first_name, &first_name)
                    && is_selected(&UserEnabled::from_enabled(record.enabled), &self.enabled)
                    && is_any_value_selected(&record.roles, &self.roles)
            })
            .collect()
    }

    pub fn select_options(records: &[UserRecord]) -> UserSelectOptions {
        let mut seen = HashSet::new();
        let role = records
            .iter()
            .flat_map(|record| record.roles.iter())
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect();

        UserSelectOptions {
            enabled: UserEnabled::ALL
                .iter()
                .map(|value| SelectOption {
                    value: *value,
                    label: value.label().to_string(),
                })
                .collect(),
            role,
        }
    }
}
