//! Role list filter

use super::debounce::Debounced;
use super::predicates::is_all_string_included;
use crate::core::models::Role;
use serde::Serialize;
use std::time::Duration;

/// Current (raw) role query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleQuery {
    pub name: String,
    pub description: String,
}

/// Text filter over role name and description
#[derive(Debug)]
pub struct RoleFilter {
    name: Debounced<String>,
    description: Debounced<String>,
}

impl RoleFilter {
    pub fn new(debounce: Duration) -> Self {
        Self {
            name: Debounced::new(String::new(), debounce),
            description: Debounced::new(String::new(), debounce),
        }
    }

    pub fn set_name(&mut self, query: impl Into<String>) {
        self.name.set(query.into());
    }

    pub fn set_description(&mut self, query: impl Into<String>) {
        self.description.set(query.into());
    }

    pub fn query(&self) -> RoleQuery {
        RoleQuery {
            name: self.name.raw().clone(),
            description: self.description.raw().clone(),
        }
    }

    /// Apply pending text queries immediately
    pub fn flush(&mut self) {
        self.name.flush();
        self.description.flush();
    }

    pub fn is_pending(&self) -> bool {
        self.name.is_pending() || self.description.is_pending()
    }

    /// Records matching the applied queries, in input order
    pub fn apply<'a>(&self, records: &'a [Role]) -> Vec<&'a Role> {
        let name = self.name.applied();
        let description = self.description.applied();

        records
            .iter()
            .filter(|role| {
                is_all_string_included(&role.name, &name)
                    && is_all_string_included(&role.description, &description)
            })
            .collect()
    }
}
