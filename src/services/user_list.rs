//! User list service

use super::resolved::{InFlight, Resolved};
use crate::config::Config;
use crate::core::identity::IdentityApi;
use crate::core::models::{User, UserRecord};
use crate::core::roles::AssignableRoles;
use crate::utils::error::FetchError;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Merge per-role user pages into list rows
///
/// `pages[i]` holds the users of the i-th assignable role. Users are keyed
/// by username: the first sighting creates the row, later sightings append
/// their role. Rows keep first-sighting order.
pub fn merge_role_pages(allow: &AssignableRoles, pages: &[Option<Vec<User>>]) -> Vec<UserRecord> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut records: Vec<UserRecord> = Vec::new();

    for (role, page) in allow.iter().zip(pages) {
        let Some(users) = page else {
            continue;
        };
        for user in users {
            match index.get(user.username.as_str()) {
                Some(&i) => records[i].roles.push(role.to_string()),
                None => {
                    index.insert(user.username.as_str(), records.len());
                    records.push(UserRecord::from_user(user, role));
                }
            }
        }
    }

    records
}

/// Loads every user holding at least one assignable role
///
/// A single error slot holds the first failed role page.
#[derive(Clone)]
pub struct UserListService {
    api: Arc<dyn IdentityApi>,
    allow: AssignableRoles,
    loads: InFlight,
}

impl UserListService {
    pub fn new(api: Arc<dyn IdentityApi>, config: &Config) -> Self {
        Self::with_allow_list(api, config.assignable_roles.clone())
    }

    pub fn with_allow_list(api: Arc<dyn IdentityApi>, allow: AssignableRoles) -> Self {
        Self {
            api,
            allow,
            loads: InFlight::default(),
        }
    }

    pub fn is_validating(&self) -> bool {
        self.loads.is_active()
    }

    /// Fetch the users of every assignable role and merge them
    pub async fn load(&self) -> Resolved<Vec<UserRecord>> {
        info!(roles = self.allow.len(), "Loading user list");

        let pages = {
            let _guard = self.loads.enter();
            join_all(self.allow.iter().map(|role| self.api.role_users(role))).await
        };

        let mut error: Option<FetchError> = None;
        let pages: Vec<Option<Vec<User>>> = self
            .allow
            .iter()
            .zip(pages)
            .map(|(role, result)| match result {
                Ok(users) => {
                    debug!(role, users = users.len(), "Loaded role members");
                    Some(users)
                }
                Err(e) => {
                    warn!(role, "Failed to load role members: {}", e);
                    if error.is_none() {
                        error = Some(e);
                    }
                    None
                }
            })
            .collect();

        Resolved {
            data: merge_role_pages(&self.allow, &pages),
            errors: vec![error],
            is_validating: self.is_validating(),
        }
    }

    /// Drop cached responses and load again
    pub async fn reload(&self) -> Resolved<Vec<UserRecord>> {
        self.api.invalidate().await;
        self.load().await
    }
}
