//! User detail service

use super::resolved::{InFlight, Resolved};
use crate::config::Config;
use crate::core::identity::IdentityApi;
use crate::core::models::{RoleSet, User};
use crate::core::roles::{AssignableRoles, CompositeExpander, Expansion, load_assigned_roles};
use crate::utils::error::{FetchError, FetchResult};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Everything shown on the user detail view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserDetail {
    pub user: Option<User>,
    /// Directly assigned assignable roles, sorted by name
    pub assigned_roles: RoleSet,
    /// Realm roles granted through composites
    pub inherited_roles: RoleSet,
}

/// Loads a user together with their assigned and inherited roles
///
/// Error slots are `[user, assigned roles, inherited roles]`.
#[derive(Clone)]
pub struct UserDetailService {
    api: Arc<dyn IdentityApi>,
    allow: AssignableRoles,
    max_composites: usize,
    user_loads: InFlight,
    role_loads: InFlight,
}

impl UserDetailService {
    pub fn new(api: Arc<dyn IdentityApi>, config: &Config) -> Self {
        Self::with_settings(
            api,
            config.assignable_roles.clone(),
            config.expansion.max_composites,
        )
    }

    pub fn with_settings(
        api: Arc<dyn IdentityApi>,
        allow: AssignableRoles,
        max_composites: usize,
    ) -> Self {
        Self {
            api,
            allow,
            max_composites,
            user_loads: InFlight::default(),
            role_loads: InFlight::default(),
        }
    }

    /// Whether a user fetch is in progress
    pub fn is_user_validating(&self) -> bool {
        self.user_loads.is_active()
    }

    /// Whether a role resolution is in progress
    pub fn is_roles_validating(&self) -> bool {
        self.role_loads.is_active()
    }

    /// Load the detail view of `user_id`
    ///
    /// The user and their roles are fetched concurrently; a failure of one
    /// does not prevent the other. An empty id issues no request.
    pub async fn load(&self, user_id: &str) -> Resolved<UserDetail> {
        info!(user_id, "Loading user detail");

        let (user, (assigned, expansion)) =
            tokio::join!(self.load_user(user_id), self.load_roles(user_id));

        let mut errors: Vec<Option<FetchError>> = Vec::with_capacity(3);
        let user = match user {
            Ok(user) => {
                errors.push(None);
                user
            }
            Err(e) => {
                warn!(user_id, "Failed to load user: {}", e);
                errors.push(Some(e));
                None
            }
        };
        let assigned_roles = match assigned {
            Ok(roles) => {
                errors.push(None);
                roles
            }
            Err(e) => {
                warn!(user_id, "Failed to load role mappings: {}", e);
                errors.push(Some(e));
                RoleSet::new()
            }
        };
        let inherited_roles = expansion.inherited(&self.allow);
        errors.push(expansion.error);

        Resolved {
            data: UserDetail {
                user,
                assigned_roles,
                inherited_roles,
            },
            errors,
            is_validating: self.is_user_validating() || self.is_roles_validating(),
        }
    }

    /// Drop cached responses and load again
    pub async fn reload(&self, user_id: &str) -> Resolved<UserDetail> {
        self.api.invalidate().await;
        self.load(user_id).await
    }

    async fn load_user(&self, user_id: &str) -> FetchResult<Option<User>> {
        if user_id.is_empty() {
            return Ok(None);
        }
        let _guard = self.user_loads.enter();
        self.api.user(user_id).await.map(Some)
    }

    async fn load_roles(&self, user_id: &str) -> (FetchResult<RoleSet>, Expansion) {
        let _guard = self.role_loads.enter();

        let assigned = load_assigned_roles(self.api.as_ref(), user_id, &self.allow).await;
        let expansion = match &assigned {
            Ok(roles) => {
                CompositeExpander::new(self.api.as_ref(), self.max_composites)
                    .expand(roles)
                    .await
            }
            Err(_) => Expansion::default(),
        };

        (assigned, expansion)
    }
}
