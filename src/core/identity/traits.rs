//! Identity API trait definition

use crate::core::models::{RoleMappings, RoleSet, User};
use crate::utils::error::FetchResult;
use async_trait::async_trait;

/// Read access to the identity provider admin API
///
/// Every call already went through the retry policy, so an error returned
/// here is final for the current load.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// Fetch a single user
    async fn user(&self, user_id: &str) -> FetchResult<User>;

    /// Fetch the role mappings of a user
    async fn role_mappings(&self, user_id: &str) -> FetchResult<RoleMappings>;

    /// Fetch the direct children of a composite role
    async fn composites(&self, role_id: &str) -> FetchResult<RoleSet>;

    /// Fetch the users holding a realm role
    async fn role_users(&self, role_name: &str) -> FetchResult<Vec<User>>;

    /// Drop every cached response so the next call hits the server
    async fn invalidate(&self);
}
