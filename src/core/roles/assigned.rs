//! Directly assigned roles

use super::{AssignableRoles, dedup_by_name};
use crate::core::identity::IdentityApi;
use crate::core::models::{RoleMappings, RoleSet};
use crate::utils::error::FetchResult;
use tracing::debug;

/// Assignable roles among a user's realm mappings
///
/// Mappings are sorted by name (byte order, stable), narrowed to the
/// allow-list and deduplicated by name. No mappings yields an empty set.
pub fn resolve_assigned_roles(
    mappings: Option<&RoleMappings>,
    allow: &AssignableRoles,
) -> RoleSet {
    let Some(mappings) = mappings else {
        return RoleSet::new();
    };

    let mut roles = mappings.realm_mappings.clone();
    roles.sort_by(|a, b| a.name.cmp(&b.name));

    dedup_by_name(roles.into_iter().filter(|role| allow.contains(&role.name)))
}

/// Fetch a user's role mappings and resolve the assigned roles
///
/// An empty `user_id` resolves to an empty set without a request.
pub async fn load_assigned_roles(
    api: &dyn IdentityApi,
    user_id: &str,
    allow: &AssignableRoles,
) -> FetchResult<RoleSet> {
    if user_id.is_empty() {
        return Ok(RoleSet::new());
    }

    let mappings = api.role_mappings(user_id).await?;
    let assigned = resolve_assigned_roles(Some(&mappings), allow);
    debug!(
        user_id,
        mapped = mappings.realm_mappings.len(),
        assigned = assigned.len(),
        "Resolved assigned roles"
    );
    Ok(assigned)
}
