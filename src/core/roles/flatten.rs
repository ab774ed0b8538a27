//! Inherited role flattening

use super::{AssignableRoles, dedup_by_name};
use crate::core::models::RoleSet;

/// Flatten composite pages into the inherited role list
///
/// Pages are visited in order and unloaded pages are skipped. Assignable
/// roles and client roles are dropped, then names are deduplicated keeping
/// the first occurrence.
pub fn flatten_inherited_roles(pages: &[Option<RoleSet>], allow: &AssignableRoles) -> RoleSet {
    dedup_by_name(
        pages
            .iter()
            .flatten()
            .flatten()
            .filter(|role| !allow.contains(&role.name))
            .filter(|role| !role.client_role)
            .cloned(),
    )
}
