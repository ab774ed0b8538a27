//! Role resolution
//!
//! - `allow_list`: the configured assignable roles
//! - `assigned`: roles mapped directly onto a user
//! - `expander`: breadth-wise expansion of composite roles
//! - `flatten`: the displayed inherited role list

mod allow_list;
mod assigned;
mod expander;
mod flatten;

pub use allow_list::AssignableRoles;
pub use assigned::{load_assigned_roles, resolve_assigned_roles};
pub use expander::{CompositeExpander, CompositeFrontier, Expansion};
pub use flatten::flatten_inherited_roles;

use crate::core::models::{Role, RoleSet};
use std::collections::HashSet;

/// Keep the first role seen for every name
///
/// Roles are compared by name only; two roles with different ids and the
/// same name collapse into one.
pub fn dedup_by_name<I>(roles: I) -> RoleSet
where
    I: IntoIterator<Item = Role>,
{
    let mut seen = HashSet::new();
    roles
        .into_iter()
        .filter(|role| seen.insert(role.name.clone()))
        .collect()
}
