//! Core functionality for realm-admin
//!
//! This module contains the identity provider access layer, role resolution
//! and list filtering.

pub mod filter;
pub mod identity;
pub mod models;
pub mod roles;

pub use identity::{IdentityApi, KeycloakClient};
pub use models::{Role, RoleMappings, RoleSet, User, UserRecord};
pub use roles::AssignableRoles;
