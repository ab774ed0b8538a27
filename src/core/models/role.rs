//! Role models

use serde::{Deserialize, Serialize};

/// A realm or client role as returned by the admin API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Opaque role id
    pub id: String,
    /// Role name, unique within its container
    pub name: String,
    /// Free text, possibly a message template such as `${role_view-realm}`
    #[serde(default)]
    pub description: String,
    /// Whether the role grants other roles
    #[serde(default)]
    pub composite: bool,
    /// Whether the role belongs to a client rather than the realm
    #[serde(default)]
    pub client_role: bool,
    /// Realm or client owning the role
    #[serde(default)]
    pub container_id: String,
}

impl Role {
    /// Realm role that has children worth expanding
    pub fn is_expandable(&self) -> bool {
        self.composite && !self.client_role
    }
}

/// An ordered list of roles
pub type RoleSet = Vec<Role>;

/// Role mappings of a single user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMappings {
    /// Realm roles mapped directly onto the user
    #[serde(default)]
    pub realm_mappings: RoleSet,
}
