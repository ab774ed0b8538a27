//! User models

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A user as returned by the admin API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque user id
    pub id: String,
    /// Login name, unique within the realm
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    /// Creation time in epoch milliseconds
    #[serde(default)]
    pub created_timestamp: Option<i64>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub totp: bool,
    #[serde(default)]
    pub required_actions: Vec<String>,
    #[serde(default)]
    pub not_before: i64,
}

impl User {
    /// Creation time, if the server reported a valid one
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_timestamp
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
    }
}

/// A row of the user list
///
/// Built by merging the per-role user listings; `roles` holds the assignable
/// roles the user was found under, in allow-list order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub enabled: bool,
    pub roles: Vec<String>,
}

impl UserRecord {
    /// First sighting of `user`, found under `role`
    pub fn from_user(user: &User, role: &str) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            enabled: user.enabled,
            roles: vec![role.to_string()],
        }
    }
}
