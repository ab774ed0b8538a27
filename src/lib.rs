//! # realm-admin
//!
//! User and role administration for Keycloak-style identity providers.
//!
//! - **User list**: every user holding one of the configured assignable
//!   roles, merged by username and filterable.
//! - **User detail**: a user, their directly assigned roles and the realm
//!   roles they inherit through composite roles.
//!
//! All identity provider calls go through a retry policy with exponential
//! backoff and a shared response cache.
//!
//! ```rust,no_run
//! use realm_admin::{Config, KeycloakClient, UserDetailService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/realm-admin.yaml").await?;
//!     let client = Arc::new(KeycloakClient::new(&config)?);
//!
//!     let detail = UserDetailService::new(client, &config).load("user-id").await;
//!     for role in &detail.data.inherited_roles {
//!         println!("{}", role.name);
//!     }
//!     for banner in detail.banners() {
//!         eprintln!("{}", banner);
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::filter::{RoleFilter, UserEnabled, UserFilter};
pub use core::identity::{IdentityApi, KeycloakClient};
pub use core::models::{Role, RoleMappings, RoleSet, User, UserRecord};
pub use core::roles::{AssignableRoles, CompositeExpander, CompositeFrontier};
pub use services::{Resolved, UserDetail, UserDetailService, UserListService};
pub use utils::error::{AdminError, ErrorBanner, FetchError, FetchErrorKind, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Output of `--version`: the crate version followed by build metadata
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ngit: ",
    env!("GIT_HASH"),
    "\nbuilt: ",
    env!("BUILD_TIME"),
    "\nrustc: ",
    env!("RUST_VERSION"),
);

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the epoch at build time
    pub build_time: &'static str,
    pub git_hash: &'static str,
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
