//! Admin REST API endpoints

use crate::config::IdpConfig;
use crate::utils::error::{AdminError, FetchError, FetchResult, Result};
use url::Url;

/// URL builder rooted at `{base_url}/admin/realms/{realm}`
#[derive(Debug, Clone)]
pub struct Endpoints {
    realm_root: Url,
}

impl Endpoints {
    pub fn new(config: &IdpConfig) -> Result<Self> {
        let mut realm_root = Url::parse(&config.base_url)?;
        realm_root
            .path_segments_mut()
            .map_err(|_| {
                AdminError::config(format!(
                    "Identity provider base_url cannot be a base: {}",
                    config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["admin", "realms", config.realm.as_str()]);

        Ok(Self { realm_root })
    }

    pub fn realm_root(&self) -> &Url {
        &self.realm_root
    }

    /// `users/{id}`
    pub fn user(&self, user_id: &str) -> FetchResult<Url> {
        self.join(&["users", user_id])
    }

    /// `users/{id}/role-mappings`
    pub fn role_mappings(&self, user_id: &str) -> FetchResult<Url> {
        self.join(&["users", user_id, "role-mappings"])
    }

    /// `roles-by-id/{id}/composites`
    pub fn composites(&self, role_id: &str) -> FetchResult<Url> {
        self.join(&["roles-by-id", role_id, "composites"])
    }

    /// `roles/{name}/users`
    pub fn role_users(&self, role_name: &str) -> FetchResult<Url> {
        self.join(&["roles", role_name, "users"])
    }

    fn join(&self, segments: &[&str]) -> FetchResult<Url> {
        if segments.iter().any(|s| s.is_empty()) {
            return Err(FetchError::pass_through(format!(
                "Empty path segment in {:?}",
                segments
            )));
        }

        let mut url = self.realm_root.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::pass_through("Identity provider URL cannot be a base"))?
            .extend(segments);
        Ok(url)
    }
}
