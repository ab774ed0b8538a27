//! HTTP identity client

use super::endpoints::Endpoints;
use super::traits::IdentityApi;
use crate::config::Config;
use crate::core::models::{RoleMappings, RoleSet, User};
use crate::utils::error::{FetchError, FetchResult, Result};
use crate::utils::net::{RetryPolicy, create_idp_client};
use async_trait::async_trait;
use bytes::Bytes;
use moka::future::Cache;
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, trace};
use url::Url;

/// Upper bound on cached response bodies
const RESPONSE_CACHE_CAPACITY: u64 = 4096;

/// Identity client backed by the admin REST API
///
/// Successful bodies are cached per URL until [`IdentityApi::invalidate`] is
/// called. Concurrent requests for the same URL share a single fetch,
/// including its retries. Failures are never cached.
#[derive(Clone)]
pub struct KeycloakClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    retry: RetryPolicy,
    cache: Cache<String, Bytes>,
}

impl std::fmt::Debug for KeycloakClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeycloakClient")
            .field("realm_root", &self.endpoints.realm_root().as_str())
            .field("retry", &self.retry)
            .field("cached_entries", &self.cache.entry_count())
            .finish()
    }
}

impl KeycloakClient {
    /// Build a client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let http = create_idp_client(&config.idp)?;
        let endpoints = Endpoints::new(&config.idp)?;
        Ok(Self::with_parts(
            http,
            endpoints,
            RetryPolicy::from(&config.retry),
        ))
    }

    /// Build a client from already constructed parts
    pub fn with_parts(http: reqwest::Client, endpoints: Endpoints, retry: RetryPolicy) -> Self {
        Self {
            http,
            endpoints,
            retry,
            cache: Cache::builder()
                .max_capacity(RESPONSE_CACHE_CAPACITY)
                .build(),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> FetchResult<T> {
        let key = url.to_string();
        let body = self
            .cache
            .try_get_with(key.clone(), self.fetch_with_retry(url))
            .await
            .map_err(|e| FetchError::clone(&e))?;

        match serde_json::from_slice(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                self.cache.invalidate(&key).await;
                Err(FetchError::decode(200, e))
            }
        }
    }

    async fn fetch_with_retry(&self, url: Url) -> FetchResult<Bytes> {
        let label = url.path().to_string();
        self.retry
            .execute(&label, |attempt| {
                trace!(url = %url, attempt, "Issuing request");
                self.fetch_once(url.clone())
            })
            .await
    }

    async fn fetch_once(&self, url: Url) -> FetchResult<Bytes> {
        debug!(url = %url, "Fetching from identity provider");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::transport)?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(FetchError::from_status(status, error_detail(&body)));
        }

        let body = response.bytes().await.map_err(FetchError::transport)?;
        serde_json::from_slice::<IgnoredAny>(&body).map_err(|e| FetchError::decode(status, e))?;
        Ok(body)
    }
}

#[derive(Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    error: Option<String>,
    #[serde(default, rename = "errorMessage")]
    error_message: Option<String>,
}

/// Extract the server supplied error text from a failed response body
///
/// Returns `None` for bodies that are not a JSON object with a non-empty
/// `error` (or `errorMessage`) string.
pub fn error_detail(body: &[u8]) -> Option<String> {
    let payload: ErrorPayload = serde_json::from_slice(body).ok()?;
    payload
        .error
        .filter(|s| !s.is_empty())
        .or(payload.error_message)
        .filter(|s| !s.is_empty())
}

#[async_trait]
impl IdentityApi for KeycloakClient {
    async fn user(&self, user_id: &str) -> FetchResult<User> {
        self.get_json(self.endpoints.user(user_id)?).await
    }

    async fn role_mappings(&self, user_id: &str) -> FetchResult<RoleMappings> {
        self.get_json(self.endpoints.role_mappings(user_id)?).await
    }

    async fn composites(&self, role_id: &str) -> FetchResult<RoleSet> {
        self.get_json(self.endpoints.composites(role_id)?).await
    }

    async fn role_users(&self, role_name: &str) -> FetchResult<Vec<User>> {
        self.get_json(self.endpoints.role_users(role_name)?).await
    }

    async fn invalidate(&self) {
        debug!(entries = self.cache.entry_count(), "Invalidating response cache");
        self.cache.invalidate_all();
    }
}
