//! HTTP client construction
//!
//! One `reqwest::Client` is built per identity client and reused for every
//! request, so connections and DNS lookups are shared across fetches.

use crate::config::IdpConfig;
use crate::utils::error::{AdminError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;

/// Connection pool settings for the identity provider client
#[derive(Debug, Clone)]
pub struct HttpClientPoolConfig {
    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,
    /// Idle connection timeout
    pub pool_idle_timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// TCP keepalive interval
    pub tcp_keepalive: Duration,
}

impl Default for HttpClientPoolConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: 16,
            pool_idle_timeout: Duration::from_secs(90),
            connect_timeout: Duration::from_secs(10),
            tcp_keepalive: Duration::from_secs(60),
        }
    }
}

/// Build the HTTP client used against the identity provider admin API
pub fn create_idp_client(config: &IdpConfig) -> Result<Client> {
    let pool = HttpClientPoolConfig::default();

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(token) = config.access_token.as_deref().filter(|t| !t.is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| AdminError::config(format!("Invalid access token: {}", e)))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    debug!(
        timeout_secs = config.timeout_secs,
        authenticated = headers.contains_key(AUTHORIZATION),
        "Building identity provider HTTP client"
    );

    let client = ClientBuilder::new()
        .pool_max_idle_per_host(pool.pool_max_idle_per_host)
        .pool_idle_timeout(pool.pool_idle_timeout)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(pool.connect_timeout)
        .tcp_keepalive(pool.tcp_keepalive)
        .tcp_nodelay(true)
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .build()?;

    Ok(client)
}
