//! Configuration data models
//!
//! This module defines all configuration structures used by realm-admin.

#![allow(missing_docs)]

pub mod expansion;
pub mod filter;
pub mod idp;
pub mod logging;
pub mod retry;

// Re-export all configuration types
pub use expansion::*;
pub use filter::*;
pub use idp::*;
pub use logging::*;
pub use retry::*;

/// Default identity provider base URL
pub fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

/// Default realm
pub fn default_realm() -> String {
    "master".to_string()
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default user agent
pub fn default_user_agent() -> String {
    format!("realm-admin/{}", env!("CARGO_PKG_VERSION"))
}

/// Default maximum retry attempts
pub fn default_max_retries() -> u32 {
    10
}

/// Default base delay for exponential backoff in milliseconds
pub fn default_base_delay_ms() -> u64 {
    1000
}

/// Default debounce quiet period for text filters in milliseconds
pub fn default_debounce_ms() -> u64 {
    200
}

/// Default upper bound on composite roles expanded per user
pub fn default_max_composites() -> usize {
    1000
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
