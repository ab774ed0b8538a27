//! Network utilities
//!
//! HTTP client construction and the retry policy used for identity provider calls.

pub mod http;
pub mod retry;

pub use http::{HttpClientPoolConfig, create_idp_client};
pub use retry::{GiveUpReason, RetryDecision, RetryPolicy};
