//! Utility modules for realm-admin
//!
//! - **error**: error types, fetch failure classification and banners
//! - **logging**: tracing subscriber setup
//! - **net**: HTTP client construction and retry policy

pub mod error;
pub mod logging;
pub mod net;

pub use error::{AdminError, ErrorBanner, FetchError, FetchErrorKind, Result};
pub use logging::init_logging;
pub use net::{RetryDecision, RetryPolicy, create_idp_client};
