//! Error handling for realm-admin
//!
//! This module defines the crate-level error type and the error produced by
//! calls against the identity provider.

#![allow(missing_docs)]

mod fetch;
mod helpers;
mod response;
mod types;

pub use fetch::{FetchError, FetchErrorKind, FetchResult};
pub use response::ErrorBanner;
pub use types::{AdminError, Result};
