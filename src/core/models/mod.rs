//! Core data models
//!
//! Wire types for the identity provider admin API and the derived records
//! shown in the user list.

pub mod role;
pub mod user;

pub use role::*;
pub use user::*;
