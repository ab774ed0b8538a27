//! Identity provider access
//!
//! - `traits`: the [`IdentityApi`] seam used by the services
//! - `endpoints`: admin REST URL construction
//! - `client`: HTTP implementation with retry and response caching

mod client;
mod endpoints;
mod traits;

pub use client::{KeycloakClient, error_detail};
pub use endpoints::Endpoints;
pub use traits::IdentityApi;

#[cfg(test)]
pub use traits::MockIdentityApi;
