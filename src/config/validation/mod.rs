//! Configuration validation
//!
//! - `trait_def`: core Validate trait definition
//! - `url`: identity provider URL checks
//! - `config_validators`: validators for every configuration section

mod config_validators;
mod trait_def;
mod url;

pub use trait_def::Validate;
pub use url::validate_base_url;
