//! List filters
//!
//! Text queries are debounced: the raw query updates immediately while the
//! filtered result only follows once the query has been stable for the
//! configured period. Multi-select queries apply immediately.

mod debounce;
mod predicates;
mod role_filter;
mod user_filter;

pub use debounce::Debounced;
pub use predicates::{is_all_string_included, is_any_value_selected, is_selected};
pub use role_filter::{RoleFilter, RoleQuery};
pub use user_filter::{SelectOption, UserEnabled, UserFilter, UserQuery, UserSelectOptions};
