//! Services module
//!
//! Services combine identity API calls and role resolution into the
//! fixed-shape results rendered by the CLI: data, one error slot per
//! independent fetch, and a validating flag.

mod resolved;
mod user_detail;
mod user_list;

pub use resolved::Resolved;
pub use user_detail::{UserDetail, UserDetailService};
pub use user_list::{UserListService, merge_role_pages};
