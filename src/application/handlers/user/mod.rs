//! User handlers.

mod get_profile;
mod require_admin;

pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use require_admin::{RequireAdminHandler, RequireAdminQuery};
