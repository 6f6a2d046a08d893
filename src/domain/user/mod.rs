//! User module - customer profiles.

mod profile;

pub use profile::{Profile, UserRole};
