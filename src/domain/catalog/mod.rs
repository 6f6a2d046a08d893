//! Catalog module - platforms and the boost services listed under them.

mod platform;
mod service;

pub use platform::Platform;
pub use service::{NewService, Service, ServiceUpdate};
