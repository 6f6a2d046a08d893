//! Catalog command and query handlers.

mod create_service;
mod delete_service;
mod get_services_by_platform;
mod list_platforms;
mod update_service;

pub use create_service::{CreateServiceCommand, CreateServiceHandler};
pub use delete_service::{DeleteServiceCommand, DeleteServiceHandler};
pub use get_services_by_platform::{GetServicesByPlatformHandler, GetServicesByPlatformQuery};
pub use list_platforms::{ListPlatformsHandler, ListPlatformsQuery};
pub use update_service::{UpdateServiceCommand, UpdateServiceHandler};
