//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Local Ports
//!
//! - `CartStorage` - Durable key-value slot holding the cart snapshot
//!
//! ## Hosted Backend Ports
//!
//! - `CatalogRepository` - `platforms` and `services` tables
//! - `TrialRequestRepository` - `trial_requests` table
//! - `ProfileReader` - `profiles` table
//! - `SessionValidator` - Resolve an access token to the caller
//! - `AuthCodeExchanger` - Exchange an authorization code for a session

mod cart_storage;
mod catalog_repository;
mod profile_reader;
mod session_validator;
mod trial_request_repository;

pub use cart_storage::{CartStorage, CartStorageError};
pub use catalog_repository::CatalogRepository;
pub use profile_reader::ProfileReader;
pub use session_validator::{AuthCodeExchanger, SessionValidator};
pub use trial_request_repository::TrialRequestRepository;
