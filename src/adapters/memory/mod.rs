//! In-memory repositories for tests and local development.
//!
//! Each adapter mimics the hosted table it stands in for: same filters, same
//! ordering, generated ids and `created_at` on insert.

mod catalog;
mod profiles;
mod trial_requests;

pub use catalog::InMemoryCatalogRepository;
pub use profiles::InMemoryProfileReader;
pub use trial_requests::InMemoryTrialRequestRepository;

use crate::domain::foundation::{DomainError, ErrorCode};

fn lock_poisoned() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "in-memory repository lock poisoned")
}
