//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, auth types and error types that form the
//! vocabulary of the storefront domain.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthSession, AuthenticatedUser, Caller};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PlatformId, ServiceId, TrialRequestId, UserId};
pub use timestamp::Timestamp;
