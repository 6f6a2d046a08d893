//! HTTP middleware for axum.
//!
//! - `auth` - Authentication middleware and extractors
//! - `admin` - Admin gate for the back-office routes

pub mod admin;
pub mod auth;

pub use admin::{require_admin, AdminGate};
pub use auth::{auth_middleware, extract_token, AuthRejection, AuthState, RequireAuth};
