//! OKIT Boost - Social media boost storefront
//!
//! This crate holds the persisted shopping cart used by the storefront and
//! the thin server side in front of a hosted Postgres-over-REST backend:
//! route handlers, server actions and the sign-in callback.
//!
//! Layout follows a hexagonal architecture:
//!
//! - `domain` - Cart, catalog, trial request and profile types
//! - `ports` - Contracts for storage, the hosted tables and auth
//! - `application` - Cart store, handlers and server actions
//! - `adapters` - REST, in-memory, file and HTTP implementations
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
