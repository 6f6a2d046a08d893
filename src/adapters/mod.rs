//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `rest` - Hosted backend (table API and auth API) over HTTP
//! - `memory` - In-memory repositories for tests and local runs
//! - `auth` - Mock session validation and code exchange
//! - `storage` - Cart snapshot slots (in-memory, files)
//! - `http` - axum routes exposing the storefront

pub mod auth;
pub mod http;
pub mod memory;
pub mod rest;
pub mod storage;
