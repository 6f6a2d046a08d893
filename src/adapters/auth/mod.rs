//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` and `AuthCodeExchanger` ports:
//!
//! - `mock` - Test implementations that don't require the hosted auth service
//! - `crate::adapters::rest::RestAuthClient` - Production implementation

mod mock;

pub use mock::{MockAuthCodeExchanger, MockSessionValidator};
