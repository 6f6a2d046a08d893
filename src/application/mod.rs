//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//!
//! - `handlers` - one struct per operation, used by the HTTP routes
//! - `actions` - the same operations wrapped in `{success, data, error}` envelopes
//! - `cart_store` - the client-side persisted cart

pub mod actions;
pub mod cart_store;
pub mod handlers;

pub use actions::{user_message, ActionResult, StorefrontActions, TrialRequestForm};
pub use cart_store::{CartListener, CartStore, SubscriptionId};
