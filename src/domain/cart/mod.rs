//! Cart module - the client-side shopping cart.
//!
//! `Cart` holds the state and its pure transitions. Persistence and change
//! notification live in `application::cart_store::CartStore`.

#[allow(clippy::module_inception)]
mod cart;
mod line_item;

pub use cart::Cart;
pub use line_item::LineItem;
