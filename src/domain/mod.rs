//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `cart` - Client-side cart aggregate and line items
//! - `catalog` - Platforms and the boost services listed under them
//! - `trial` - Free trial requests and their status lifecycle
//! - `user` - Customer profiles
//! - `constants` - Storage keys, default paths and French messages

pub mod cart;
pub mod catalog;
pub mod constants;
pub mod foundation;
pub mod trial;
pub mod user;
