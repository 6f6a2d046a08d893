//! Storage Adapters
//!
//! Implementations of the CartStorage port.
//!
//! ## Available Adapters
//!
//! - **FileCartStorage** - Stores each slot as a JSON file on disk
//! - **InMemoryCartStorage** - Stores slots in memory (testing/ephemeral sessions)
//!
//! ## Usage
//!
//! ```ignore
//! use okit_boost::adapters::storage::{FileCartStorage, InMemoryCartStorage};
//!
//! // Native client: file-based storage
//! let storage = FileCartStorage::new("./data/cart");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryCartStorage::new();
//! ```

mod file_cart_storage;
mod in_memory_cart_storage;

pub use file_cart_storage::FileCartStorage;
pub use in_memory_cart_storage::InMemoryCartStorage;
