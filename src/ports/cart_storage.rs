//! Cart Storage Port - Interface for the durable local slot holding the cart.
//!
//! Modeled on a browser key-value store: string values under string keys.
//! The cart store owns serialization; storages only move text.

/// Errors that can occur during cart storage operations
#[derive(Debug, thiserror::Error)]
pub enum CartStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for reading and writing raw values in a local key-value slot.
///
/// Synchronous: the cart runs to completion inside one call and never waits
/// on the network. Implementations must treat a missing key as `Ok(None)`.
pub trait CartStorage: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// `None` if nothing was ever written
    fn read(&self, key: &str) -> Result<Option<String>, CartStorageError>;

    /// Overwrite the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), CartStorageError>;
}
