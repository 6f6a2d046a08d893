//! In-Memory Cart Storage Adapter
//!
//! Keeps slots in a map. Useful for testing and for sessions that should not
//! outlive the process.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::{CartStorage, CartStorageError};

/// In-memory key-value slots.
///
/// Clones share the same map, so a test can keep a handle while the cart
/// store owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCartStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryCartStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage with one slot already written (e.g. a prior session).
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.write() {
            slots.insert(key.into(), value.into());
        }
        storage
    }

    /// Number of written slots
    pub fn len(&self) -> usize {
        self.slots.read().map(|slots| slots.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> CartStorageError {
    CartStorageError::Unavailable("in-memory storage lock poisoned".to_string())
}

impl CartStorage for InMemoryCartStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CartStorageError> {
        let slots = self.slots.read().map_err(|_| poisoned())?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CartStorageError> {
        let mut slots = self.slots.write().map_err(|_| poisoned())?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
