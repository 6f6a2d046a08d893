//! File-based Cart Storage Adapter
//!
//! Stores each slot as a file named after its key under a base directory.
//! Meant for native clients that want the cart to survive restarts.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::{CartStorage, CartStorageError};

/// File-based key-value slots
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    base_path: PathBuf,
}

impl FileCartStorage {
    /// Create a new file storage with a base directory
    ///
    /// The directory is created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileCartStorage::new("./data/cart");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a key
    ///
    /// Characters outside `[A-Za-z0-9_-]` are replaced so a key can never
    /// escape the base directory.
    fn slot_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{}.json", file_name))
    }
}

impl CartStorage for FileCartStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CartStorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CartStorageError> {
        fs::create_dir_all(&self.base_path)?;
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}
