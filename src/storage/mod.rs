//! Persistent key-value collaborator of the roster.
//!
//! Values are opaque strings; the roster stores JSON text under two keys.

pub mod file;
pub mod memory;

use crate::core::error::StorageError;

/// Key holding the JSON array of user records
pub const USERS_KEY: &str = "blockShiftUsers";

/// Key holding the JSON integer of the next id to assign
pub const NEXT_ID_KEY: &str = "blockShiftUserId";

/// Synchronous string key-value store that survives restarts
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing whatever was stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

pub use file::FileStore;
pub use memory::MemoryStore;
