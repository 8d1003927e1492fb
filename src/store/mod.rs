//! Key-value persistence for game state.
//!
//! The game only needs two operations: read a value once at start-up
//! (falling back to a default) and write it back after every change.
//! Values are JSON so any serializable type can be stored.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// A string-keyed store of JSON values.
pub trait KeyValueStore {
    /// Reads the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn save(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Reads and decodes the value under `key`, or returns `default`.
    ///
    /// A value that is present but does not decode as `T` is treated as
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, StoreError>
    where
        Self: Sized,
    {
        let Some(raw) = self.load(key)? else {
            debug!(key, "No stored value, using default");
            return Ok(default);
        };

        match serde_json::from_value(raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(key, error = %e, "Stored value unreadable, using default");
                Ok(default)
            }
        }
    }

    /// Encodes `value` and writes it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding fails or the storage cannot be
    /// written.
    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_value(value)?;
        self.save(key, raw)
    }
}
