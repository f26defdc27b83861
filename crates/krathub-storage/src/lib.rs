//! Krathub Storage Layer
//!
//! Durable local key-value storage for client state that must survive a
//! restart. Backends implement [`KeyValueStore`]; SQLite for real use,
//! an in-memory map for tests.

mod database;
mod error;
mod memory;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use memory::MemoryStorage;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Persist capability used by the session store.
///
/// Writes complete synchronously before returning.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` when absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite the value under `key`.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
