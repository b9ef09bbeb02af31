//! Key-value persistence for locally-owned state.
//!
//! The favorites store persists through a small [`KeyValueStore`] trait so
//! the backing medium can be swapped: the application uses [`FileStore`]
//! (one file per key under the data directory), tests use [`MemoryStore`].

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors from a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read key {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write key {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Minimal string key-value persistence interface.
///
/// Implementations are synchronous; callers treat `set` as write-through.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
