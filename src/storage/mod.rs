//! Persistent favorites store.
//!
//! Single-key, whole-value semantics: the entire favorites list is read
//! and written as one JSON document. There is no per-item API.

mod file;
mod memory;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::Movie;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors that can occur when writing the favorites list.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write favorites '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete favorites '{path}': {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize favorites: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage task failed: {0}")]
    Task(String),

    /// Injected by [`MemoryStore`] when told to fail.
    #[error("Storage unavailable")]
    Unavailable,
}

/// Durable home of the favorites list.
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// The stored list. Missing or unparseable data reads as empty.
    async fn read_all(&self) -> Vec<Movie>;

    /// Replace the stored list.
    async fn write_all(&self, favorites: &[Movie]) -> Result<(), StorageError>;

    /// Remove the stored list entirely.
    async fn delete_all(&self) -> Result<(), StorageError>;
}
