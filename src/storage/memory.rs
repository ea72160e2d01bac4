use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Semaphore;

use crate::catalog::Movie;

use super::{FavoritesRepository, StorageError};

/// In-process favorites store.
///
/// Used when no data directory is available and in tests, where write
/// failures can be switched on to exercise rollback paths. While
/// [`hold`](Self::hold) is in effect writes are counted and then parked
/// until [`release`](Self::release).
#[derive(Debug)]
pub struct MemoryStore {
    value: Mutex<Option<Vec<Movie>>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
    held: AtomicBool,
    gate: Semaphore,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            value: Mutex::new(None),
            fail_writes: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
            held: AtomicBool::new(false),
            gate: Semaphore::new(0),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_favorites(favorites: Vec<Movie>) -> Self {
        Self {
            value: Mutex::new(Some(favorites)),
            ..Self::default()
        }
    }

    /// Make every subsequent write and delete fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current stored value, `None` when the key is absent.
    pub fn stored(&self) -> Option<Vec<Movie>> {
        self.value.lock().clone()
    }

    /// Number of write/delete calls that reached the store.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Park every following write and delete until `release`.
    pub fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    /// Let parked and future writes through. A closed gate never blocks.
    pub fn release(&self) {
        self.held.store(false, Ordering::SeqCst);
        self.gate.close();
    }

    async fn check(&self) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.held.load(Ordering::SeqCst) {
            let _ = self.gate.acquire().await;
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl FavoritesRepository for MemoryStore {
    async fn read_all(&self) -> Vec<Movie> {
        self.value.lock().clone().unwrap_or_default()
    }

    async fn write_all(&self, favorites: &[Movie]) -> Result<(), StorageError> {
        self.check().await?;
        *self.value.lock() = Some(favorites.to_vec());
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StorageError> {
        self.check().await?;
        *self.value.lock() = None;
        Ok(())
    }
}
