use async_trait::async_trait;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::catalog::Movie;

use super::{FavoritesRepository, StorageError};

/// Favorites persisted as one JSON file.
///
/// Writes go to a sibling temp file that is renamed over the target while an
/// exclusive advisory lock is held on `<file>.lock`, so readers never see a
/// half-written list.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "favorites.json".into());
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn lock(&self) -> std::io::Result<File> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.sibling(".lock"))?;
        lock.lock_exclusive()?;
        Ok(lock)
    }

    fn read_blocking(&self) -> Vec<Movie> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to read favorites");
                return Vec::new();
            }
        };

        if content.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&content) {
            Ok(favorites) => favorites,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Favorites file is corrupt, treating as empty"
                );
                Vec::new()
            }
        }
    }

    fn write_blocking(&self, content: Vec<u8>) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        let lock = self.lock().map_err(write_err)?;
        let tmp = self.sibling(".tmp");
        let result = (|| {
            let mut file = File::create(&tmp)?;
            file.write_all(&content)?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)
        })();
        let _ = FileExt::unlock(&lock);

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result.map_err(write_err)
    }

    fn delete_blocking(&self) -> Result<(), StorageError> {
        let delete_err = |source| StorageError::Delete {
            path: self.path.clone(),
            source,
        };

        let lock = self.lock().map_err(delete_err)?;
        let result = match fs::remove_file(&self.path) {
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            other => other,
        };
        let _ = FileExt::unlock(&lock);
        result.map_err(delete_err)
    }
}

#[async_trait]
impl FavoritesRepository for JsonFileStore {
    async fn read_all(&self) -> Vec<Movie> {
        let store = self.clone();
        match tokio::task::spawn_blocking(move || store.read_blocking()).await {
            Ok(favorites) => favorites,
            Err(err) => {
                tracing::warn!(error = %err, "Favorites read task failed");
                Vec::new()
            }
        }
    }

    async fn write_all(&self, favorites: &[Movie]) -> Result<(), StorageError> {
        let content = serde_json::to_vec(favorites)?;
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.write_blocking(content))
            .await
            .map_err(|err| StorageError::Task(err.to_string()))?
    }

    async fn delete_all(&self) -> Result<(), StorageError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.delete_blocking())
            .await
            .map_err(|err| StorageError::Task(err.to_string()))?
    }
}
