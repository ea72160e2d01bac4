//! Favorites container.
//!
//! Every mutation is applied to the in-memory list first, then the whole
//! list is persisted. If the write fails the pre-image is restored. Writes
//! are serialized so the stored list matches memory whenever nothing is in
//! flight.

mod intent;
mod reducer;
mod state;

use std::sync::Arc;

use tokio::sync::Mutex as AsyncMutex;

use crate::catalog::Movie;
use crate::storage::{FavoritesRepository, StorageError};

use super::cell::StateCell;

pub use intent::FavoritesIntent;
pub use reducer::FavoritesReducer;
pub use state::FavoritesState;

enum Persist {
    Write(Vec<Movie>),
    Delete,
}

pub struct FavoritesStore {
    repo: Arc<dyn FavoritesRepository>,
    cell: StateCell<FavoritesState>,
    write_lock: AsyncMutex<()>,
}

impl FavoritesStore {
    pub fn new(repo: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            repo,
            cell: StateCell::new(),
            write_lock: AsyncMutex::new(()),
        }
    }

    pub fn state(&self) -> FavoritesState {
        self.cell.snapshot()
    }

    pub fn favorites(&self) -> Vec<Movie> {
        self.cell.read(|state| state.favorites.clone())
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.cell.read(|state| state.contains(id))
    }

    /// Read the persisted list into memory. Safe to call repeatedly.
    pub async fn load(&self) {
        let _write = self.write_lock.lock().await;
        self.cell
            .lock()
            .apply::<FavoritesReducer>(FavoritesIntent::LoadStarted);

        let favorites = self.repo.read_all().await;
        tracing::info!(count = favorites.len(), "Loaded favorites");

        self.cell
            .lock()
            .apply::<FavoritesReducer>(FavoritesIntent::Loaded { favorites });
    }

    /// Prepend `movie`. Returns `true` if it is (or already was) persisted.
    pub async fn add(&self, movie: Movie) -> bool {
        let id = movie.id;
        self.mutate("add", id, FavoritesIntent::Add { movie }).await
    }

    pub async fn remove(&self, id: i64) -> bool {
        self.mutate("remove", id, FavoritesIntent::Remove { id }).await
    }

    /// Drop every favorite and delete the stored value.
    pub async fn clear(&self) -> bool {
        self.mutate("clear", 0, FavoritesIntent::Clear).await
    }

    /// Remove `movie` if present, otherwise add it.
    pub async fn toggle(&self, movie: Movie) -> bool {
        if self.is_favorite(movie.id) {
            self.remove(movie.id).await
        } else {
            self.add(movie).await
        }
    }

    async fn mutate(&self, op: &'static str, id: i64, intent: FavoritesIntent) -> bool {
        let _write = self.write_lock.lock().await;

        let (pre_image, persist) = {
            let mut cell = self.cell.lock();
            if let FavoritesIntent::Add { movie } = &intent {
                if cell.state().contains(movie.id) {
                    tracing::debug!(id, "Already a favorite");
                    return true;
                }
            }
            let pre_image = cell.state().favorites.clone();
            let delete = matches!(intent, FavoritesIntent::Clear);
            cell.apply::<FavoritesReducer>(intent);
            let persist = if delete {
                Persist::Delete
            } else {
                Persist::Write(cell.state().favorites.clone())
            };
            (pre_image, persist)
        };

        let result: Result<(), StorageError> = match &persist {
            Persist::Write(favorites) => self.repo.write_all(favorites).await,
            Persist::Delete => self.repo.delete_all().await,
        };

        match result {
            Ok(()) => {
                tracing::info!(op, id, "Favorites updated");
                true
            }
            Err(err) => {
                tracing::warn!(op, id, error = %err, "Failed to persist favorites, rolling back");
                self.cell
                    .lock()
                    .apply::<FavoritesReducer>(FavoritesIntent::Restore {
                        favorites: pre_image,
                    });
                false
            }
        }
    }
}
