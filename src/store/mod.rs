//! State containers.
//!
//! Each container owns one piece of UI state, exposes snapshots of it and
//! runs the effects (catalog requests, persistence) that change it.

pub(crate) mod cell;
pub mod detail;
pub mod favorites;
pub mod movies;
pub mod mvi;
pub mod page;
pub mod search;

use std::sync::Arc;

use crate::catalog::CatalogGateway;
use crate::storage::FavoritesRepository;

pub use detail::{DetailState, DetailStore, CAST_LIMIT};
pub use favorites::{FavoritesState, FavoritesStore};
pub use movies::MoviesStore;
pub use page::{LoadMode, PageState};
pub use search::{SearchState, SearchStore};

/// Every container the presentation layer talks to.
#[derive(Clone)]
pub struct Stores {
    pub movies: Arc<MoviesStore>,
    pub search: Arc<SearchStore>,
    pub favorites: Arc<FavoritesStore>,
    pub detail: Arc<DetailStore>,
}

impl Stores {
    pub fn new(
        gateway: Arc<dyn CatalogGateway>,
        repository: Arc<dyn FavoritesRepository>,
    ) -> Self {
        Self {
            movies: Arc::new(MoviesStore::new(Arc::clone(&gateway))),
            search: Arc::new(SearchStore::new(Arc::clone(&gateway))),
            favorites: Arc::new(FavoritesStore::new(repository)),
            detail: Arc::new(DetailStore::new(gateway)),
        }
    }
}
