use crate::catalog::Movie;
use crate::store::mvi::UiState;

/// In-memory mirror of the persisted favorites, newest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    pub favorites: Vec<Movie>,
    pub loading: bool,
    /// A load has completed at least once, whatever its outcome.
    pub initialized: bool,
}

impl UiState for FavoritesState {}

impl FavoritesState {
    pub fn contains(&self, id: i64) -> bool {
        self.favorites.iter().any(|movie| movie.id == id)
    }
}
