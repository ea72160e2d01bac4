use crate::catalog::Movie;
use crate::store::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FavoritesIntent {
    LoadStarted,
    Loaded { favorites: Vec<Movie> },
    /// Prepend, unless the id is already present.
    Add { movie: Movie },
    Remove { id: i64 },
    Clear,
    /// Compensation after a failed write: put the pre-image back.
    Restore { favorites: Vec<Movie> },
}

impl Intent for FavoritesIntent {}
