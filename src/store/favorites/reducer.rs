use crate::store::mvi::Reducer;

use super::intent::FavoritesIntent;
use super::state::FavoritesState;

pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesState;
    type Intent = FavoritesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FavoritesIntent::LoadStarted => {
                state.loading = true;
                state
            }
            FavoritesIntent::Loaded { favorites } => FavoritesState {
                favorites,
                loading: false,
                initialized: true,
            },
            FavoritesIntent::Add { movie } => {
                if !state.contains(movie.id) {
                    state.favorites.insert(0, movie);
                }
                state
            }
            FavoritesIntent::Remove { id } => {
                state.favorites.retain(|movie| movie.id != id);
                state
            }
            FavoritesIntent::Clear => {
                state.favorites.clear();
                state
            }
            FavoritesIntent::Restore { favorites } => {
                state.favorites = favorites;
                state
            }
        }
    }
}
