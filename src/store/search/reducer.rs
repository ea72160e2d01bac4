use crate::store::mvi::Reducer;
use crate::store::page::{PageIntent, PageReducer};

use super::intent::SearchIntent;
use super::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::SetQuery { query } => {
                state.query = query;
                state
            }
            SearchIntent::Results(intent) => {
                match &intent {
                    PageIntent::Loaded { .. } | PageIntent::Failed { .. } => {
                        state.has_searched = true
                    }
                    PageIntent::Emptied | PageIntent::Reset => state.has_searched = false,
                    _ => {}
                }
                state.results = PageReducer::reduce(std::mem::take(&mut state.results), intent);
                state
            }
            SearchIntent::Clear => SearchState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MovieListResponse;
    use crate::store::page::LoadMode;

    #[test]
    fn failure_still_counts_as_searched() {
        let state = SearchReducer::reduce(
            SearchState::default(),
            SearchIntent::Results(PageIntent::Failed {
                mode: LoadMode::First,
                message: "Network error. Please check your internet connection.".into(),
            }),
        );
        assert!(state.has_searched);
        assert!(state.results.error.is_some());
    }

    #[test]
    fn emptied_resets_searched_but_keeps_query() {
        let state = SearchState {
            query: "   ".into(),
            has_searched: true,
            ..SearchState::default()
        };
        let state = SearchReducer::reduce(state, SearchIntent::Results(PageIntent::Emptied));
        assert!(!state.has_searched);
        assert_eq!(state.query, "   ");
        assert_eq!(state.results.total_pages, 0);
    }

    #[test]
    fn clear_drops_query() {
        let state = SearchState {
            query: "alien".into(),
            has_searched: true,
            ..SearchState::default()
        };
        let state = SearchReducer::reduce(
            state,
            SearchIntent::Results(PageIntent::Loaded {
                mode: LoadMode::First,
                page: 1,
                response: MovieListResponse::empty(),
            }),
        );
        let state = SearchReducer::reduce(state, SearchIntent::Clear);
        assert_eq!(state, SearchState::default());
    }
}
