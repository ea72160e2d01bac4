use crate::store::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::DetailState;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Started => DetailState {
                loading: true,
                ..DetailState::default()
            },
            DetailIntent::Loaded { movie, cast } => DetailState {
                movie: Some(movie),
                cast,
                loading: false,
                error: None,
            },
            DetailIntent::Failed { message } => DetailState {
                error: Some(message),
                ..DetailState::default()
            },
            DetailIntent::Reset => DetailState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn started_clears_previous_movie() {
        let state = DetailState {
            error: Some("Resource not found.".into()),
            ..DetailState::default()
        };
        let state = DetailReducer::reduce(state, DetailIntent::Started);
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.movie.is_none());
    }

    #[test]
    fn failed_leaves_nothing_but_the_message() {
        let state = DetailReducer::reduce(DetailState::default(), DetailIntent::Started);
        let state = DetailReducer::reduce(
            state,
            DetailIntent::Failed {
                message: "Server error. Please try again later.".into(),
            },
        );
        assert!(!state.loading);
        assert!(state.cast.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("Server error. Please try again later.")
        );
    }
}
