use crate::store::mvi::Reducer;

use super::intent::{LoadMode, PageIntent};
use super::state::PageState;

pub struct PageReducer;

impl Reducer for PageReducer {
    type State = PageState;
    type Intent = PageIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PageIntent::Started { mode } => {
                match mode {
                    LoadMode::Refresh => state.refreshing = true,
                    LoadMode::First | LoadMode::Next => state.loading = true,
                }
                state.error = None;
                state
            }
            PageIntent::Loaded {
                mode,
                page,
                response,
            } => {
                match mode {
                    LoadMode::First | LoadMode::Refresh => {
                        state.movies = response.results;
                        state.has_more = response.page < response.total_pages;
                    }
                    LoadMode::Next => {
                        state.movies.extend(response.results);
                        state.has_more = page < response.total_pages;
                    }
                }
                state.page = page;
                // Latest server count wins, later pages included.
                state.total_pages = response.total_pages;
                state.error = None;
                clear_flag(&mut state, mode);
                state
            }
            PageIntent::Failed { mode, message } => {
                state.error = Some(message);
                clear_flag(&mut state, mode);
                state
            }
            PageIntent::Exhausted => {
                state.has_more = false;
                state
            }
            PageIntent::Emptied => PageState {
                total_pages: 0,
                has_more: false,
                ..PageState::default()
            },
            PageIntent::Reset => PageState::default(),
        }
    }
}

fn clear_flag(state: &mut PageState, mode: LoadMode) {
    match mode {
        LoadMode::Refresh => state.refreshing = false,
        LoadMode::First | LoadMode::Next => state.loading = false,
    }
}
