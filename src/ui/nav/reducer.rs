use crate::store::mvi::Reducer;

use super::intent::NavIntent;
use super::state::NavState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::SwitchTab(tab) => {
                state.tab = tab;
                state.detail = None;
                state.confirm_clear = false;
            }
            NavIntent::NextTab => {
                state.tab = state.tab.next();
                state.detail = None;
                state.confirm_clear = false;
            }
            NavIntent::Move { delta, len } => {
                let slot = &mut state.selection[state.tab.index()];
                *slot = if len == 0 {
                    0
                } else {
                    slot.saturating_add_signed(delta).min(len - 1)
                };
            }
            NavIntent::Clamp { len } => {
                let slot = &mut state.selection[state.tab.index()];
                *slot = (*slot).min(len.saturating_sub(1));
            }
            NavIntent::OpenDetail(movie) => {
                state.detail = Some(movie);
            }
            NavIntent::CloseDetail => {
                state.detail = None;
            }
            NavIntent::AskClear => {
                state.confirm_clear = true;
            }
            NavIntent::DismissConfirm => {
                state.confirm_clear = false;
            }
        }
        state
    }
}
