use crate::catalog::Movie;
use crate::store::mvi::Intent;

use super::state::Tab;

#[derive(Debug, Clone)]
pub enum NavIntent {
    SwitchTab(Tab),
    NextTab,
    /// Move the cursor of the active list by `delta` rows, `len` rows total.
    Move { delta: isize, len: usize },
    /// Keep the active cursor inside a list that shrank.
    Clamp { len: usize },
    OpenDetail(Movie),
    CloseDetail,
    AskClear,
    DismissConfirm,
}

impl Intent for NavIntent {}
