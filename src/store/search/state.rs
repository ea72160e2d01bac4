use crate::store::mvi::UiState;
use crate::store::page::PageState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Text in the search box. Setting it never triggers a request.
    pub query: String,
    pub results: PageState,
    /// A non-blank query has been answered (successfully or not).
    pub has_searched: bool,
}

impl UiState for SearchState {}
