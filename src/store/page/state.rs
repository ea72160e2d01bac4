use crate::catalog::Movie;
use crate::store::mvi::UiState;

/// Accumulated results of one paginated list plus its cursor and flags.
///
/// `has_more` is true only while `page < total_pages` held for the last
/// successful response. Once false it stays false until a refresh, a new
/// query or a reset.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub movies: Vec<Movie>,
    /// 1-based page of the last successful response.
    pub page: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub refreshing: bool,
    pub has_more: bool,
    pub error: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            page: 1,
            total_pages: 1,
            loading: false,
            refreshing: false,
            has_more: true,
            error: None,
        }
    }
}

impl UiState for PageState {}

impl PageState {
    /// A load or refresh is in flight; new requests are rejected.
    pub fn is_busy(&self) -> bool {
        self.loading || self.refreshing
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
