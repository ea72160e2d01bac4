use crate::catalog::MovieListResponse;
use crate::store::mvi::Intent;

/// Which kind of load an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Page 1, results replace the list.
    First,
    /// Page N+1, results are appended.
    Next,
    /// Page 1 again, results replace the list, tracked by `refreshing`.
    Refresh,
}

#[derive(Debug, Clone)]
pub enum PageIntent {
    /// A request went out. Raises the mode's flag and clears the error.
    Started { mode: LoadMode },
    /// A response arrived. `page` is the page number to record.
    Loaded {
        mode: LoadMode,
        page: u32,
        response: MovieListResponse,
    },
    /// The gateway failed; accumulated movies are kept.
    Failed { mode: LoadMode, message: String },
    /// The cursor ran past the last page; no request was made.
    Exhausted,
    /// No results and nothing to page through (blank search).
    Emptied,
    /// Back to the zero value.
    Reset,
}

impl Intent for PageIntent {}
