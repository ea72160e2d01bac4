use crate::store::mvi::Intent;
use crate::store::page::PageIntent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    SetQuery { query: String },
    /// Transition of the underlying result list.
    Results(PageIntent),
    /// Back to the zero value, query included.
    Clear,
}

impl Intent for SearchIntent {}
