//! Search results container.
//!
//! Same paging rules as the popular list, plus a query. A page-1 search
//! supersedes any search still in flight: its generation is bumped so the
//! older response is dropped when it lands.

mod intent;
mod reducer;
mod state;

use std::sync::Arc;

use crate::catalog::CatalogGateway;

use super::cell::StateCell;
use super::page::{LoadMode, PageIntent};

pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::SearchState;

pub struct SearchStore {
    gateway: Arc<dyn CatalogGateway>,
    cell: StateCell<SearchState>,
}

impl SearchStore {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self {
            gateway,
            cell: StateCell::new(),
        }
    }

    pub fn state(&self) -> SearchState {
        self.cell.snapshot()
    }

    pub fn query(&self) -> String {
        self.cell.read(|state| state.query.clone())
    }

    /// Update the search box text. Issues no request.
    pub fn set_query(&self, query: impl Into<String>) {
        self.cell.lock().apply::<SearchReducer>(SearchIntent::SetQuery {
            query: query.into(),
        });
    }

    /// Search for `query`. Page 1 replaces the results, later pages append.
    ///
    /// A blank query resets the results synchronously without a request.
    pub async fn search(&self, query: &str, page: u32) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            let mut cell = self.cell.lock();
            cell.invalidate();
            cell.apply::<SearchReducer>(SearchIntent::Results(PageIntent::Emptied));
            return;
        }

        let mode = if page <= 1 {
            LoadMode::First
        } else {
            LoadMode::Next
        };

        let generation = {
            let mut cell = self.cell.lock();
            match mode {
                LoadMode::Next if cell.state().results.is_busy() => {
                    tracing::debug!(query = %trimmed, page, "Search page ignored, busy");
                    return;
                }
                LoadMode::Next => {}
                _ => {
                    cell.invalidate();
                }
            }
            cell.apply::<SearchReducer>(SearchIntent::Results(PageIntent::Started { mode }));
            cell.generation()
        };

        tracing::info!(query = %trimmed, page, "Searching");
        let result = self.gateway.search(trimmed, page.max(1)).await;

        let intent = match result {
            Ok(response) => PageIntent::Loaded {
                mode,
                page: response.page,
                response,
            },
            Err(err) => {
                tracing::warn!(query = %trimmed, page, error = %err, "Search failed");
                PageIntent::Failed {
                    mode,
                    message: err.to_string(),
                }
            }
        };

        let mut cell = self.cell.lock();
        if !cell.apply_if_current::<SearchReducer>(generation, SearchIntent::Results(intent)) {
            tracing::debug!(query = %trimmed, page, "Dropping stale search response");
        }
    }

    /// Fetch the next page of the current query.
    pub async fn load_more(&self) {
        let (query, next) = {
            let mut cell = self.cell.lock();
            let state = cell.state();
            if state.results.is_busy() || !state.results.has_more || state.query.trim().is_empty()
            {
                return;
            }
            let next = state.results.page + 1;
            let total_pages = state.results.total_pages;
            let query = state.query.clone();
            if next > total_pages {
                cell.apply::<SearchReducer>(SearchIntent::Results(PageIntent::Exhausted));
                return;
            }
            (query, next)
        };

        self.search(&query, next).await;
    }

    /// Zero state, query included. In-flight results are dropped.
    pub fn clear(&self) {
        let mut cell = self.cell.lock();
        cell.invalidate();
        cell.apply::<SearchReducer>(SearchIntent::Clear);
    }
}
