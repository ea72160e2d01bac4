//! Popular movies list container.

use std::sync::Arc;

use crate::catalog::{CatalogGateway, GatewayResult, MovieListResponse};

use super::cell::StateCell;
use super::page::{LoadMode, PageIntent, PageReducer, PageState};

pub struct MoviesStore {
    gateway: Arc<dyn CatalogGateway>,
    cell: StateCell<PageState>,
}

impl MoviesStore {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self {
            gateway,
            cell: StateCell::new(),
        }
    }

    pub fn state(&self) -> PageState {
        self.cell.snapshot()
    }

    /// Load page 1, replacing whatever is shown.
    pub async fn fetch_first_page(&self) {
        let Some(generation) = self.start(LoadMode::First) else {
            return;
        };
        let result = self.gateway.get_popular(1).await;
        self.finish(generation, LoadMode::First, 1, result);
    }

    /// Append the next page.
    pub async fn fetch_next_page(&self) {
        let (generation, next) = {
            let mut cell = self.cell.lock();
            let state = cell.state();
            if state.is_busy() || !state.has_more {
                tracing::debug!("Next page request ignored");
                return;
            }
            let next = state.page + 1;
            let total_pages = state.total_pages;
            if next > total_pages {
                cell.apply::<PageReducer>(PageIntent::Exhausted);
                return;
            }
            cell.apply::<PageReducer>(PageIntent::Started {
                mode: LoadMode::Next,
            });
            (cell.generation(), next)
        };

        tracing::info!(page = next, "Fetching next page of popular movies");
        let result = self.gateway.get_popular(next).await;
        self.finish(generation, LoadMode::Next, next, result);
    }

    /// Re-fetch page 1 and replace the list.
    pub async fn refresh(&self) {
        let Some(generation) = self.start(LoadMode::Refresh) else {
            return;
        };
        let result = self.gateway.get_popular(1).await;
        self.finish(generation, LoadMode::Refresh, 1, result);
    }

    /// Back to the zero value. Results of requests still in flight are dropped.
    pub fn reset(&self) {
        let mut cell = self.cell.lock();
        cell.invalidate();
        cell.apply::<PageReducer>(PageIntent::Reset);
    }

    fn start(&self, mode: LoadMode) -> Option<u64> {
        let mut cell = self.cell.lock();
        if cell.state().is_busy() {
            tracing::debug!(?mode, "Popular request ignored, another one is in flight");
            return None;
        }
        cell.apply::<PageReducer>(PageIntent::Started { mode });
        Some(cell.generation())
    }

    fn finish(
        &self,
        generation: u64,
        mode: LoadMode,
        page: u32,
        result: GatewayResult<MovieListResponse>,
    ) {
        let intent = match result {
            Ok(response) => PageIntent::Loaded {
                mode,
                page,
                response,
            },
            Err(err) => {
                tracing::warn!(?mode, page, error = %err, "Popular request failed");
                PageIntent::Failed {
                    mode,
                    message: err.to_string(),
                }
            }
        };

        let mut cell = self.cell.lock();
        if !cell.apply_if_current::<PageReducer>(generation, intent) {
            tracing::debug!(?mode, page, "Dropping stale popular response");
        }
    }
}
