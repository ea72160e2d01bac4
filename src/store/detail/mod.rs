//! Detail container: one movie plus its top-billed cast.

mod intent;
mod reducer;
mod state;

use std::sync::Arc;

use tokio::task::JoinError;

use crate::catalog::{CatalogGateway, GatewayError, GatewayResult};

use super::cell::StateCell;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::DetailState;

/// Cast members kept per movie, in server order.
pub const CAST_LIMIT: usize = 10;

pub struct DetailStore {
    gateway: Arc<dyn CatalogGateway>,
    cell: StateCell<DetailState>,
}

impl DetailStore {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self {
            gateway,
            cell: StateCell::new(),
        }
    }

    pub fn state(&self) -> DetailState {
        self.cell.snapshot()
    }

    /// Fetch detail and credits concurrently and publish both, or the first
    /// error (detail before credits).
    ///
    /// Starting a new fetch or calling [`reset`](Self::reset) disowns any
    /// fetch still running.
    pub async fn fetch_details(&self, id: i64) {
        let generation = {
            let mut cell = self.cell.lock();
            let generation = cell.invalidate();
            cell.apply::<DetailReducer>(DetailIntent::Started);
            generation
        };

        tracing::info!(id, "Fetching movie detail");

        let detail = tokio::spawn({
            let gateway = Arc::clone(&self.gateway);
            async move { gateway.get_detail(id).await }
        });
        let credits = tokio::spawn({
            let gateway = Arc::clone(&self.gateway);
            async move { gateway.get_credits(id).await }
        });
        let (detail, credits) = tokio::join!(detail, credits);
        let detail = flatten(detail);
        let credits = flatten(credits);

        let intent = match (detail, credits) {
            (Ok(movie), Ok(credits)) => {
                let cast = credits.cast.into_iter().take(CAST_LIMIT).collect();
                DetailIntent::Loaded { movie, cast }
            }
            (Err(err), _) | (Ok(_), Err(err)) => {
                tracing::warn!(id, error = %err, "Movie detail failed");
                DetailIntent::Failed {
                    message: err.to_string(),
                }
            }
        };

        let mut cell = self.cell.lock();
        if !cell.apply_if_current::<DetailReducer>(generation, intent) {
            tracing::debug!(id, "Dropping stale movie detail");
        }
    }

    /// Back to the zero value, disowning any fetch in flight.
    pub fn reset(&self) {
        let mut cell = self.cell.lock();
        cell.invalidate();
        cell.apply::<DetailReducer>(DetailIntent::Reset);
    }
}

fn flatten<T>(joined: Result<GatewayResult<T>, JoinError>) -> GatewayResult<T> {
    joined.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Detail task did not complete");
        Err(GatewayError::Unexpected)
    })
}
