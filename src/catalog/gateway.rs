//! The seam between the state containers and the remote catalog.

use async_trait::async_trait;

use super::error::GatewayError;
use super::types::{Credits, MovieDetail, MovieListResponse};

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Read-only access to the movie catalog.
///
/// Implementations translate every failure into a [`GatewayError`];
/// callers store its message verbatim and never inspect transport details.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// One page of the popular listing (1-based).
    async fn get_popular(&self, page: u32) -> GatewayResult<MovieListResponse>;

    /// One page of text search results.
    ///
    /// A blank query must resolve to [`MovieListResponse::empty`]
    /// without touching the network.
    async fn search(&self, query: &str, page: u32) -> GatewayResult<MovieListResponse>;

    /// Full record for one movie.
    async fn get_detail(&self, id: i64) -> GatewayResult<MovieDetail>;

    /// Cast list for one movie, in server order.
    async fn get_credits(&self, id: i64) -> GatewayResult<Credits>;
}
