//! Remote catalog gateway.
//!
//! Issues parameterized read requests against the movie catalog and
//! normalizes failures into [`GatewayError`].

mod client;
mod error;
mod gateway;
mod images;
mod types;

pub use client::TmdbClient;
pub use error::GatewayError;
pub use gateway::{CatalogGateway, GatewayResult};
pub use images::{ImageSize, ImageUrls};
pub use types::{CastMember, Credits, Genre, Movie, MovieDetail, MovieListResponse};
