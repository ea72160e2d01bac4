//! HTTP implementation of [`CatalogGateway`] for the TMDB v3 API.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{ApiConfig, SecureString};

use super::error::GatewayError;
use super::gateway::{CatalogGateway, GatewayResult};
use super::types::{Credits, MovieDetail, MovieListResponse};

const USER_AGENT: &str = concat!("cinedex/", env!("CARGO_PKG_VERSION"));

pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: SecureString,
}

impl TmdbClient {
    /// Build a client from config. A missing key is allowed; the API
    /// will answer 401 and the user sees the invalid-key message.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let api_key = config.resolve_api_key().unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("No TMDB API key configured; requests will be rejected");
        }
        Self::with_key(config, api_key)
    }

    pub fn with_key(config: &ApiConfig, api_key: SecureString) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, GatewayError> {
        let mut query: Vec<(&str, &str)> = vec![("api_key", self.api_key.expose())];
        query.extend(params.iter().map(|(name, value)| (*name, value.as_str())));

        Url::parse_with_params(&format!("{}{}", self.base_url, path), query).map_err(|err| {
            tracing::error!(path = %path, error = %err, "Failed to build catalog URL");
            GatewayError::Unexpected
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> GatewayResult<T> {
        let url = self.endpoint(path, params)?;

        let response = self.client.get(url).send().await.map_err(|err| {
            let mapped = GatewayError::from_transport(&err);
            tracing::warn!(
                path = %path,
                error_type = mapped.error_type(),
                error = %err,
                "Catalog request failed"
            );
            mapped
        })?;

        let status = response.status();
        if !status.is_success() {
            let mapped = GatewayError::from_status(status.as_u16());
            tracing::warn!(
                path = %path,
                status = status.as_u16(),
                error_type = mapped.error_type(),
                "Catalog returned an error status"
            );
            return Err(mapped);
        }

        response.json::<T>().await.map_err(|err| {
            tracing::warn!(path = %path, error = %err, "Failed to decode catalog response");
            GatewayError::from_transport(&err)
        })
    }
}

#[async_trait]
impl CatalogGateway for TmdbClient {
    async fn get_popular(&self, page: u32) -> GatewayResult<MovieListResponse> {
        tracing::debug!(page, "Fetching popular movies");
        self.get_json("/movie/popular", &[("page", page.to_string())])
            .await
    }

    async fn search(&self, query: &str, page: u32) -> GatewayResult<MovieListResponse> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(MovieListResponse::empty());
        }
        tracing::debug!(query = %query, page, "Searching movies");
        self.get_json(
            "/search/movie",
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    async fn get_detail(&self, id: i64) -> GatewayResult<MovieDetail> {
        self.get_json(&format!("/movie/{}", id), &[]).await
    }

    async fn get_credits(&self, id: i64) -> GatewayResult<Credits> {
        self.get_json(&format!("/movie/{}/credits", id), &[]).await
    }
}
