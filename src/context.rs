//! Builds the containers the binary needs from a loaded [`Config`].

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::catalog::{CatalogGateway, ImageUrls, TmdbClient};
use crate::config::Config;
use crate::storage::{FavoritesRepository, JsonFileStore, MemoryStore};
use crate::store::Stores;

pub struct AppContext {
    pub config: Config,
    pub stores: Stores,
    pub images: ImageUrls,
}

impl AppContext {
    pub fn from_config(config: Config) -> Result<Self> {
        let client = TmdbClient::new(&config.api).context("Failed to build HTTP client")?;
        let gateway: Arc<dyn CatalogGateway> = Arc::new(client);
        let repository = open_repository(&config);
        let images = ImageUrls::new(&config.api.image_base_url);

        Ok(Self {
            stores: Stores::new(gateway, repository),
            images,
            config,
        })
    }
}

fn open_repository(config: &Config) -> Arc<dyn FavoritesRepository> {
    match config.favorites_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using favorites file");
            Arc::new(JsonFileStore::new(path))
        }
        None => {
            tracing::warn!("No data directory available, favorites will not be saved");
            Arc::new(MemoryStore::new())
        }
    }
}
