use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for catalog requests (e.g., "https://api.themoviedb.org/3").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL for image assets; a size token and the partial path are appended.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Direct API key. Falls back to the `TMDB_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Where favorites are persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Explicit favorites file. Defaults to `<data_dir>/cinedex/favorites.json`.
    #[serde(default)]
    pub favorites_path: Option<PathBuf>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Delay between the last keystroke in the search box and the search request.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Redraw tick in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Resolved favorites file location.
    ///
    /// `None` when nothing is configured and the platform has no data
    /// directory; favorites then live in memory for the session.
    pub fn favorites_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.storage.favorites_path {
            return Some(path.clone());
        }
        dirs::data_dir().map(|dir| dir.join("cinedex").join("favorites.json"))
    }
}
