//! Configuration: TOML file, defaults, validation and API key resolution.

mod credentials;
mod loader;
mod types;

pub use credentials::{SecureString, API_KEY_ENV_VAR};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, StorageConfig, UiConfig};
