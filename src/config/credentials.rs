//! API key resolution.
//!
//! The key comes from the config file first, then from the
//! `TMDB_API_KEY` environment variable.

use super::types::ApiConfig;

/// Environment variable consulted when the config carries no key.
pub const API_KEY_ENV_VAR: &str = "TMDB_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, Default)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl ApiConfig {
    /// Resolve the API key from config or the process environment.
    pub fn resolve_api_key(&self) -> Option<SecureString> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using a custom environment lookup.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<SecureString>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| lookup(API_KEY_ENV_VAR).filter(|key| !key.trim().is_empty()))
            .map(|key| SecureString::new(key.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn config_key_wins_over_env() {
        let config = ApiConfig {
            api_key: Some("from-config".to_string()),
            ..ApiConfig::default()
        };
        let key = config.resolve_api_key_with(|_| Some("from-env".to_string()));
        assert_eq!(key.unwrap().expose(), "from-config");
    }

    #[test]
    fn env_used_when_config_key_blank() {
        let config = ApiConfig {
            api_key: Some("   ".to_string()),
            ..ApiConfig::default()
        };
        let key = config.resolve_api_key_with(|name| {
            assert_eq!(name, API_KEY_ENV_VAR);
            Some("from-env".to_string())
        });
        assert_eq!(key.unwrap().expose(), "from-env");
    }

    #[test]
    fn missing_everywhere_is_none() {
        let config = ApiConfig::default();
        assert!(config.resolve_api_key_with(|_| None).is_none());
    }
}
