//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::alert::DEFAULT_ALERT_HIDE_MS;
use crate::core::auth::{DEFAULT_CACHE_PREFIX, DEFAULT_IDENTITY_ENDPOINT, ProviderSettings};

/// Configuration value that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive number of milliseconds, got '{value}'")]
    InvalidDuration { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Web API key of the identity provider project
    pub firebase_api_key: Option<String>,

    /// Identity Toolkit base URL
    /// Example: http://localhost:9099/identitytoolkit.googleapis.com/v1 (emulator)
    pub identity_endpoint: String,

    /// Prefix of browser storage keys holding cached provider documents
    pub cache_prefix: String,

    /// How long an alert stays visible
    pub alert_hide_ms: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    /// Unparseable values fall back to their defaults and are reported.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();

        let alert_hide_ms = match lookup("ALERT_HIDE_MS") {
            None => DEFAULT_ALERT_HIDE_MS,
            Some(value) => match value.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    errors.push(ConfigError::InvalidDuration {
                        name: "ALERT_HIDE_MS",
                        value,
                    });
                    DEFAULT_ALERT_HIDE_MS
                }
            },
        };

        let config = Self {
            firebase_api_key: lookup("FIREBASE_API_KEY").filter(|key| !key.is_empty()),
            identity_endpoint: lookup("IDENTITY_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_IDENTITY_ENDPOINT.to_string()),
            cache_prefix: lookup("DOCUMENT_CACHE_PREFIX")
                .unwrap_or_else(|| DEFAULT_CACHE_PREFIX.to_string()),
            alert_hide_ms,
        };

        (config, errors)
    }

    /// Check if the identity provider is configured
    pub fn has_api_key(&self) -> bool {
        self.firebase_api_key.is_some()
    }

    /// Settings exposed to the browser
    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            api_key: self.firebase_api_key.clone(),
            identity_endpoint: self.identity_endpoint.clone(),
            cache_prefix: self.cache_prefix.clone(),
            alert_hide_ms: self.alert_hide_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.has_api_key());
        assert_eq!(config.identity_endpoint, DEFAULT_IDENTITY_ENDPOINT);
        assert_eq!(config.cache_prefix, "firestore");
        assert_eq!(config.alert_hide_ms, 6000);
    }

    #[test]
    fn test_all_fields_from_lookup() {
        let (config, errors) = Config::from_lookup(lookup_from(&[
            ("FIREBASE_API_KEY", "web-key"),
            ("IDENTITY_ENDPOINT", "http://localhost:9099/identitytoolkit.googleapis.com/v1"),
            ("DOCUMENT_CACHE_PREFIX", "voypost-cache"),
            ("ALERT_HIDE_MS", "2500"),
        ]));

        assert!(errors.is_empty());
        assert_eq!(config.firebase_api_key.as_deref(), Some("web-key"));
        assert_eq!(
            config.identity_endpoint,
            "http://localhost:9099/identitytoolkit.googleapis.com/v1"
        );
        assert_eq!(config.cache_prefix, "voypost-cache");
        assert_eq!(config.alert_hide_ms, 2500);
    }

    #[test]
    fn test_empty_api_key_is_unset() {
        let (config, _) = Config::from_lookup(lookup_from(&[("FIREBASE_API_KEY", "")]));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_invalid_duration_falls_back() {
        let (config, errors) = Config::from_lookup(lookup_from(&[("ALERT_HIDE_MS", "soon")]));
        assert_eq!(config.alert_hide_ms, 6000);
        assert_eq!(
            errors,
            vec![ConfigError::InvalidDuration {
                name: "ALERT_HIDE_MS",
                value: "soon".to_string()
            }]
        );

        let (_, errors) = Config::from_lookup(lookup_from(&[("ALERT_HIDE_MS", "0")]));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_provider_settings() {
        let (config, _) = Config::from_lookup(lookup_from(&[("FIREBASE_API_KEY", "web-key")]));
        let settings = config.provider_settings();
        assert!(settings.is_configured());
        assert_eq!(settings.alert_hide_ms, config.alert_hide_ms);
        assert_eq!(settings.cache_prefix, config.cache_prefix);
    }
}
