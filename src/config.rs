use crate::error::ConfigError;
use crate::services::unsplash::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Environment variable holding the API access key
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Configuration for the image searcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Photo search endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API access key sent as `client_id`
    #[serde(default)]
    pub access_key: String,

    /// Start with the stricter content filter
    #[serde(default)]
    pub safe_search: bool,

    /// Keep previous results on screen while a request is in flight
    #[serde(default)]
    pub keep_results_while_loading: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            access_key: String::new(),
            safe_search: false,
            keep_results_while_loading: false,
        }
    }
}

/// Default value for endpoint
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl SearchConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fill in the access key from the environment when none is configured.
    ///
    /// A missing key is only warned about; requests will then fail with an
    /// authentication error from the service.
    pub fn with_env_access_key(mut self) -> Self {
        if self.access_key.is_empty() {
            match std::env::var(ACCESS_KEY_ENV) {
                Ok(key) if !key.is_empty() => self.access_key = key,
                _ => ::log::warn!(
                    "No access key configured; set {} or `access_key` in the config file",
                    ACCESS_KEY_ENV
                ),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config = SearchConfig::from_json("{}").unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.access_key.is_empty());
        assert!(!config.safe_search);
        assert!(!config.keep_results_while_loading);
    }

    #[test]
    fn test_from_json_overrides() {
        let config = SearchConfig::from_json(
            r#"{"endpoint": "http://localhost:8080/search", "access_key": "abc", "safe_search": true}"#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/search");
        assert_eq!(config.access_key, "abc");
        assert!(config.safe_search);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            SearchConfig::from_json("{endpoint"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SearchConfig::from_file("/nonexistent/image-searcher.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_configured_key_wins_over_environment() {
        let config = SearchConfig {
            access_key: "from-file".to_string(),
            ..SearchConfig::default()
        }
        .with_env_access_key();
        assert_eq!(config.access_key, "from-file");
    }
}
