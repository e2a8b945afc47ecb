// Re-export modules
pub mod config;
pub mod controller;
pub mod error;
pub mod query;
pub mod render;
pub mod results;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use controller::{ControllerOptions, FetchDisposition, SearchController, Session, ViewState};
pub use error::{ConfigError, TransportFailure, ValidationError};
pub use query::{PAGE_SIZE, PageStep, SafeSearch, SearchQuery};
pub use results::{ImageResult, SearchResultPage};

use config::SearchConfig;
use services::{ImageService, UnsplashClient};

/// Main builder for a search session
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Create a new Searcher builder from configuration
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Override the search endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Override the API access key
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.config.access_key = access_key.into();
        self
    }

    /// Set the initial content filter
    pub fn with_safe_search(mut self, enabled: bool) -> Self {
        self.config.safe_search = enabled;
        self
    }

    /// Keep previous results visible while loading
    pub fn with_keep_results_while_loading(mut self, keep: bool) -> Self {
        self.config.keep_results_while_loading = keep;
        self
    }

    /// Create a builder from a JSON configuration file
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let config = SearchConfig::from_file(path)?;
        Ok(Self::new(config))
    }

    /// Create a builder from a JSON configuration string
    pub fn from_config_str(config_str: &str) -> Result<Self, ConfigError> {
        let config = SearchConfig::from_json(config_str)?;
        Ok(Self::new(config))
    }

    /// Controller options derived from the configuration
    pub fn options(&self) -> ControllerOptions {
        ControllerOptions {
            safe_search: SafeSearch::from_enabled(self.config.safe_search),
            keep_results_while_loading: self.config.keep_results_while_loading,
        }
    }

    /// Start a session against the configured HTTP endpoint
    pub fn build(self) -> Result<Session<UnsplashClient>, ConfigError> {
        ::log::info!("Using search endpoint: {}", self.config.endpoint);
        let client = UnsplashClient::new(&self.config.endpoint, self.config.access_key.clone())?;
        Ok(Session::new(client, self.options()))
    }

    /// Start a session against any image service
    pub fn build_with_service<S>(self, service: S) -> Session<S>
    where
        S: ImageService + 'static,
    {
        Session::new(service, self.options())
    }
}
