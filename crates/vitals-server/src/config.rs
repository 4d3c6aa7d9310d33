//! Server configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;
use vitals_upstream::{RetryPolicy, UpstreamConfig};

/// Upstream clinical API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    /// Base URL for the API
    pub base_url: String,

    /// Optional API key, sent as `x-api-key`
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Attempts per request, including the first
    pub max_retries: u32,

    /// Page size used while fetching all patients
    pub page_limit: u32,

    /// Upper bound on pages fetched in one pass
    pub max_pages: u32,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001/api".to_string(),
            api_key: None,
            timeout_secs: 30,
            max_retries: 3,
            page_limit: 20,
            max_pages: 50,
        }
    }
}

impl UpstreamSettings {
    /// Client configuration for [`vitals_upstream::ApiClient`]
    pub fn to_client_config(&self) -> UpstreamConfig {
        let mut config = UpstreamConfig::new(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_page_limit(self.page_limit)
            .with_max_pages(self.max_pages)
            .with_retry(RetryPolicy::new(self.max_retries));

        if let Some(key) = &self.api_key {
            config = config.with_api_key(key.clone());
        }

        config
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level
    pub log_level: String,

    pub upstream: UpstreamSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            upstream: UpstreamSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Nested keys use a double underscore, e.g. `VITALS_UPSTREAM__API_KEY`.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_from("config/server")
    }

    /// Load from `file` (any extension the `config` crate knows, optional)
    /// layered under `VITALS_*` environment variables.
    ///
    /// A missing file means defaults; a file that exists but cannot be read
    /// or deserialized is an error.
    pub fn load_from(file: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix("VITALS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", file, e))
    }

    /// Copy safe to log: the API key is masked
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.upstream.api_key.is_some() {
            config.upstream.api_key = Some("***".to_string());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert!(config.upstream.api_key.is_none());
        assert_eq!(config.upstream.max_retries, 3);
    }

    #[test]
    fn test_to_client_config() {
        let settings = UpstreamSettings {
            base_url: "https://clinic.example.com/api/".to_string(),
            api_key: Some("key-123".to_string()),
            timeout_secs: 5,
            max_retries: 4,
            page_limit: 10,
            max_pages: 3,
        };

        let config = settings.to_client_config();

        assert_eq!(config.base_url, "https://clinic.example.com/api");
        assert_eq!(config.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.retry.max_attempts, 4);
        assert_eq!(config.page_limit, 10);
        assert_eq!(config.max_pages, 3);
    }

    #[test]
    fn test_zero_retries_still_sends_once() {
        let settings = UpstreamSettings {
            max_retries: 0,
            ..UpstreamSettings::default()
        };

        assert_eq!(settings.to_client_config().retry.max_attempts, 1);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ServerConfig = serde_json::from_value(serde_json::json!({
            "port": 9000,
            "upstream": { "api_key": "abc" }
        }))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.upstream.api_key.as_deref(), Some("abc"));
        assert_eq!(config.upstream.page_limit, 20);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("server");

        let config = ServerConfig::load_from(path.to_str().unwrap()).unwrap();

        assert_eq!(config.upstream.page_limit, 20);
        assert_eq!(config.upstream.max_pages, 50);
    }

    #[test]
    fn test_config_file_values_applied() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("server.toml"),
            "[upstream]\nbase_url = \"https://clinic.example.com/api\"\npage_limit = 5\n",
        )
        .unwrap();
        let path = dir.path().join("server");

        let config = ServerConfig::load_from(path.to_str().unwrap()).unwrap();

        assert_eq!(config.upstream.base_url, "https://clinic.example.com/api");
        assert_eq!(config.upstream.page_limit, 5);
    }

    #[test]
    fn test_malformed_config_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("server.toml"), "port = [not toml").unwrap();
        let path = dir.path().join("server");

        let err = ServerConfig::load_from(path.to_str().unwrap()).unwrap_err();

        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_mistyped_config_value_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("server.toml"), "port = \"eighty\"\n").unwrap();
        let path = dir.path().join("server");

        assert!(ServerConfig::load_from(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_redacted_masks_api_key() {
        let mut config = ServerConfig::default();
        config.upstream.api_key = Some("secret".to_string());

        let debug_str = format!("{:?}", config.redacted());

        assert!(!debug_str.contains("secret"));
        assert!(debug_str.contains("***"));
    }
}
