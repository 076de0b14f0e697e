//! Search settings.

use super::error::Result;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Environment variable naming a TOML settings file.
pub const CONFIG_ENV: &str = "USERSEARCH_CONFIG";

/// Default GitHub user search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/search/users";

/// Settings for the search screen and its GitHub client.
///
/// Every field has a default, so a partial TOML document is enough:
///
/// ```rust
/// use bubbletea_usersearch::search::Config;
///
/// let config = Config::from_toml_str("page_size = 25").unwrap();
/// assert_eq!(config.page_size, 25);
/// assert_eq!(config.endpoint, "https://api.github.com/search/users");
/// assert!(config.request_timeout().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Results per page.
    pub page_size: usize,
    /// Search endpoint URL.
    pub endpoint: String,
    /// User-Agent header sent with each request. GitHub rejects requests
    /// without one.
    pub user_agent: String,
    /// Optional request timeout in seconds. Unset means wait indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 10,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Parses settings from TOML, filling missing fields with defaults.
    /// A zero page size is raised to 1.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(s)?;
        config.page_size = config.page_size.max(1);
        Ok(config)
    }

    /// Reads settings from the file named by [`CONFIG_ENV`], or returns the
    /// defaults when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reads settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Sets the page size (builder pattern). Values below 1 are raised to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the endpoint (builder pattern).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.user_agent.starts_with("bubbletea-usersearch/"));
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml_str(
            r#"
            page_size = 30
            endpoint = "http://localhost:8080/search/users"
            user_agent = "tester"
            request_timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.page_size, 30);
        assert_eq!(config.endpoint, "http://localhost:8080/search/users");
        assert_eq!(config.user_agent, "tester");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        assert_eq!(Config::from_toml_str("page_size = 0").unwrap().page_size, 1);
        assert_eq!(Config::default().with_page_size(0).page_size, 1);
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("usersearch-config-{}.toml", std::process::id()));
        std::fs::write(&path, "page_size = 15\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.page_size, 15);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = Config::from_file("/nonexistent/usersearch.toml").unwrap_err();
        assert!(matches!(err, crate::search::SearchError::Io(_)));
    }

    #[test]
    fn test_bad_toml_is_a_config_error() {
        let err = Config::from_toml_str("page_size = \"ten\"").unwrap_err();
        assert!(matches!(err, crate::search::SearchError::Config(_)));
    }
}
