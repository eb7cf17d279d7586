//! Client configuration
//!
//! Settings for talking to the provider API, loadable from a YAML file:
//!
//! ```yaml
//! access_token: dop_v1_...
//! api_url: https://api.digitalocean.com
//! per_page: 200
//! http:
//!   timeout_seconds: 30
//! ```
//!
//! Command-line flags and `DIGITALOCEAN_ACCESS_TOKEN` override the file.

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::keys::{HttpKeysApi, KeysService};
use crate::pagination::DEFAULT_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default provider API endpoint
pub const DEFAULT_API_URL: &str = "https://api.digitalocean.com";

/// Environment variable holding the access token
pub const ACCESS_TOKEN_ENV: &str = "DIGITALOCEAN_ACCESS_TOKEN";

/// Largest page size the provider accepts
pub const MAX_PER_PAGE: u32 = 200;

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Personal access token
    #[serde(default)]
    pub access_token: Option<String>,

    /// Base URL of the provider API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Page size used when listing
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            api_url: default_api_url(),
            per_page: default_per_page(),
            http: HttpConfig::default(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("api_url", &self.api_url)
            .field("per_page", &self.per_page)
            .field("http", &self.http)
            .finish()
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Custom user agent
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: None,
        }
    }
}

// ============================================================================
// Loading and Building
// ============================================================================

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty file means all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Override the access token when one is given
    #[must_use]
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token {
            self.access_token = Some(token);
        }
        self
    }

    /// Override the API URL when one is given
    #[must_use]
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api_url = url;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.access_token.as_deref() {
            Some(token) if !token.trim().is_empty() => {}
            _ => return Err(Error::missing_field("access_token")),
        }

        let url = Url::parse(&self.api_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "api_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(Error::invalid_value(
                "per_page",
                format!("must be between 1 and {MAX_PER_PAGE}"),
            ));
        }

        if self.http.timeout_seconds == 0 {
            return Err(Error::invalid_value(
                "http.timeout_seconds",
                "must be greater than 0",
            ));
        }

        Ok(())
    }

    /// HTTP client settings derived from this configuration
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.api_url)
            .timeout(Duration::from_secs(self.http.timeout_seconds));
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }

    /// Authentication derived from this configuration
    pub fn auth_config(&self) -> AuthConfig {
        match &self.access_token {
            Some(token) => AuthConfig::bearer(token),
            None => AuthConfig::None,
        }
    }

    /// Validate and build an authenticated HTTP client
    pub fn build_client(&self) -> Result<HttpClient> {
        self.validate()?;
        HttpClient::with_auth(self.http_client_config(), self.auth_config())
    }

    /// Validate and build a key service over HTTP
    pub fn build_keys_service(&self) -> Result<KeysService<HttpKeysApi>> {
        let client = Arc::new(self.build_client()?);
        Ok(KeysService::new(HttpKeysApi::new(client)).with_page_size(self.per_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn valid() -> ClientConfig {
        ClientConfig::default().with_access_token(Some("dop_v1_token".to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.per_page, 200);
        assert_eq!(config.http.timeout_seconds, 30);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_from_yaml_str() {
        let config = ClientConfig::from_yaml_str(
            r"
access_token: abc
api_url: http://localhost:8080
per_page: 50
http:
  timeout_seconds: 5
  user_agent: custom/1.0
",
        )
        .unwrap();

        assert_eq!(config.access_token, Some("abc".to_string()));
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.per_page, 50);
        assert_eq!(config.http.timeout_seconds, 5);
        assert_eq!(config.http.user_agent, Some("custom/1.0".to_string()));
    }

    #[test]
    fn test_from_empty_yaml() {
        let config = ClientConfig::from_yaml_str("  \n").unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_from_invalid_yaml() {
        let result = ClientConfig::from_yaml_str("per_page: [1, 2");
        assert!(matches!(result, Err(Error::YamlParse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "access_token: from-file\nper_page: 10").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.access_token, Some("from-file".to_string()));
        assert_eq!(config.per_page, 10);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ClientConfig::from_file(dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::default()
            .with_access_token(Some("flag".to_string()))
            .with_api_url(Some("http://127.0.0.1:9".to_string()))
            .with_access_token(None);

        assert_eq!(config.access_token, Some("flag".to_string()));
        assert_eq!(config.api_url, "http://127.0.0.1:9");
    }

    #[test]
    fn test_validate() {
        assert!(valid().validate().is_ok());

        let err = ClientConfig::default().validate().unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == "access_token"));

        let blank = ClientConfig::default().with_access_token(Some("  ".to_string()));
        assert!(blank.validate().is_err());

        let mut config = valid();
        config.api_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));

        let mut config = valid();
        config.api_url = "ftp://example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { .. })
        ));

        let mut config = valid();
        config.per_page = 0;
        assert!(config.validate().is_err());
        config.per_page = 201;
        assert!(config.validate().is_err());

        let mut config = valid();
        config.http.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", valid());
        assert!(!debug.contains("dop_v1_token"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_http_client_config() {
        let mut config = valid();
        config.http.user_agent = Some("agent/2".to_string());
        let http = config.http_client_config();

        assert_eq!(http.base_url, Some(DEFAULT_API_URL.to_string()));
        assert_eq!(http.timeout, Duration::from_secs(30));
        assert_eq!(http.user_agent, "agent/2");
        assert_eq!(config.auth_config(), AuthConfig::bearer("dop_v1_token"));
    }

    #[test]
    fn test_build_keys_service() {
        let mut config = valid();
        config.per_page = 25;

        let service = config.build_keys_service().unwrap();
        assert_eq!(service.page_size(), 25);

        assert!(ClientConfig::default().build_keys_service().is_err());
    }
}
