//! Zoom provider configuration.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{ProviderError, ProviderResult};

/// Server-to-server OAuth app credentials.
///
/// Shape of `~/.zoom-meeting.config.json`:
///
/// ```json
/// {"account_id": "...", "client_id": "...", "client_secret": "..."}
/// ```
///
/// Missing keys deserialize as empty strings so that [`validate`](Self::validate)
/// reports "missing" and "empty" the same way.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// Zoom account ID.
    #[serde(default)]
    pub account_id: String,
    /// OAuth client ID of the server-to-server app.
    #[serde(default)]
    pub client_id: String,
    /// OAuth client secret of the server-to-server app.
    #[serde(default)]
    pub client_secret: String,
}

impl Credentials {
    /// Creates new credentials.
    pub fn new(
        account_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Loads credentials from a JSON file.
    ///
    /// Only reads and parses; call [`validate`](Self::validate) before use.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("failed to read config file: {}", e))?;
        Self::from_json(&content)
    }

    /// Parses credentials from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("failed to parse config file: {}", e))
    }

    /// Checks that all three values are present.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.account_id.is_empty() {
            return Err("account_id is required");
        }
        if self.client_id.is_empty() {
            return Err("client_id is required");
        }
        if self.client_secret.is_empty() {
            return Err("client_secret is required");
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// Endpoints and HTTP settings for talking to Zoom.
#[derive(Debug, Clone)]
pub struct ZoomConfig {
    /// OAuth token endpoint.
    pub auth_url: String,

    /// Base of the REST API; meetings are created under
    /// `{api_base}/users/me/meetings`.
    pub api_base: String,

    /// Request timeout. `None` leaves the transport default (no timeout).
    pub timeout: Option<Duration>,

    /// User agent string for API requests.
    pub user_agent: String,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomConfig {
    /// Production token endpoint.
    pub const DEFAULT_AUTH_URL: &'static str = "https://zoom.us/oauth/token";

    /// Production REST API base.
    pub const DEFAULT_API_BASE: &'static str = "https://api.zoom.us/v2";

    /// Creates a configuration pointing at the production endpoints.
    pub fn new() -> Self {
        Self {
            auth_url: Self::DEFAULT_AUTH_URL.to_string(),
            api_base: Self::DEFAULT_API_BASE.to_string(),
            timeout: None,
            user_agent: format!("zoom-meeting/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Points both endpoints at `base`, laid out like the production hosts
    /// (`{base}/oauth/token` and `{base}/v2`).
    pub fn with_base_url(self, base: impl AsRef<str>) -> Self {
        let base = base.as_ref().trim_end_matches('/');
        self.with_auth_url(format!("{}/oauth/token", base))
            .with_api_base(format!("{}/v2", base))
    }

    /// Sets the token endpoint.
    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    /// Sets the REST API base.
    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the URL meetings are POSTed to.
    pub fn meetings_url(&self) -> String {
        format!("{}/users/me/meetings", self.api_base.trim_end_matches('/'))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        Url::parse(&self.auth_url).map_err(|e| format!("invalid auth_url {}: {}", self.auth_url, e))?;
        Url::parse(&self.api_base).map_err(|e| format!("invalid api_base {}: {}", self.api_base, e))?;

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err("timeout must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Builds the HTTP client shared by the OAuth and meetings clients.
    pub(crate) fn http_client(&self) -> ProviderResult<reqwest::Client> {
        self.validate()
            .map_err(|e| ProviderError::configuration(e).with_provider("zoom"))?;

        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().map_err(|e| {
            ProviderError::configuration("failed to create HTTP client")
                .with_provider("zoom")
                .with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_from_json() {
        let creds =
            Credentials::from_json(r#"{"account_id":"A","client_id":"B","client_secret":"C"}"#)
                .unwrap();
        assert_eq!(creds, Credentials::new("A", "B", "C"));
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn credentials_missing_and_empty_fail_alike() {
        let missing = Credentials::from_json(r#"{"client_id":"B","client_secret":"C"}"#).unwrap();
        let empty =
            Credentials::from_json(r#"{"account_id":"","client_id":"B","client_secret":"C"}"#)
                .unwrap();
        assert_eq!(missing.validate(), Err("account_id is required"));
        assert_eq!(empty.validate(), missing.validate());

        assert_eq!(
            Credentials::new("A", "", "C").validate(),
            Err("client_id is required")
        );
        assert_eq!(
            Credentials::new("A", "B", "").validate(),
            Err("client_secret is required")
        );
    }

    #[test]
    fn credentials_from_json_malformed() {
        let result = Credentials::from_json("not json");
        assert!(result.unwrap_err().contains("parse"));
    }

    #[test]
    fn credentials_from_missing_file() {
        let result = Credentials::from_file("/nonexistent/zoom-meeting/config.json");
        assert!(result.unwrap_err().contains("read"));
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let debug = format!("{:?}", Credentials::new("acct", "client", "hunter2"));
        assert!(debug.contains("acct"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn config_defaults() {
        let config = ZoomConfig::new();
        assert_eq!(config.auth_url, "https://zoom.us/oauth/token");
        assert_eq!(
            config.meetings_url(),
            "https://api.zoom.us/v2/users/me/meetings"
        );
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("zoom-meeting/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_with_base_url() {
        let config = ZoomConfig::new().with_base_url("http://127.0.0.1:4000/");
        assert_eq!(config.auth_url, "http://127.0.0.1:4000/oauth/token");
        assert_eq!(
            config.meetings_url(),
            "http://127.0.0.1:4000/v2/users/me/meetings"
        );
    }

    #[test]
    fn config_validation() {
        let bad_url = ZoomConfig::new().with_api_base("not a url");
        assert!(bad_url.validate().unwrap_err().contains("api_base"));

        let zero_timeout = ZoomConfig::new().with_timeout(Duration::ZERO);
        assert!(zero_timeout.validate().is_err());

        let ok = ZoomConfig::new().with_timeout(Duration::from_secs(10));
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn http_client_rejects_invalid_config() {
        let err = ZoomConfig::new()
            .with_auth_url("::")
            .http_client()
            .unwrap_err();
        assert_eq!(
            err.code(),
            crate::error::ProviderErrorCode::ConfigurationError
        );
    }
}
