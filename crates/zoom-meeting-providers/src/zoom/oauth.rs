//! OAuth "account credentials" grant for Zoom server-to-server apps.
//!
//! A single POST exchanges the app's client ID/secret (HTTP Basic) and the
//! account ID (form body) for a short-lived bearer token. There is no
//! refresh token and nothing is persisted.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, info};
use zoom_meeting_core::meeting::lenient_u64;

use crate::error::{ProviderError, ProviderResult};
use crate::token::{AccessToken, BoxFuture, TokenSource};

use super::config::{Credentials, ZoomConfig};

/// Grant type sent both as query parameter and in the form body.
const GRANT_TYPE: &str = "account_credentials";

/// Generates a Basic authentication header value.
pub fn basic_auth(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// OAuth client for the account credentials grant.
#[derive(Debug)]
pub struct OAuthClient {
    credentials: Credentials,
    token_url: String,
    http_client: reqwest::Client,
}

impl OAuthClient {
    /// Creates a new OAuth client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the endpoint URLs are invalid or the
    /// HTTP client cannot be built.
    pub fn new(credentials: Credentials, config: &ZoomConfig) -> ProviderResult<Self> {
        Ok(Self {
            credentials,
            token_url: config.auth_url.clone(),
            http_client: config.http_client()?,
        })
    }

    /// Requests a fresh access token.
    ///
    /// # Errors
    ///
    /// - `NetworkError` if the request cannot be sent or the body read
    /// - `AuthenticationFailed` for a non-success status, or when the
    ///   response carries no (or an empty) `access_token`
    /// - `InvalidResponse` if the body is not JSON
    pub async fn fetch_token(&self) -> ProviderResult<AccessToken> {
        let params = [
            ("grant_type", GRANT_TYPE),
            ("account_id", self.credentials.account_id.as_str()),
        ];

        debug!(url = %self.token_url, "requesting access token");

        let response = self
            .http_client
            .post(&self.token_url)
            .query(&[("grant_type", GRANT_TYPE)])
            .header(
                AUTHORIZATION,
                basic_auth(&self.credentials.client_id, &self.credentials.client_secret),
            )
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                ProviderError::network(format!("token request failed: {}", e)).with_provider("zoom")
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ProviderError::network(format!("failed to read token response: {}", e))
                .with_provider("zoom")
        })?;

        if !status.is_success() {
            return Err(ProviderError::authentication(format!(
                "token request failed ({}): {}",
                status,
                body.trim()
            ))
            .with_status(status.as_u16())
            .with_provider("zoom"));
        }

        let token_response: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::invalid_response(format!("invalid token response: {}", e))
                .with_provider("zoom")
        })?;

        let access_token = match token_response.access_token {
            Some(token) if !token.is_empty() => token,
            _ => {
                return Err(ProviderError::authentication("no access token in response")
                    .with_provider("zoom"));
            }
        };

        info!(expires_in = ?token_response.expires_in, "obtained access token");
        Ok(AccessToken::new(access_token))
    }
}

impl TokenSource for OAuthClient {
    fn name(&self) -> &str {
        "zoom-oauth"
    }

    fn access_token(&self) -> BoxFuture<'_, ProviderResult<AccessToken>> {
        Box::pin(self.fetch_token())
    }
}

/// Response from Zoom's token endpoint.
#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    expires_in: Option<u64>,
}
