//! Zoom meetings API client.

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use zoom_meeting_core::{MeetingRequest, MeetingResult};

use crate::error::{ProviderError, ProviderResult};
use crate::token::TokenSource;

use super::config::ZoomConfig;

/// Client for the meetings endpoint.
#[derive(Debug)]
pub struct ZoomClient {
    http_client: reqwest::Client,
    meetings_url: String,
}

impl ZoomClient {
    /// Creates a new meetings client.
    pub fn new(config: &ZoomConfig) -> ProviderResult<Self> {
        Ok(Self {
            http_client: config.http_client()?,
            meetings_url: config.meetings_url(),
        })
    }

    /// Creates a meeting for the token's user and returns its join link.
    ///
    /// A token is requested from `tokens` for every call.
    ///
    /// # Errors
    ///
    /// - whatever `tokens` returns when it cannot produce a token
    /// - `NetworkError` if the request cannot be built, sent, or read
    /// - a status-derived code (see [`ProviderErrorCode::from_status`]) for
    ///   non-success responses
    /// - `InvalidResponse` if the body is not JSON or has no `join_url`
    ///
    /// [`ProviderErrorCode::from_status`]: crate::error::ProviderErrorCode::from_status
    pub async fn create_meeting(
        &self,
        request: &MeetingRequest,
        tokens: &dyn TokenSource,
    ) -> ProviderResult<MeetingResult> {
        let token = tokens.access_token().await?;
        debug!(source = tokens.name(), "obtained token for meeting creation");

        let payload = serde_json::to_vec(request).map_err(|e| {
            ProviderError::network("failed to encode meeting request")
                .with_provider("zoom")
                .with_source(e)
        })?;

        debug!(url = %self.meetings_url, topic = %request.topic, "creating meeting");

        let response = self
            .http_client
            .post(&self.meetings_url)
            .bearer_auth(token.secret())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                let err = if e.is_timeout() {
                    ProviderError::network("request timeout")
                } else if e.is_connect() {
                    ProviderError::network(format!("connection failed: {}", e))
                } else {
                    ProviderError::network(format!("request failed: {}", e))
                };
                err.with_provider("zoom")
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ProviderError::network(format!("failed to read response: {}", e)).with_provider("zoom")
        })?;

        if !status.is_success() {
            return Err(ProviderError::from_status(status.as_u16(), &body).with_provider("zoom"));
        }

        let meeting: MeetingResult = serde_json::from_str(&body).map_err(|e| {
            ProviderError::invalid_response(format!("failed to parse response: {}", e))
                .with_provider("zoom")
        })?;

        if meeting.join_url.is_empty() {
            return Err(
                ProviderError::invalid_response("no join_url in response").with_provider("zoom")
            );
        }

        info!(id = ?meeting.id, url = %meeting.join_url, "meeting created");
        Ok(meeting)
    }
}
