//! Error types for provider operations.
//!
//! Every failure while talking to the token endpoint or the meetings API is
//! reported as a [`ProviderError`]. Nothing here terminates the process; the
//! binary decides what to do with the error.

use std::fmt;
use thiserror::Error;

/// The category of a provider error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorCode {
    /// Credentials were rejected or no token was issued.
    AuthenticationFailed,
    /// Authenticated, but not allowed to perform the operation (403).
    AuthorizationFailed,
    /// The request could not be built, sent, or its body read.
    NetworkError,
    /// Too many requests (429).
    RateLimited,
    /// Server returned an error (5xx or an unexpected status).
    ServerError,
    /// The response body was not what we expected.
    InvalidResponse,
    /// Resource not found (404).
    NotFound,
    /// Request was rejected as invalid (other 4xx).
    BadRequest,
    /// Invalid endpoint URL or HTTP client settings.
    ConfigurationError,
}

impl ProviderErrorCode {
    /// Returns a human-readable name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "authentication_failed",
            Self::AuthorizationFailed => "authorization_failed",
            Self::NetworkError => "network_error",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::InvalidResponse => "invalid_response",
            Self::NotFound => "not_found",
            Self::BadRequest => "bad_request",
            Self::ConfigurationError => "configuration_error",
        }
    }

    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::AuthenticationFailed,
            403 => Self::AuthorizationFailed,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            400..=499 => Self::BadRequest,
            _ => Self::ServerError,
        }
    }
}

impl fmt::Display for ProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error that occurred while interacting with a provider.
#[derive(Debug, Error)]
pub struct ProviderError {
    code: ProviderErrorCode,
    message: String,
    /// The provider that generated this error (e.g. "zoom").
    provider: Option<String>,
    /// HTTP status of the failed response, if there was one.
    status: Option<u16>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ProviderError {
    /// Creates a new provider error with the given code and message.
    pub fn new(code: ProviderErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider: None,
            status: None,
            source: None,
        }
    }

    /// Creates an error for a non-success HTTP response.
    ///
    /// The code is derived from the status; the body is kept in the message
    /// because the API explains rejections there.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("request failed with status {}", status)
        } else {
            format!("request failed with status {}: {}", status, body.trim())
        };
        Self::new(ProviderErrorCode::from_status(status), message).with_status(status)
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::AuthenticationFailed, message)
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::NetworkError, message)
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::InvalidResponse, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::ConfigurationError, message)
    }

    /// Sets the provider name for this error.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Sets the HTTP status for this error.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the source error for this error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error code.
    pub fn code(&self) -> ProviderErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the provider name, if set.
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Returns the HTTP status, if the error came from a response.
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref provider) = self.provider {
            write!(f, "[{}] ", provider)?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
