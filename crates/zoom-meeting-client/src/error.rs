//! Client error types.

use std::fmt;

use zoom_meeting_providers::{ProviderError, ProviderErrorCode};

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
///
/// All of them are fatal; `main` prints the message and exits non-zero.
#[derive(Debug)]
pub enum ClientError {
    /// Missing, unreadable, malformed, or incomplete credentials file.
    Config(String),
    /// Token request failed or returned no token.
    Auth(String),
    /// Request could not be built or sent, or the response not read.
    Network(String),
    /// A response body could not be parsed.
    ResponseParse(String),
    /// The meetings API answered with an error status.
    Api(String),
    /// Clipboard or URL-open failure.
    Output(String),
    /// IO error.
    Io(std::io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Auth(msg) => write!(f, "authentication failed: {}", msg),
            Self::Network(msg) => write!(f, "network error: {}", msg),
            Self::ResponseParse(msg) => write!(f, "invalid response: {}", msg),
            Self::Api(msg) => write!(f, "API error: {}", msg),
            Self::Output(msg) => write!(f, "output failed: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ProviderError> for ClientError {
    fn from(err: ProviderError) -> Self {
        let msg = err.to_string();
        match err.code() {
            ProviderErrorCode::AuthenticationFailed => Self::Auth(msg),
            ProviderErrorCode::NetworkError => Self::Network(msg),
            ProviderErrorCode::InvalidResponse => Self::ResponseParse(msg),
            ProviderErrorCode::ConfigurationError => Self::Config(msg),
            ProviderErrorCode::AuthorizationFailed
            | ProviderErrorCode::RateLimited
            | ProviderErrorCode::ServerError
            | ProviderErrorCode::NotFound
            | ProviderErrorCode::BadRequest => Self::Api(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_map_to_taxonomy() {
        assert!(matches!(
            ClientError::from(ProviderError::authentication("no access token in response")),
            ClientError::Auth(_)
        ));
        assert!(matches!(
            ClientError::from(ProviderError::network("connection refused")),
            ClientError::Network(_)
        ));
        assert!(matches!(
            ClientError::from(ProviderError::invalid_response("bad json")),
            ClientError::ResponseParse(_)
        ));
        assert!(matches!(
            ClientError::from(ProviderError::configuration("bad url")),
            ClientError::Config(_)
        ));
        assert!(matches!(
            ClientError::from(ProviderError::from_status(400, "")),
            ClientError::Api(_)
        ));
    }

    #[test]
    fn display_keeps_provider_context() {
        let err = ClientError::from(
            ProviderError::invalid_response("failed to parse response").with_provider("zoom"),
        );
        assert_eq!(
            err.to_string(),
            "invalid response: [zoom] invalid_response: failed to parse response"
        );
    }

    #[test]
    fn output_error_display() {
        let err = ClientError::Output("failed to access clipboard: no display".into());
        assert_eq!(
            err.to_string(),
            "output failed: failed to access clipboard: no display"
        );
    }
}
