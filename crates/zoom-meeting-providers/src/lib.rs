//! Token sources and the Zoom API clients.
//!
//! - [`TokenSource`] - capability that hands out bearer tokens
//! - [`zoom::OAuthClient`] - account-credentials OAuth grant, a `TokenSource`
//! - [`zoom::ZoomClient`] - creates meetings with a token from any `TokenSource`
//! - [`ProviderError`] - error type for all of the above
//!
//! # Flow
//!
//! ```text
//! ┌──────────────┐  access_token()  ┌──────────────┐
//! │  ZoomClient  │ ───────────────▶ │ TokenSource  │
//! └──────┬───────┘                  └──────┬───────┘
//!        │ POST /users/me/meetings         │ POST /oauth/token
//!        ▼                                 ▼
//! ┌──────────────┐                  ┌──────────────┐
//! │ api.zoom.us  │                  │   zoom.us    │
//! └──────────────┘                  └──────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use zoom_meeting_providers::zoom::{Credentials, OAuthClient, ZoomClient, ZoomConfig};
//!
//! let config = ZoomConfig::new();
//! let tokens = OAuthClient::new(credentials, &config)?;
//! let meetings = ZoomClient::new(&config)?;
//! let created = meetings.create_meeting(&request, &tokens).await?;
//! println!("{}", created.join_url);
//! ```

pub mod error;
pub mod token;
pub mod zoom;

pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use token::{AccessToken, BoxFuture, TokenSource};
