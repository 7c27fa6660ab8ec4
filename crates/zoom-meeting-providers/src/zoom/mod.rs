//! Zoom provider implementation.
//!
//! # Authentication
//!
//! Zoom server-to-server OAuth apps use the "account credentials" grant:
//!
//! 1. The app's client ID and secret are sent as HTTP Basic auth
//! 2. The account ID is sent in the form body
//! 3. Zoom answers with a bearer token valid for about an hour
//!
//! No browser, refresh token, or token storage is involved, so a token is
//! simply requested again whenever one is needed.
//!
//! # Example
//!
//! ```ignore
//! use zoom_meeting_providers::zoom::{Credentials, OAuthClient, ZoomClient, ZoomConfig};
//!
//! let credentials = Credentials::from_file(path)?;
//! credentials.validate()?;
//!
//! let config = ZoomConfig::new();
//! let tokens = OAuthClient::new(credentials, &config)?;
//! let meeting = ZoomClient::new(&config)?
//!     .create_meeting(&MeetingRequest::instant("Standup"), &tokens)
//!     .await?;
//! ```

mod client;
mod config;
mod oauth;

pub use client::ZoomClient;
pub use config::{Credentials, ZoomConfig};
pub use oauth::{basic_auth, OAuthClient};
