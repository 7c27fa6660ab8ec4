//! The create-and-share flow.
//!
//! `credentials → token (inside meeting creation) → meeting → link actions`.
//! Every step returns an error instead of exiting; `main` is the only place
//! that turns an error into a process exit.

use std::io::Write;
use std::path::Path;

use tracing::info;
use zoom_meeting_core::{MeetingRequest, MeetingResult};
use zoom_meeting_providers::zoom::{OAuthClient, ZoomClient, ZoomConfig};

use crate::actions::{self, LinkSink};
use crate::config;
use crate::error::ClientResult;

/// Creates a meeting and hands its link to `sink`.
///
/// Credentials are loaded before any HTTP client exists, so a bad
/// credentials file never results in a request.
pub async fn run(
    credentials_path: &Path,
    zoom: &ZoomConfig,
    request: &MeetingRequest,
    sink: &dyn LinkSink,
    out: &mut dyn Write,
) -> ClientResult<MeetingResult> {
    let credentials = config::load_credentials(credentials_path)?;
    info!(path = %credentials_path.display(), "credentials loaded");

    let tokens = OAuthClient::new(credentials, zoom)?;
    let meetings = ZoomClient::new(zoom)?;

    let meeting = meetings.create_meeting(request, &tokens).await?;

    actions::distribute(&meeting.join_url, sink, out)?;
    Ok(meeting)
}
