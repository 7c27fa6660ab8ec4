//! Command-line interface definition.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use clap::Parser;
use zoom_meeting_core::MeetingRequest;

/// zoom-meeting - Create a Zoom meeting and open its link
#[derive(Debug, Parser)]
#[command(name = "zoom-meeting")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the credentials file [default: ~/.zoom-meeting.config.json]
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Meeting topic
    #[arg(long, default_value = MeetingRequest::DEFAULT_TOPIC)]
    pub topic: String,

    /// Meeting duration in minutes
    #[arg(long, default_value_t = MeetingRequest::DEFAULT_DURATION_MINUTES,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: u32,

    /// HTTP request timeout in seconds (no timeout when unset)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Builds the meeting request: scheduled, starting at `now`.
    pub fn meeting_request(&self, now: DateTime<FixedOffset>) -> MeetingRequest {
        MeetingRequest::default_at(now)
            .with_topic(self.topic.clone())
            .with_duration(self.duration)
    }

    /// Returns the request timeout, if one was given.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
