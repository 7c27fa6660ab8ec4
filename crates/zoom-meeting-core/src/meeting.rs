//! Meeting types exchanged with the meetings API.
//!
//! - [`MeetingRequest`]: what gets POSTed to create a meeting
//! - [`MeetingType`]: instant or scheduled, serialized as its integer code
//! - [`MeetingResult`]: the part of the API response we consume

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The kind of meeting to create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum MeetingType {
    /// Starts right away, no start time.
    Instant = 1,
    /// Starts at `start_time`.
    #[default]
    Scheduled = 2,
}

impl MeetingType {
    /// Returns the integer code used on the wire.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Serialize for MeetingType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// A request to create a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingRequest {
    /// Meeting topic shown to participants.
    pub topic: String,
    /// Instant or scheduled.
    #[serde(rename = "type")]
    pub meeting_type: MeetingType,
    /// Scheduled start, sent as RFC 3339 with second precision.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_start_time"
    )]
    pub start_time: Option<DateTime<FixedOffset>>,
    /// Duration in minutes.
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

impl MeetingRequest {
    /// Topic used when none is given.
    pub const DEFAULT_TOPIC: &'static str = "My Meeting";

    /// Duration used when none is given, in minutes.
    pub const DEFAULT_DURATION_MINUTES: u32 = 60;

    /// Creates an instant meeting request.
    pub fn instant(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            meeting_type: MeetingType::Instant,
            start_time: None,
            duration_minutes: None,
        }
    }

    /// Creates a scheduled meeting request starting at `start`.
    pub fn scheduled(topic: impl Into<String>, start: DateTime<FixedOffset>) -> Self {
        Self {
            topic: topic.into(),
            meeting_type: MeetingType::Scheduled,
            start_time: Some(start),
            duration_minutes: None,
        }
    }

    /// The request made when the user gives no options: a one hour
    /// scheduled meeting starting at `now`.
    pub fn default_at(now: DateTime<FixedOffset>) -> Self {
        Self::scheduled(Self::DEFAULT_TOPIC, now).with_duration(Self::DEFAULT_DURATION_MINUTES)
    }

    /// Builder method to set the topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Builder method to set the duration in minutes.
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }
}

fn serialize_start_time<S: Serializer>(
    value: &Option<DateTime<FixedOffset>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(start) => serializer.serialize_str(&start.to_rfc3339_opts(SecondsFormat::Secs, true)),
        None => serializer.serialize_none(),
    }
}

/// Reads an optional unsigned integer, mapping any other JSON value to `None`.
///
/// For informational response fields that must never fail the parse.
pub fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Number(u64),
        Other(IgnoredAny),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Number(n) => Some(n),
        Lenient::Other(_) => None,
    })
}

/// The created meeting, as far as this tool cares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingResult {
    /// Link participants use to join.
    #[serde(default)]
    pub join_url: String,
    /// Numeric meeting ID, when the API returns one.
    #[serde(
        default,
        deserialize_with = "lenient_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u64>,
}
