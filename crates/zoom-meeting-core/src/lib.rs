//! Core types: meeting requests, meeting results, tracing

pub mod meeting;
pub mod tracing;

pub use meeting::{MeetingRequest, MeetingResult, MeetingType};
pub use crate::tracing::{init_tracing, TracingConfig, TracingError};
