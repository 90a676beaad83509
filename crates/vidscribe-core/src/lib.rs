//! Vidscribe Core Library
//!
//! Client for a remote video-processing API: submit a video URL, get back a
//! transcript and summary, and track the submission through a small state
//! machine suitable for driving a UI.

pub mod client;
pub mod controller;
pub mod error;
pub mod format;
pub mod types;

// Re-export commonly used items at crate root
pub use client::{API_URL_ENV_VAR, ApiClient, DEFAULT_API_URL, HealthStatus};
pub use controller::{ActiveTab, SubmissionController, SubmissionState, SubmissionTicket};
pub use error::{GENERIC_ERROR_MESSAGE, ProcessError, Result};
pub use format::{format_record_readable, format_result_readable};
pub use types::{
    ProcessedVideo, SearchQuery, SourceType, StoredSummary, Summary, VideoMetadata, VideoRecord,
};
