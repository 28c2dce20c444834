//! Story error types.

use thiserror::Error;

/// Top-level error type for loading and playing a story.
///
/// Platform capability gaps (audio blocked, no vibration) are deliberately
/// absent: effect sinks swallow those silently.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The content model failed load-time validation.
    #[error("invalid content: {0}")]
    InvalidContent(String),

    /// The content source could not be parsed.
    #[error("content parse error: {0}")]
    ContentParse(String),

    /// The content source could not be read.
    #[error("content io error: {0}")]
    ContentIo(String),
}
