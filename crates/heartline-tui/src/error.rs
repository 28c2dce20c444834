//! Heartline — binary error types.

use heartline_core::error::StoryError;
use thiserror::Error;

/// Startup and runtime errors for the terminal player.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable holds an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The story content could not be loaded.
    #[error("story error: {0}")]
    Story(#[from] StoryError),

    /// Terminal or log file I/O failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
