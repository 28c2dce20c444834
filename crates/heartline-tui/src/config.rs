//! Environment configuration.

use std::path::PathBuf;

use heartline_core::sink::MotionPolicy;
use heartline_narrative::application::session::SessionSettings;

use crate::error::AppError;

/// Everything the binary reads from its environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// `HEARTLINE_CONTENT`: story file; the bundled story when unset.
    pub content_path: Option<PathBuf>,
    /// `HEARTLINE_LOG`: JSON log file; logs are discarded when unset.
    pub log_path: Option<PathBuf>,
    /// Reduced motion, audio muting and RNG seed.
    pub settings: SessionSettings,
}

impl AppConfig {
    /// Reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let flag = |key: &str| -> Result<bool, AppError> {
            lookup(key).map_or(Ok(false), |raw| parse_flag(key, &raw))
        };

        let seed = lookup("HEARTLINE_SEED")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|e| {
                    AppError::Config(format!("HEARTLINE_SEED must be a valid u64: {e}"))
                })
            })
            .transpose()?;

        Ok(Self {
            content_path: lookup("HEARTLINE_CONTENT").map(PathBuf::from),
            log_path: lookup("HEARTLINE_LOG").map(PathBuf::from),
            settings: SessionSettings {
                motion: MotionPolicy {
                    reduced_motion: flag("HEARTLINE_REDUCED_MOTION")?,
                    mute_audio_with_reduced_motion: flag("HEARTLINE_MUTE_WITH_REDUCED_MOTION")?,
                },
                seed,
            },
        })
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}
