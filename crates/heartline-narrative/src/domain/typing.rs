//! Keystroke planning for the simulated keyboard.

use std::time::Duration;

use heartline_core::rng::DeterministicRng;

const SPACE_DELAY_MS: f64 = 80.0;
const KEY_BASE_DELAY_MS: f64 = 40.0;
const KEY_JITTER_MAX_MS: u32 = 50;
const COMMA_PAUSE_MS: f64 = 400.0;

/// Speed multiplier for ordinary outgoing messages.
pub const NORMAL_SPEED: f64 = 1.0;

/// Speed multiplier for the dramatic outgoing message. Larger is slower.
pub const DRAMATIC_SPEED: f64 = 1.5;

/// One simulated key press and the wait that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keystroke {
    /// Character typed.
    pub ch: char,
    /// Wait after the character appears.
    pub delay: Duration,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_duration(millis: f64) -> Duration {
    Duration::from_micros((millis * 1000.0).round().max(0.0) as u64)
}

/// Plans every keystroke of `text`.
///
/// Spaces wait 80 ms and other characters 40 ms plus up to 50 ms of jitter.
/// The result is scaled by `speed`. A comma then adds a flat 400 ms.
pub fn plan_keystrokes(text: &str, speed: f64, rng: &mut dyn DeterministicRng) -> Vec<Keystroke> {
    text.chars()
        .map(|ch| {
            let base = if ch == ' ' {
                SPACE_DELAY_MS
            } else {
                KEY_BASE_DELAY_MS + f64::from(rng.next_u32_range(0, KEY_JITTER_MAX_MS))
            };
            let mut millis = base * speed;
            if ch == ',' {
                millis += COMMA_PAUSE_MS;
            }
            Keystroke {
                ch,
                delay: to_duration(millis),
            }
        })
        .collect()
}
