//! Shared test doubles and utilities for Heartline.

mod clock;
mod effects;
mod fixtures;
mod rng;

pub use clock::ManualClock;
pub use effects::{Recorded, RecordedCue, RecordingEffects};
pub use fixtures::{incoming, outgoing, sample_content, story_with};
pub use rng::{MockRng, SequenceRng};
