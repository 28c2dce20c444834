//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use heartline_core::rng::DeterministicRng;

/// Always draws the low end: every keystroke gets its base delay, every
/// trickle gap its minimum, and every particle lands at the lower bound.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that cycles through a predetermined sequence. Each value is clamped
/// into the requested range, so the same script can drive key jitter and
/// trickle spacing alike. An empty sequence behaves like [`MockRng`].
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Scripts the integer draws; `next_f64` stays at zero.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        if self.values.is_empty() {
            return min;
        }
        let val = self.values[self.index % self.values.len()];
        self.index += 1;
        val.clamp(min, max.max(min))
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}
