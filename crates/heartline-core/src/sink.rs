//! Effect sink abstractions.
//!
//! Sinks wrap platform capabilities (audio, vibration, the visual stage).
//! Every call is fire-and-forget: a sink that cannot honour a request, for
//! example because audio is still blocked by an autoplay policy, drops it
//! without reporting anything.

use std::sync::Arc;

use crate::effects::{HapticPattern, Sound, StageCue};

/// Audio output.
pub trait AudioSink: Send + Sync {
    /// Plays a one-shot sound.
    fn play(&self, sound: Sound);

    /// Starts the sustained ambient pad. Repeated starts are harmless.
    fn start_pad(&self);

    /// Fades the ambient pad out.
    fn stop_pad(&self);
}

/// Vibration output.
pub trait HapticSink: Send + Sync {
    /// Vibrates with the given on/off pattern.
    fn buzz(&self, pattern: &HapticPattern);
}

/// Visual surface the narrative draws on.
pub trait Stage: Send + Sync {
    /// Applies a visual change.
    fn apply(&self, cue: StageCue);
}

/// How effects respond to a reduced-motion preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionPolicy {
    /// The user asked for reduced motion. Suppresses all haptics.
    pub reduced_motion: bool,
    /// Also mute audio when `reduced_motion` is set.
    pub mute_audio_with_reduced_motion: bool,
}

impl MotionPolicy {
    /// Whether haptic requests reach the sink.
    #[must_use]
    pub fn haptics_enabled(self) -> bool {
        !self.reduced_motion
    }

    /// Whether audio requests reach the sink.
    #[must_use]
    pub fn audio_enabled(self) -> bool {
        !(self.reduced_motion && self.mute_audio_with_reduced_motion)
    }
}

/// The set of sinks a session drives, plus the policy gating them.
#[derive(Clone)]
pub struct EffectSinks {
    audio: Arc<dyn AudioSink>,
    haptics: Arc<dyn HapticSink>,
    stage: Arc<dyn Stage>,
    policy: MotionPolicy,
}

impl EffectSinks {
    /// Bundles sinks under a motion policy.
    #[must_use]
    pub fn new(
        audio: Arc<dyn AudioSink>,
        haptics: Arc<dyn HapticSink>,
        stage: Arc<dyn Stage>,
        policy: MotionPolicy,
    ) -> Self {
        Self {
            audio,
            haptics,
            stage,
            policy,
        }
    }

    /// The active motion policy.
    #[must_use]
    pub fn policy(&self) -> MotionPolicy {
        self.policy
    }

    /// Plays `sound` unless audio is muted by policy.
    pub fn play(&self, sound: Sound) {
        if self.policy.audio_enabled() {
            self.audio.play(sound);
        }
    }

    /// Starts the ambient pad unless audio is muted by policy.
    pub fn start_pad(&self) {
        if self.policy.audio_enabled() {
            self.audio.start_pad();
        }
    }

    /// Stops the ambient pad. Always forwarded so a pad never outlives its screen.
    pub fn stop_pad(&self) {
        self.audio.stop_pad();
    }

    /// Vibrates unless reduced motion is requested.
    pub fn buzz(&self, pattern: &HapticPattern) {
        if self.policy.haptics_enabled() {
            self.haptics.buzz(pattern);
        }
    }

    /// Vibrates once for `millis`.
    pub fn pulse(&self, millis: u32) {
        self.buzz(&HapticPattern::pulse(millis));
    }

    /// Applies a visual change.
    pub fn show(&self, cue: StageCue) {
        self.stage.apply(cue);
    }
}

impl std::fmt::Debug for EffectSinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectSinks")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Counter {
        sounds: Mutex<Vec<Sound>>,
        buzzes: Mutex<Vec<HapticPattern>>,
        pads: Mutex<Vec<bool>>,
    }

    impl AudioSink for Counter {
        fn play(&self, sound: Sound) {
            self.sounds.lock().unwrap().push(sound);
        }
        fn start_pad(&self) {
            self.pads.lock().unwrap().push(true);
        }
        fn stop_pad(&self) {
            self.pads.lock().unwrap().push(false);
        }
    }

    impl HapticSink for Counter {
        fn buzz(&self, pattern: &HapticPattern) {
            self.buzzes.lock().unwrap().push(pattern.clone());
        }
    }

    impl Stage for Counter {
        fn apply(&self, _cue: StageCue) {}
    }

    fn sinks(policy: MotionPolicy) -> (Arc<Counter>, EffectSinks) {
        let counter = Arc::new(Counter::default());
        let sinks = EffectSinks::new(counter.clone(), counter.clone(), counter.clone(), policy);
        (counter, sinks)
    }

    #[test]
    fn test_default_policy_forwards_everything() {
        // Arrange
        let (counter, sinks) = sinks(MotionPolicy::default());

        // Act
        sinks.play(Sound::Pop);
        sinks.pulse(5);

        // Assert
        assert_eq!(*counter.sounds.lock().unwrap(), vec![Sound::Pop]);
        assert_eq!(*counter.buzzes.lock().unwrap(), vec![HapticPattern::pulse(5)]);
    }

    #[test]
    fn test_reduced_motion_drops_haptics_but_keeps_audio() {
        // Arrange
        let (counter, sinks) = sinks(MotionPolicy {
            reduced_motion: true,
            mute_audio_with_reduced_motion: false,
        });

        // Act
        sinks.play(Sound::Chime);
        sinks.buzz(&HapticPattern::heartbeat());

        // Assert
        assert_eq!(counter.sounds.lock().unwrap().len(), 1);
        assert!(counter.buzzes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_mute_flag_silences_audio_but_pad_stop_still_forwarded() {
        // Arrange
        let (counter, sinks) = sinks(MotionPolicy {
            reduced_motion: true,
            mute_audio_with_reduced_motion: true,
        });

        // Act
        sinks.play(Sound::Chime);
        sinks.start_pad();
        sinks.stop_pad();

        // Assert
        assert!(counter.sounds.lock().unwrap().is_empty());
        assert_eq!(*counter.pads.lock().unwrap(), vec![false]);
    }

    #[test]
    fn test_mute_flag_alone_has_no_effect() {
        let policy = MotionPolicy {
            reduced_motion: false,
            mute_audio_with_reduced_motion: true,
        };
        assert!(policy.audio_enabled());
        assert!(policy.haptics_enabled());
    }
}
