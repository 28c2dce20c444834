//! Recording effect sinks — capture every cue with its virtual timestamp.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use heartline_core::clock::Clock;
use heartline_core::effects::{HapticPattern, Sound, StageCue};
use heartline_core::sink::{AudioSink, EffectSinks, HapticSink, MotionPolicy, Stage};

/// One captured effect call.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCue {
    /// `AudioSink::play`.
    Sound(Sound),
    /// `AudioSink::start_pad`.
    PadStarted,
    /// `AudioSink::stop_pad`.
    PadStopped,
    /// `HapticSink::buzz`.
    Haptic(HapticPattern),
    /// `Stage::apply`.
    Stage(StageCue),
}

/// A captured cue and the clock reading when it arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    /// Clock reading.
    pub at: Duration,
    /// The cue.
    pub cue: RecordedCue,
}

/// Audio, haptic and stage sink in one, recording every call in arrival order.
pub struct RecordingEffects {
    clock: Arc<dyn Clock>,
    log: Mutex<Vec<Recorded>>,
}

impl RecordingEffects {
    /// Create a recorder stamping cues with `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Arc<Self> {
        Arc::new(Self {
            clock,
            log: Mutex::new(Vec::new()),
        })
    }

    /// Bundles this recorder as every sink under `policy`.
    #[must_use]
    pub fn sinks(self: &Arc<Self>, policy: MotionPolicy) -> EffectSinks {
        EffectSinks::new(self.clone(), self.clone(), self.clone(), policy)
    }

    fn push(&self, cue: RecordedCue) {
        let at = self.clock.now();
        self.log.lock().unwrap().push(Recorded { at, cue });
    }

    /// Snapshot of everything recorded.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn records(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    /// Only the stage cues, in order.
    pub fn stage_cues(&self) -> Vec<StageCue> {
        self.records()
            .into_iter()
            .filter_map(|r| match r.cue {
                RecordedCue::Stage(cue) => Some(cue),
                _ => None,
            })
            .collect()
    }

    /// Only the sounds, in order.
    pub fn sounds(&self) -> Vec<Sound> {
        self.records()
            .into_iter()
            .filter_map(|r| match r.cue {
                RecordedCue::Sound(sound) => Some(sound),
                _ => None,
            })
            .collect()
    }

    /// Only the haptic patterns, in order.
    pub fn haptics(&self) -> Vec<HapticPattern> {
        self.records()
            .into_iter()
            .filter_map(|r| match r.cue {
                RecordedCue::Haptic(pattern) => Some(pattern),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded cues matching `pred`.
    pub fn count(&self, pred: impl Fn(&RecordedCue) -> bool) -> usize {
        self.records().iter().filter(|r| pred(&r.cue)).count()
    }

    /// Timestamp of the first cue matching `pred`.
    pub fn first_at(&self, pred: impl Fn(&RecordedCue) -> bool) -> Option<Duration> {
        self.records().into_iter().find(|r| pred(&r.cue)).map(|r| r.at)
    }

    /// Forgets everything recorded so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn clear(&self) {
        self.log.lock().unwrap().clear();
    }
}

impl AudioSink for RecordingEffects {
    fn play(&self, sound: Sound) {
        self.push(RecordedCue::Sound(sound));
    }

    fn start_pad(&self) {
        self.push(RecordedCue::PadStarted);
    }

    fn stop_pad(&self) {
        self.push(RecordedCue::PadStopped);
    }
}

impl HapticSink for RecordingEffects {
    fn buzz(&self, pattern: &HapticPattern) {
        self.push(RecordedCue::Haptic(pattern.clone()));
    }
}

impl Stage for RecordingEffects {
    fn apply(&self, cue: StageCue) {
        self.push(RecordedCue::Stage(cue));
    }
}
