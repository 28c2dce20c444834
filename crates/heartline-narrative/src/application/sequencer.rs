//! Narrative sequencer.
//!
//! The [`Director`] plays each beat of the story as one linear async flow.
//! Every step finishes, including its timed waits, before the next begins.
//! Only ambient work (word tones, heartbeat, nudge hides, the plan trickle)
//! is spawned, and each spawned task owns its own stop condition.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use heartline_content::domain::model::ChatMessage;
use heartline_core::clock::{Clock, ms};
use heartline_core::effects::{
    HapticPattern, Overlay, ParticleKind, SendButton, Side, Sound, StageCue,
};
use heartline_core::rng::DeterministicRng;
use heartline_core::screen::{ScreenBoard, ScreenState};
use heartline_core::sink::EffectSinks;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use crate::domain::ambient::{
    FLOATING_HEART_BURST, TRICKLE_START, ask_drift, bokeh_orbs, burst_lifetime, confetti_burst,
    floating_heart, heartbeat_schedule, particles_owned_by, sparkle_burst, trickle_delay,
};
use crate::domain::timing::MessageTiming;
use crate::domain::typing::{DRAMATIC_SPEED, NORMAL_SPEED, plan_keystrokes};

/// Shared cosmetic randomness.
pub type SharedRng = Arc<Mutex<dyn DeterministicRng>>;

const SPLASH_DWELL: Duration = ms(1500);
const CARD_EXIT: Duration = ms(400);

const APP_SWITCH_SCREEN_AT: Duration = ms(250);
const APP_SWITCH_OVERLAY_OFF_AT: Duration = ms(900);
const APP_SWITCH_DONE_AT: Duration = ms(1100);

const PAUSE_BEFORE_SEND: Duration = ms(250);
const SEND_PULSE: Duration = ms(120);
const RECEIPT_DELAY: Duration = ms(400);
const RECEIPT_BREATHE: Duration = ms(800);

const FADE_TO_DARK: Duration = ms(700);
const CAPTION_HOLD: Duration = ms(2500);
const DARK_HOLD: Duration = ms(600);
const FADE_FROM_DARK: Duration = ms(700);

const FALSE_START_SHOWN: Duration = ms(800);
const FALSE_START_SILENCE: Duration = ms(600);

const PRE_REVEAL_BEATS: usize = 3;
const BEAT_SPACING: Duration = ms(600);
const LIFT_DELAY: Duration = ms(300);
const WORD_TONE_START: Duration = ms(800);
const WORD_TONE_STEP: Duration = ms(250);
const LIFT_SETTLE: Duration = ms(1500);

const WHITE_FLASH: Duration = ms(100);

fn draw<R>(rng: &SharedRng, f: impl FnOnce(&mut dyn DeterministicRng) -> R) -> R {
    let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}

/// Background effects running while the proposal is on screen.
#[derive(Debug, Default)]
pub struct AskAmbience {
    heartbeat: Option<JoinHandle<()>>,
    settle: Option<JoinHandle<()>>,
}

impl AskAmbience {
    /// Whether the ambient heartbeat was started.
    #[must_use]
    pub fn has_heartbeat(&self) -> bool {
        self.heartbeat.is_some()
    }

    /// Cancels the ambient heartbeat and the pending overlay clean-up.
    pub fn stop(&mut self) {
        for task in [self.heartbeat.take(), self.settle.take()].into_iter().flatten() {
            task.abort();
        }
    }
}

impl Drop for AskAmbience {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Plays story beats against a clock, an RNG and the effect sinks.
#[derive(Clone)]
pub struct Director {
    clock: Arc<dyn Clock>,
    rng: SharedRng,
    effects: EffectSinks,
    screens: ScreenBoard,
}

impl Director {
    /// Creates a director over the given collaborators.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        rng: SharedRng,
        effects: EffectSinks,
        screens: ScreenBoard,
    ) -> Self {
        Self {
            clock,
            rng,
            effects,
            screens,
        }
    }

    /// The screen board this director drives.
    #[must_use]
    pub fn screens(&self) -> &ScreenBoard {
        &self.screens
    }

    /// The effect sinks this director drives.
    #[must_use]
    pub fn effects(&self) -> &EffectSinks {
        &self.effects
    }

    /// The clock this director waits on.
    #[must_use]
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Holds the flow for `duration`.
    pub async fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            self.clock.sleep(duration).await;
        }
    }

    /// Applies a visual change.
    pub fn show(&self, cue: StageCue) {
        trace!(?cue, "stage cue");
        self.effects.show(cue);
    }

    /// Makes `screen` the only active screen. Particles belonging to the
    /// screen being left are cleared with it.
    pub fn show_screen(&self, screen: ScreenState) {
        let previous = self.screens.activate(screen);
        if previous != screen {
            for kind in particles_owned_by(previous) {
                self.show(StageCue::ClearParticles(*kind));
            }
        }
        self.show(StageCue::Screen(screen));
        info!(screen = %screen, previous = %previous, "screen activated");
    }

    /// Runs `cue` on the sinks after `delay`, off the main flow.
    pub fn after<F>(&self, delay: Duration, cue: F) -> JoinHandle<()>
    where
        F: FnOnce(&EffectSinks) + Send + 'static,
    {
        let clock = Arc::clone(&self.clock);
        let effects = self.effects.clone();
        tokio::spawn(async move {
            clock.sleep(delay).await;
            cue(&effects);
        })
    }

    /// Splash: warm chord, a fixed dwell, then the profile card.
    pub async fn splash(&self) {
        self.show_screen(ScreenState::Splash);
        self.effects.play(Sound::Warmth);
        self.wait(SPLASH_DWELL).await;
        self.show_screen(ScreenState::Card);
    }

    /// The card flies out after an accepted swipe and the match appears.
    pub async fn exit_card(&self) {
        self.effects.pulse(15);
        self.effects.play(Sound::Whoosh);
        self.show(StageCue::CardExit);
        self.wait(CARD_EXIT).await;

        self.show_screen(ScreenState::Match);
        let sparkles = draw(&self.rng, sparkle_burst);
        self.show(StageCue::Particles(sparkles));
        self.effects.play(Sound::Chime);
        self.effects.buzz(&HapticPattern(vec![10, 30, 10]));
    }

    /// App-switch slide from the match screen into the chat.
    pub async fn enter_chat(&self) {
        self.show(StageCue::Overlay(Overlay::AppSwitch));
        self.wait(APP_SWITCH_SCREEN_AT).await;
        self.show_screen(ScreenState::Chat);
        self.wait(APP_SWITCH_OVERLAY_OFF_AT - APP_SWITCH_SCREEN_AT).await;
        self.show(StageCue::Overlay(Overlay::Clear));
        self.wait(APP_SWITCH_DONE_AT - APP_SWITCH_OVERLAY_OFF_AT).await;
    }

    /// Plays one chat phase, message by message.
    ///
    /// `messages` and `timings` are parallel. The outgoing message at
    /// `dramatic` is typed slower and its read receipt is left to breathe.
    pub async fn play_phase(
        &self,
        messages: &[ChatMessage],
        timings: &[MessageTiming],
        dramatic: Option<usize>,
    ) {
        for (message, timing) in messages.iter().zip(timings) {
            self.wait(timing.read_pause).await;

            match timing.side {
                Side::Left => {
                    self.show(StageCue::TypingIndicator {
                        side: Side::Left,
                        visible: true,
                    });
                    self.effects.pulse(3);
                    self.wait(timing.typing).await;
                    self.show(StageCue::TypingIndicator {
                        side: Side::Left,
                        visible: false,
                    });
                    self.reveal(timing.global_index);
                }
                Side::Right => {
                    let is_dramatic = dramatic == Some(timing.global_index);
                    let speed = if is_dramatic {
                        DRAMATIC_SPEED
                    } else {
                        NORMAL_SPEED
                    };
                    self.type_in_field(&message.text, speed).await;
                    self.wait(PAUSE_BEFORE_SEND).await;
                    self.send_from_field().await;
                    self.reveal(timing.global_index);

                    self.wait(RECEIPT_DELAY).await;
                    self.show(StageCue::ShowReceipt(timing.global_index));
                    if is_dramatic {
                        self.wait(RECEIPT_BREATHE).await;
                    }
                }
            }
        }
    }

    fn reveal(&self, global_index: usize) {
        self.show(StageCue::RevealRow(global_index));
        self.effects.play(Sound::Pop);
        self.effects.pulse(5);
        debug!(global_index, "message revealed");
    }

    /// Types `text` into the input field one character at a time.
    pub async fn type_in_field(&self, text: &str, speed: f64) {
        self.show(StageCue::InputBuffer(String::new()));
        self.show(StageCue::SendButton(SendButton::Idle));

        let strokes = draw(&self.rng, |rng| plan_keystrokes(text, speed, rng));
        let mut buffer = String::with_capacity(text.len());
        for stroke in strokes {
            self.show(StageCue::KeyPop(stroke.ch));
            self.effects.pulse(2);
            self.effects.play(Sound::Tick);
            buffer.push(stroke.ch);
            self.show(StageCue::InputBuffer(buffer.clone()));
            self.wait(stroke.delay).await;
        }

        self.show(StageCue::SendButton(SendButton::Ready));
    }

    async fn send_from_field(&self) {
        self.show(StageCue::SendButton(SendButton::Sending));
        self.wait(SEND_PULSE).await;
        self.show(StageCue::SendButton(SendButton::Idle));
        self.show(StageCue::InputBuffer(String::new()));
    }

    /// The time skip between chat phases.
    ///
    /// Under cover of darkness the caption plays, phase-one rows are hidden
    /// and the header switches to the phase-two name.
    pub async fn mid_blackout(
        &self,
        caption: &str,
        phase_one: &[MessageTiming],
        phase_two_header: &str,
    ) {
        self.show(StageCue::Overlay(Overlay::Blackout));
        self.wait(FADE_TO_DARK).await;

        self.show(StageCue::Caption(Some(caption.to_owned())));
        self.wait(CAPTION_HOLD).await;
        self.show(StageCue::Caption(None));

        for timing in phase_one {
            self.show(StageCue::HideRow(timing.global_index));
        }
        self.show(StageCue::HeaderName(phase_two_header.to_owned()));
        self.wait(DARK_HOLD).await;

        self.show(StageCue::Overlay(Overlay::BlackoutLift));
        self.wait(FADE_FROM_DARK).await;
        self.show(StageCue::Overlay(Overlay::Clear));
        info!("mid-chat blackout complete");
    }

    /// The sender starts typing a reply, then thinks better of it.
    pub async fn false_start(&self) {
        self.show(StageCue::TypingIndicator {
            side: Side::Right,
            visible: true,
        });
        self.wait(FALSE_START_SHOWN).await;
        self.show(StageCue::TypingIndicator {
            side: Side::Right,
            visible: false,
        });
        self.wait(FALSE_START_SILENCE).await;
    }

    /// Fades to black, swaps to the proposal, beats three times in the dark
    /// and lifts onto the words.
    ///
    /// Returns at the lift, the moment the controls become visible. The
    /// ambience left running includes the overlay clean-up.
    pub async fn reveal_ask(&self, word_count: usize) -> AskAmbience {
        self.show(StageCue::Overlay(Overlay::Blackout));
        self.wait(FADE_TO_DARK).await;
        self.show_screen(ScreenState::Ask);

        self.show(StageCue::Overlay(Overlay::PulseGlow));
        for _ in 0..PRE_REVEAL_BEATS {
            self.effects.play(Sound::Heartbeat);
            self.effects.buzz(&HapticPattern::heartbeat());
            self.wait(BEAT_SPACING).await;
        }
        self.show(StageCue::Overlay(Overlay::Blackout));
        self.wait(LIFT_DELAY).await;

        self.show(StageCue::Overlay(Overlay::BlackoutLift));
        self.show(StageCue::AskReveal);
        self.effects.play(Sound::Swell);
        self.effects.start_pad();

        let mut offset = WORD_TONE_START;
        for word in 0..word_count {
            self.after(offset, move |effects| effects.play(Sound::WordTone(word)));
            offset += WORD_TONE_STEP;
        }
        let (bokeh, drift) = draw(&self.rng, |rng| (bokeh_orbs(rng), ask_drift(rng)));
        self.show(StageCue::Particles(bokeh));
        self.show(StageCue::Particles(drift));

        let heartbeat = if self.effects.policy().reduced_motion {
            None
        } else {
            Some(self.spawn_heartbeat())
        };

        let settle = self.after(LIFT_SETTLE, |effects| {
            effects.show(StageCue::Overlay(Overlay::Clear));
        });
        AskAmbience {
            heartbeat,
            settle: Some(settle),
        }
    }

    fn spawn_heartbeat(&self) -> JoinHandle<()> {
        let clock = Arc::clone(&self.clock);
        let effects = self.effects.clone();
        tokio::spawn(async move {
            for gap in heartbeat_schedule() {
                clock.sleep(gap).await;
                effects.play(Sound::Heartbeat);
                effects.buzz(&HapticPattern::heartbeat());
            }
        })
    }

    /// Accept: confirm, silence the ambience, flash, and reveal the plan.
    ///
    /// Returns the floating-heart trickle, which ends by itself as soon as
    /// the plan screen is no longer active.
    pub async fn celebrate(&self, mut ambience: AskAmbience) -> JoinHandle<()> {
        self.effects.pulse(10);
        self.effects.play(Sound::Confirm);
        ambience.stop();
        self.effects.stop_pad();
        self.show(StageCue::AcceptConfirmed);

        self.show(StageCue::Overlay(Overlay::WhiteFlash));
        self.wait(WHITE_FLASH).await;
        self.show(StageCue::Overlay(Overlay::Clear));

        self.show_screen(ScreenState::Plan);
        let confetti = draw(&self.rng, confetti_burst);
        let fallen = burst_lifetime(&confetti);
        self.show(StageCue::Particles(confetti));
        self.after(fallen, |effects| {
            effects.show(StageCue::ClearParticles(ParticleKind::Confetti));
        });
        self.effects.play(Sound::Sparkle);
        self.spawn_trickle()
    }

    fn spawn_trickle(&self) -> JoinHandle<()> {
        let mut scope = self.screens.scope(ScreenState::Plan);
        let clock = Arc::clone(&self.clock);
        let effects = self.effects.clone();
        let rng = Arc::clone(&self.rng);

        tokio::spawn(async move {
            let spawn_heart = || {
                let heart = draw(&rng, floating_heart);
                effects.show(StageCue::Particles(heart));
            };
            let burst = async {
                let mut elapsed = Duration::ZERO;
                for at in FLOATING_HEART_BURST {
                    clock.sleep(at - elapsed).await;
                    elapsed = at;
                    spawn_heart();
                }
            };
            let recurring = async {
                clock.sleep(TRICKLE_START).await;
                loop {
                    let delay = draw(&rng, trickle_delay);
                    clock.sleep(delay).await;
                    spawn_heart();
                }
            };

            tokio::select! {
                biased;
                () = scope.cancelled() => {}
                _ = async { tokio::join!(burst, recurring) } => {}
            }
            debug!("plan trickle stopped");
        })
    }
}

impl std::fmt::Debug for Director {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Director")
            .field("screens", &self.screens)
            .field("effects", &self.effects)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use heartline_content::domain::model::ContentModel;
    use heartline_core::sink::MotionPolicy;
    use heartline_test_support::{ManualClock, MockRng, RecordedCue, RecordingEffects};

    use super::*;
    use crate::domain::timing::ChatTimeline;

    struct Fixture {
        clock: Arc<ManualClock>,
        recorder: Arc<RecordingEffects>,
        director: Director,
    }

    fn fixture(policy: MotionPolicy) -> Fixture {
        let clock = Arc::new(ManualClock::new());
        let recorder = RecordingEffects::new(clock.clone());
        let rng: SharedRng = Arc::new(Mutex::new(MockRng));
        let director = Director::new(
            clock.clone(),
            rng,
            recorder.sinks(policy),
            ScreenBoard::new(),
        );
        Fixture {
            clock,
            recorder,
            director,
        }
    }

    #[tokio::test]
    async fn test_type_in_field_sleeps_per_keystroke_and_fills_buffer() {
        // Arrange
        let f = fixture(MotionPolicy::default());

        // Act
        f.director.type_in_field("hi, yo", NORMAL_SPEED).await;

        // Assert
        assert_eq!(
            f.clock.sleeps(),
            vec![ms(40), ms(40), ms(440), ms(80), ms(40), ms(40)]
        );
        let cues = f.recorder.stage_cues();
        assert!(cues.contains(&StageCue::InputBuffer("hi, yo".to_owned())));
        assert_eq!(cues.last(), Some(&StageCue::SendButton(SendButton::Ready)));
        assert_eq!(f.recorder.sounds(), vec![Sound::Tick; 6]);
        assert_eq!(f.recorder.haptics(), vec![HapticPattern::pulse(2); 6]);
    }

    #[tokio::test]
    async fn test_play_phase_reveals_in_order_with_receipts() {
        // Arrange
        let f = fixture(MotionPolicy::default());
        let content = ContentModel::default_content();
        let timeline = ChatTimeline::from_content(&content);

        // Act
        f.director
            .play_phase(&content.chat.phase1.messages, &timeline.phase_one, None)
            .await;

        // Assert
        let reveals: Vec<usize> = f
            .recorder
            .stage_cues()
            .into_iter()
            .filter_map(|cue| match cue {
                StageCue::RevealRow(i) => Some(i),
                _ => None,
            })
            .collect();
        assert_eq!(reveals, (0..7).collect::<Vec<_>>());
        let receipts = f
            .recorder
            .count(|c| matches!(c, RecordedCue::Stage(StageCue::ShowReceipt(_))));
        assert_eq!(receipts, 4);
    }

    #[tokio::test]
    async fn test_left_message_waits_pause_then_typing() {
        // Arrange
        let f = fixture(MotionPolicy::default());
        let messages = vec![ChatMessage::new(Side::Left, "x".repeat(30))];
        let timings = crate::domain::timing::derive_timings(&messages, 0);

        // Act
        f.director.play_phase(&messages, &timings, None).await;

        // Assert
        assert_eq!(f.clock.sleeps(), vec![ms(400), ms(540)]);
        let reveal_at = f
            .recorder
            .first_at(|c| matches!(c, RecordedCue::Stage(StageCue::RevealRow(0))));
        assert_eq!(reveal_at, Some(ms(940)));
    }

    #[tokio::test]
    async fn test_dramatic_message_is_slower_and_breathes() {
        // Arrange
        let f = fixture(MotionPolicy::default());
        let messages = vec![ChatMessage::new(Side::Right, "ab")];
        let timings = crate::domain::timing::derive_timings(&messages, 10);

        // Act
        f.director.play_phase(&messages, &timings, Some(10)).await;

        // Assert
        assert_eq!(
            f.clock.sleeps(),
            vec![ms(500), ms(60), ms(60), ms(250), ms(120), ms(400), ms(800)]
        );
    }

    #[tokio::test]
    async fn test_mid_blackout_hides_phase_one_and_swaps_header() {
        // Arrange
        let f = fixture(MotionPolicy::default());
        let timeline = ChatTimeline::from_content(&ContentModel::default_content());

        // Act
        f.director
            .mid_blackout("Best swipe of my life.", &timeline.phase_one, "Babe")
            .await;

        // Assert
        assert_eq!(f.clock.total_slept(), ms(700 + 2500 + 600 + 700));
        let cues = f.recorder.stage_cues();
        let hidden = cues
            .iter()
            .filter(|c| matches!(c, StageCue::HideRow(_)))
            .count();
        assert_eq!(hidden, 7);
        assert_eq!(
            cues.iter()
                .filter(|c| matches!(c, StageCue::Caption(Some(_))))
                .count(),
            1
        );
        assert!(cues.contains(&StageCue::HeaderName("Babe".to_owned())));
        assert_eq!(cues.last(), Some(&StageCue::Overlay(Overlay::Clear)));
    }

    #[tokio::test]
    async fn test_false_start_shows_then_hides_right_indicator() {
        let f = fixture(MotionPolicy::default());

        f.director.false_start().await;

        assert_eq!(f.clock.sleeps(), vec![ms(800), ms(600)]);
        assert_eq!(
            f.recorder.stage_cues(),
            vec![
                StageCue::TypingIndicator {
                    side: Side::Right,
                    visible: true
                },
                StageCue::TypingIndicator {
                    side: Side::Right,
                    visible: false
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_leaving_match_clears_sparkles() {
        // Arrange
        let f = fixture(MotionPolicy::default());
        f.director.show_screen(ScreenState::Match);

        // Act
        f.director.show_screen(ScreenState::Chat);

        // Assert
        assert!(
            f.recorder
                .stage_cues()
                .contains(&StageCue::ClearParticles(ParticleKind::Sparkle))
        );
        assert!(f.director.screens().is_active(ScreenState::Chat));
    }

    #[tokio::test]
    async fn test_leaving_ask_clears_bokeh_and_drift() {
        // Arrange
        let f = fixture(MotionPolicy::default());
        f.director.show_screen(ScreenState::Ask);
        f.recorder.clear();

        // Act
        f.director.show_screen(ScreenState::Plan);

        // Assert
        assert_eq!(
            f.recorder.stage_cues(),
            vec![
                StageCue::ClearParticles(ParticleKind::Bokeh),
                StageCue::ClearParticles(ParticleKind::AskDrift),
                StageCue::Screen(ScreenState::Plan),
            ]
        );
    }

    #[tokio::test]
    async fn test_reactivating_the_same_screen_clears_nothing() {
        let f = fixture(MotionPolicy::default());
        f.director.show_screen(ScreenState::Ask);
        f.recorder.clear();

        f.director.show_screen(ScreenState::Ask);

        assert_eq!(
            f.recorder.stage_cues(),
            vec![StageCue::Screen(ScreenState::Ask)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_ask_returns_at_the_lift_and_clears_overlay_later() {
        // Arrange
        let clock: Arc<dyn Clock> = Arc::new(heartline_core::clock::TokioClock::new());
        let recorder = RecordingEffects::new(clock.clone());
        let director = Director::new(
            clock.clone(),
            Arc::new(Mutex::new(MockRng)),
            recorder.sinks(MotionPolicy::default()),
            ScreenBoard::new(),
        );

        // Act
        let _ambience = director.reveal_ask(5).await;
        let returned_at = clock.now();
        tokio::time::sleep(ms(2000)).await;

        // Assert
        let lift_at = recorder
            .first_at(|c| *c == RecordedCue::Stage(StageCue::AskReveal))
            .unwrap();
        assert_eq!(returned_at, lift_at);
        let records = recorder.records();
        let cleared_at = records
            .iter()
            .filter(|r| r.at > lift_at)
            .find(|r| r.cue == RecordedCue::Stage(StageCue::Overlay(Overlay::Clear)))
            .map(|r| r.at)
            .unwrap();
        assert_eq!(cleared_at - lift_at, LIFT_SETTLE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopping_ambience_cancels_overlay_clean_up() {
        // Arrange
        let clock: Arc<dyn Clock> = Arc::new(heartline_core::clock::TokioClock::new());
        let recorder = RecordingEffects::new(clock.clone());
        let director = Director::new(
            clock,
            Arc::new(Mutex::new(MockRng)),
            recorder.sinks(MotionPolicy::default()),
            ScreenBoard::new(),
        );
        let mut ambience = director.reveal_ask(1).await;
        recorder.clear();

        // Act
        ambience.stop();
        tokio::time::sleep(ms(2000)).await;

        // Assert
        assert!(
            !recorder
                .stage_cues()
                .contains(&StageCue::Overlay(Overlay::Clear))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_ask_skips_ambient_heartbeat_under_reduced_motion() {
        // Arrange
        let clock: Arc<dyn Clock> = Arc::new(heartline_core::clock::TokioClock::new());
        let recorder = RecordingEffects::new(clock.clone());
        let director = Director::new(
            clock,
            Arc::new(Mutex::new(MockRng)),
            recorder.sinks(MotionPolicy {
                reduced_motion: true,
                mute_audio_with_reduced_motion: false,
            }),
            ScreenBoard::new(),
        );

        // Act
        let ambience = director.reveal_ask(5).await;
        tokio::time::sleep(ms(15_000)).await;

        // Assert
        assert!(!ambience.has_heartbeat());
        assert!(recorder.haptics().is_empty());
        let beats = recorder.count(|c| *c == RecordedCue::Sound(Sound::Heartbeat));
        assert_eq!(beats, 3);
        let tones = recorder.count(|c| matches!(c, RecordedCue::Sound(Sound::WordTone(_))));
        assert_eq!(tones, 5);
    }
}
