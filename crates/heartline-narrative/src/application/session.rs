//! Session controller.
//!
//! A [`Session`] owns everything one playthrough mutates: the drag state,
//! the decline counter, the pending nudge timer and the plan trickle. It
//! walks the story in order and consults the input stream only at the
//! three points where the story waits for the user.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use heartline_content::domain::model::ContentModel;
use heartline_core::clock::{Clock, ms};
use heartline_core::effects::{Sound, StageCue};
use heartline_core::input::{PointerEvent, PointerPhase, UserInput};
use heartline_core::rng::SeededRng;
use heartline_core::screen::{ScreenBoard, ScreenState};
use heartline_core::sink::{AudioSink, EffectSinks, HapticSink, MotionPolicy, Stage};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

use super::sequencer::{Director, SharedRng};
use crate::domain::decline::{DeclineMachine, DeclineStep};
use crate::domain::gesture::{GestureInterpreter, GestureStep, SwipeOutcome, feedback_for};
use crate::domain::timing::ChatTimeline;

const BREATHE_AFTER_PHASE_ONE: Duration = ms(2800);
const BREATHE_AFTER_PHASE_TWO: Duration = ms(3000);
const NUDGE_VISIBLE: Duration = ms(2000);

/// Runtime settings for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSettings {
    /// Reduced-motion handling.
    pub motion: MotionPolicy,
    /// Seed for cosmetic randomness; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl SessionSettings {
    /// The random source these settings describe.
    #[must_use]
    pub fn rng(&self) -> SharedRng {
        Arc::new(Mutex::new(SeededRng::from_optional_seed(self.seed)))
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The proposal was accepted and the plan is showing.
    Completed,
    /// Input closed while the story waited on this screen.
    Abandoned(ScreenState),
}

/// One playthrough of a story.
pub struct Session {
    id: Uuid,
    content: Arc<ContentModel>,
    timeline: ChatTimeline,
    director: Director,
    gestures: GestureInterpreter,
    decline: DeclineMachine,
    nudge_hide: Option<JoinHandle<()>>,
    trickle: Option<JoinHandle<()>>,
}

impl Session {
    /// Creates a session playing `content` through `director`.
    #[must_use]
    pub fn new(content: Arc<ContentModel>, director: Director) -> Self {
        let timeline = ChatTimeline::from_content(&content);
        Self {
            id: Uuid::new_v4(),
            content,
            timeline,
            director,
            gestures: GestureInterpreter::new(),
            decline: DeclineMachine::new(),
            nudge_hide: None,
            trickle: None,
        }
    }

    /// Creates a session wired to platform sinks under `settings`.
    #[must_use]
    pub fn with_settings(
        content: Arc<ContentModel>,
        settings: SessionSettings,
        clock: Arc<dyn Clock>,
        audio: Arc<dyn AudioSink>,
        haptics: Arc<dyn HapticSink>,
        stage: Arc<dyn Stage>,
    ) -> Self {
        let effects = EffectSinks::new(audio, haptics, stage, settings.motion);
        let director = Director::new(clock, settings.rng(), effects, ScreenBoard::new());
        Self::new(content, director)
    }

    /// Identifier carried on every log line of this session.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The screen surface: which screen is active.
    #[must_use]
    pub fn screens(&self) -> &ScreenBoard {
        self.director.screens()
    }

    /// Times the decline control has been clicked.
    #[must_use]
    pub fn decline_count(&self) -> u8 {
        self.decline.count()
    }

    /// Hands over the plan trickle task, once the plan is showing.
    pub fn take_trickle(&mut self) -> Option<JoinHandle<()>> {
        self.trickle.take()
    }

    /// Plays the story to the end, reading user input as it goes.
    pub async fn run(&mut self, inputs: &mut UnboundedReceiver<UserInput>) -> SessionOutcome {
        let span = info_span!("session", session_id = %self.id);
        async {
            info!(fingerprint = %self.content.fingerprint(), "session started");
            let outcome = self.play(inputs).await;
            info!(?outcome, "session finished");
            outcome
        }
        .instrument(span)
        .await
    }

    async fn play(&mut self, inputs: &mut UnboundedReceiver<UserInput>) -> SessionOutcome {
        let content = Arc::clone(&self.content);
        let chat = &content.chat;

        self.director.splash().await;
        drain(inputs);
        if !self.swipe_until_accepted(inputs).await {
            return SessionOutcome::Abandoned(ScreenState::Card);
        }
        self.clear_nudge();
        self.director.exit_card().await;

        drain(inputs);
        if !wait_for_tap(inputs).await {
            return SessionOutcome::Abandoned(ScreenState::Match);
        }
        self.director.enter_chat().await;

        self.director
            .play_phase(&chat.phase1.messages, &self.timeline.phase_one, None)
            .await;
        self.director.wait(BREATHE_AFTER_PHASE_ONE).await;
        self.director
            .mid_blackout(
                &chat.blackout_text,
                &self.timeline.phase_one,
                &chat.phase2.header_name,
            )
            .await;
        self.director
            .play_phase(
                &chat.phase2.messages,
                &self.timeline.phase_two,
                self.timeline.dramatic_index,
            )
            .await;
        self.director.wait(BREATHE_AFTER_PHASE_TWO).await;
        self.director.false_start().await;

        // Presses made in the dark are dropped; from the lift on they count.
        let ambience = self.director.reveal_ask(content.ask.words.len()).await;
        drain(inputs);
        if !self.await_acceptance(inputs).await {
            return SessionOutcome::Abandoned(ScreenState::Ask);
        }
        self.trickle = Some(self.director.celebrate(ambience).await);
        SessionOutcome::Completed
    }

    async fn swipe_until_accepted(&mut self, inputs: &mut UnboundedReceiver<UserInput>) -> bool {
        while let Some(input) = inputs.recv().await {
            let UserInput::Pointer(event) = input else {
                continue;
            };
            match self.gestures.handle(event) {
                Some(GestureStep::Started) => {
                    self.director.show(StageCue::CardDrag(feedback_for(0.0)));
                    if let Some(pending) = self.nudge_hide.take() {
                        if !pending.is_finished() {
                            pending.abort();
                            self.director.show(StageCue::CardNudge(None));
                        }
                    }
                }
                Some(GestureStep::Feedback(feedback)) => {
                    self.director.show(StageCue::CardDrag(feedback));
                }
                Some(GestureStep::Released(outcome)) => {
                    debug!(?outcome, "swipe released");
                    match outcome {
                        SwipeOutcome::Accept => return true,
                        SwipeOutcome::Reject => {
                            self.director.effects().play(Sound::Thud);
                            self.director.show(StageCue::CardBounce);
                            let nudge = self.gestures.next_nudge();
                            self.show_nudge(nudge);
                        }
                        SwipeOutcome::Cancel => self.director.show(StageCue::CardBounce),
                    }
                }
                None => {}
            }
        }
        false
    }

    fn show_nudge(&mut self, text: &str) {
        self.clear_nudge();
        self.director.show(StageCue::CardNudge(Some(text.to_owned())));
        self.nudge_hide = Some(self.director.after(NUDGE_VISIBLE, |effects| {
            effects.show(StageCue::CardNudge(None));
        }));
    }

    fn clear_nudge(&mut self) {
        if let Some(pending) = self.nudge_hide.take() {
            pending.abort();
        }
    }

    async fn await_acceptance(&mut self, inputs: &mut UnboundedReceiver<UserInput>) -> bool {
        while let Some(input) = inputs.recv().await {
            match input {
                UserInput::Accept => {
                    info!(declines = self.decline.count(), "proposal accepted");
                    return true;
                }
                UserInput::Decline => self.on_decline(),
                UserInput::Pointer(_) | UserInput::Tap => {}
            }
        }
        false
    }

    fn on_decline(&mut self) {
        match self.decline.click() {
            DeclineStep::Dodged {
                decline,
                accept,
                hint,
            } => {
                self.director.effects().play(Sound::Boing);
                self.director.show(StageCue::Decline(decline));
                self.director.show(StageCue::Accept(accept));
                if hint.is_some() {
                    self.director.show(StageCue::AskNudge(hint));
                }
            }
            DeclineStep::Exhausted {
                decline,
                accept,
                hint,
            } => {
                self.director.show(StageCue::Decline(decline));
                self.director.show(StageCue::Accept(accept));
                self.director.show(StageCue::AcceptPulse);
                self.director.show(StageCue::AskNudge(Some(hint)));
            }
            DeclineStep::Inert => {}
        }
        debug!(count = self.decline.count(), "decline clicked");
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("screen", &self.screens().active())
            .field("declines", &self.decline.count())
            .finish_non_exhaustive()
    }
}

/// Discards input that arrived before the current screen was interactive.
fn drain(inputs: &mut UnboundedReceiver<UserInput>) {
    while inputs.try_recv().is_ok() {}
}

fn is_tap(input: UserInput) -> bool {
    matches!(
        input,
        UserInput::Tap
            | UserInput::Pointer(PointerEvent {
                phase: PointerPhase::Up,
                ..
            })
    )
}

async fn wait_for_tap(inputs: &mut UnboundedReceiver<UserInput>) -> bool {
    while let Some(input) = inputs.recv().await {
        if is_tap(input) {
            return true;
        }
    }
    false
}
