//! Terminal stage.
//!
//! [`TerminalStage`] is the platform sink for the terminal front end. It
//! folds every cue into a [`StageView`] that the renderer snapshots on
//! each frame, and wakes the draw loop whenever something changed. There
//! is no audio device or vibration motor, so sounds and buzzes surface as
//! a status line instead.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use heartline_core::effects::{
    AcceptView, CardFeedback, DeclineView, HapticPattern, Overlay, Particle, ParticleKind,
    SendButton, Side, Sound, StageCue,
};
use heartline_core::screen::ScreenState;
use heartline_core::sink::{AudioSink, HapticSink, Stage};
use tokio::sync::Notify;
use tracing::trace;

/// Floating hearts kept on screen; older ones drift away.
const MAX_FLOATING_HEARTS: usize = 24;

/// Everything the renderer needs beyond the static storyboard.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct StageView {
    /// Screen the last `Screen` cue activated.
    pub screen: ScreenState,
    /// Overlay layer.
    pub overlay: Overlay,
    /// Blackout caption.
    pub caption: Option<String>,
    /// Chat header name, once the narrative has set one.
    pub header_name: Option<String>,
    /// Revealed chat rows.
    pub revealed: BTreeSet<usize>,
    /// Rows showing their "Seen" receipt.
    pub receipts: BTreeSet<usize>,
    /// Incoming typing indicator.
    pub typing_left: bool,
    /// Outgoing typing indicator.
    pub typing_right: bool,
    /// Simulated input field.
    pub input: String,
    /// Send button.
    pub send: SendButton,
    /// Last highlighted key.
    pub key: Option<char>,
    /// Live drag feedback on the card.
    pub card: Option<CardFeedback>,
    /// The card has flown off.
    pub card_gone: bool,
    /// Swipe nudge text.
    pub card_nudge: Option<String>,
    /// The proposal words are visible.
    pub ask_revealed: bool,
    /// Decline control.
    pub decline: Option<DeclineView>,
    /// Accept control.
    pub accept: Option<AcceptView>,
    /// Accept control was pulsed.
    pub accept_pulsed: bool,
    /// Accept control confirmed.
    pub accepted: bool,
    /// Hint under the proposal controls.
    pub ask_nudge: Option<String>,
    /// Live particles.
    pub particles: Vec<(ParticleKind, Particle)>,
    /// Last sound played.
    pub sound: Option<Sound>,
    /// Ambient pad running.
    pub pad: bool,
    /// Last vibration requested.
    pub buzz: Option<HapticPattern>,
}

impl Default for StageView {
    fn default() -> Self {
        Self {
            screen: ScreenState::Splash,
            overlay: Overlay::Clear,
            caption: None,
            header_name: None,
            revealed: BTreeSet::new(),
            receipts: BTreeSet::new(),
            typing_left: false,
            typing_right: false,
            input: String::new(),
            send: SendButton::Idle,
            key: None,
            card: None,
            card_gone: false,
            card_nudge: None,
            ask_revealed: false,
            decline: None,
            accept: None,
            accept_pulsed: false,
            accepted: false,
            ask_nudge: None,
            particles: Vec::new(),
            sound: None,
            pad: false,
            buzz: None,
        }
    }
}

impl StageView {
    /// Folds one cue into the view.
    pub fn apply(&mut self, cue: StageCue) {
        match cue {
            StageCue::Screen(screen) => self.screen = screen,
            StageCue::Overlay(overlay) => self.overlay = overlay,
            StageCue::Caption(caption) => self.caption = caption,
            StageCue::HeaderName(name) => self.header_name = Some(name),
            StageCue::RevealRow(row) => {
                self.revealed.insert(row);
            }
            StageCue::HideRow(row) => {
                self.revealed.remove(&row);
                self.receipts.remove(&row);
            }
            StageCue::ShowReceipt(row) => {
                self.receipts.insert(row);
            }
            StageCue::TypingIndicator { side, visible } => match side {
                Side::Left => self.typing_left = visible,
                Side::Right => self.typing_right = visible,
            },
            StageCue::KeyPop(key) => self.key = Some(key),
            StageCue::InputBuffer(text) => {
                if text.is_empty() {
                    self.key = None;
                }
                self.input = text;
            }
            StageCue::SendButton(state) => self.send = state,
            StageCue::CardDrag(feedback) => self.card = Some(feedback),
            StageCue::CardBounce => self.card = None,
            StageCue::CardExit => {
                self.card = None;
                self.card_gone = true;
            }
            StageCue::CardNudge(text) => self.card_nudge = text,
            StageCue::AskReveal => self.ask_revealed = true,
            StageCue::Decline(view) => self.decline = Some(view),
            StageCue::Accept(view) => self.accept = Some(view),
            StageCue::AcceptPulse => self.accept_pulsed = true,
            StageCue::AcceptConfirmed => self.accepted = true,
            StageCue::AskNudge(text) => self.ask_nudge = text,
            StageCue::Particles(burst) => {
                let kind = burst.kind;
                self.particles
                    .extend(burst.particles.into_iter().map(|p| (kind, p)));
                self.cap_floating_hearts();
            }
            StageCue::ClearParticles(kind) => self.particles.retain(|(k, _)| *k != kind),
        }
    }

    fn cap_floating_hearts(&mut self) {
        let hearts = self
            .particles
            .iter()
            .filter(|(k, _)| *k == ParticleKind::FloatingHeart)
            .count();
        let mut excess = hearts.saturating_sub(MAX_FLOATING_HEARTS);
        self.particles.retain(|(k, _)| {
            if excess > 0 && *k == ParticleKind::FloatingHeart {
                excess -= 1;
                false
            } else {
                true
            }
        });
    }
}

/// Audio, haptic and visual sink backed by a shared [`StageView`].
#[derive(Debug, Default)]
pub struct TerminalStage {
    view: Mutex<StageView>,
    changed: Notify,
}

impl TerminalStage {
    /// Creates an empty stage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current view.
    #[must_use]
    pub fn snapshot(&self) -> StageView {
        self.lock().clone()
    }

    /// Resolves after the next change.
    pub async fn changed(&self) {
        self.changed.notified().await;
    }

    fn lock(&self) -> MutexGuard<'_, StageView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, f: impl FnOnce(&mut StageView)) {
        f(&mut self.lock());
        self.changed.notify_one();
    }
}

impl AudioSink for TerminalStage {
    fn play(&self, sound: Sound) {
        self.update(|view| view.sound = Some(sound));
    }

    fn start_pad(&self) {
        self.update(|view| view.pad = true);
    }

    fn stop_pad(&self) {
        self.update(|view| view.pad = false);
    }
}

impl HapticSink for TerminalStage {
    fn buzz(&self, pattern: &HapticPattern) {
        self.update(|view| view.buzz = Some(pattern.clone()));
    }
}

impl Stage for TerminalStage {
    fn apply(&self, cue: StageCue) {
        trace!(?cue, "stage");
        self.update(|view| view.apply(cue));
    }
}
