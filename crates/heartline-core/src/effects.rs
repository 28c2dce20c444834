//! Effect cue vocabulary.
//!
//! Every audible, haptic or visible change the narrative makes is expressed
//! as one of these values and handed to a sink. Sinks are fire-and-forget.

use serde::{Deserialize, Serialize};

use crate::screen::ScreenState;

/// Speaker side of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Recipient, incoming bubble.
    Left,
    /// Sender, typed on the simulated keyboard.
    Right,
}

/// Named sound effects. Synthesis is the sink's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Soft major chord on the splash screen.
    Warmth,
    /// Filtered noise as the card flies off.
    Whoosh,
    /// Two-note chime on match.
    Chime,
    /// Bubble reveal.
    Pop,
    /// Rising swell as the proposal lifts.
    Swell,
    /// Negative feedback on a rejected swipe.
    Thud,
    /// Double-thump heartbeat.
    Heartbeat,
    /// Key tick during field typing.
    Tick,
    /// Decline control dodging away.
    Boing,
    /// Major triad on accept.
    Confirm,
    /// Sparkle burst on the plan screen.
    Sparkle,
    /// Ascending tone for proposal word `k`.
    WordTone(usize),
}

/// A vibration request: alternating on/off durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HapticPattern(pub Vec<u32>);

impl HapticPattern {
    /// A single pulse.
    #[must_use]
    pub fn pulse(millis: u32) -> Self {
        Self(vec![millis])
    }

    /// The heartbeat double-thump used around the proposal.
    #[must_use]
    pub fn heartbeat() -> Self {
        Self(vec![100, 80, 100])
    }
}

/// Full-screen overlay layer states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// No overlay.
    Clear,
    /// Card-switch compositing between match and chat.
    AppSwitch,
    /// Opaque darkness.
    Blackout,
    /// Darkness with a pulsing glow (heartbeats).
    PulseGlow,
    /// Slow lift revealing the proposal.
    BlackoutLift,
    /// Brief white flash before the plan.
    WhiteFlash,
}

/// State of the simulated keyboard's send button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendButton {
    /// Nothing typed.
    Idle,
    /// Text typed and ready.
    Ready,
    /// Send animation playing.
    Sending,
}

/// Continuous drag feedback for the profile card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFeedback {
    /// Signed horizontal offset from the drag start.
    pub offset: f32,
    /// Card tilt in degrees.
    pub rotation_deg: f32,
    /// Opacity of the positive ("like") badge, `[0, 1]`.
    pub like: f32,
    /// Opacity of the negative ("nope") badge, `[0, 1]`.
    pub nope: f32,
    /// Shadow glow alpha. Zero when the card is centred.
    pub glow: f32,
}

/// A fixed relocation for the decline control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DodgeOffset {
    /// Horizontal shift.
    pub dx: i16,
    /// Vertical shift.
    pub dy: i16,
    /// Tilt in degrees.
    pub rotate_deg: i16,
}

/// Presentation of the decline control after a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclineView {
    /// Clicks so far.
    pub count: u8,
    /// Button label.
    pub label: String,
    /// Where the button has moved to, if anywhere.
    pub offset: Option<DodgeOffset>,
    /// Smaller label text.
    pub shrunk: bool,
    /// Permanently inert.
    pub faded: bool,
}

/// Presentation of the accept control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptView {
    /// Scale factor.
    pub scale: f32,
    /// Glow alpha.
    pub glow: f32,
}

/// Kinds of particle effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Match-screen sparkles.
    Sparkle,
    /// Soft orbs behind the proposal.
    Bokeh,
    /// Drifting dots and hearts on the proposal.
    AskDrift,
    /// One-shot celebration burst on the plan.
    Confetti,
    /// Ambient floating heart on the plan.
    FloatingHeart,
}

/// One cosmetic particle. Positions are percentages of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position, `[0, 100]`.
    pub x: f32,
    /// Vertical position, `[0, 100]`.
    pub y: f32,
    /// Size in kind-specific units.
    pub size: f32,
    /// Start delay.
    pub delay_ms: u32,
    /// Animation length.
    pub duration_ms: u32,
    /// Glyph for text particles.
    pub glyph: Option<char>,
    /// Index into the kind's colour palette.
    pub palette: u8,
}

/// A batch of particles spawned together.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBurst {
    /// What the particles are.
    pub kind: ParticleKind,
    /// The particles.
    pub particles: Vec<Particle>,
}

/// Visual changes applied to the stage.
#[derive(Debug, Clone, PartialEq)]
pub enum StageCue {
    /// Show `screen`, hiding every other one.
    Screen(ScreenState),
    /// Change the overlay layer.
    Overlay(Overlay),
    /// Show or remove the blackout caption.
    Caption(Option<String>),
    /// Replace the chat header name.
    HeaderName(String),
    /// Reveal message row `n`.
    RevealRow(usize),
    /// Hide message row `n`.
    HideRow(usize),
    /// Show the read receipt under message row `n`.
    ShowReceipt(usize),
    /// Show or hide a typing indicator.
    TypingIndicator {
        /// Which side is typing.
        side: Side,
        /// Visibility.
        visible: bool,
    },
    /// Highlight a key on the simulated keyboard; `' '` is the space bar.
    KeyPop(char),
    /// Replace the input field contents.
    InputBuffer(String),
    /// Send button state.
    SendButton(SendButton),
    /// Drag feedback on the profile card.
    CardDrag(CardFeedback),
    /// Snap the card back to centre.
    CardBounce,
    /// Fly the card off to the right and fade the stack behind it.
    CardExit,
    /// Show or hide the swipe nudge.
    CardNudge(Option<String>),
    /// Start the proposal's per-word reveal animation.
    AskReveal,
    /// Decline control changed.
    Decline(DeclineView),
    /// Accept control changed.
    Accept(AcceptView),
    /// One-shot emphasis pulse on the accept control.
    AcceptPulse,
    /// Accept control confirmed.
    AcceptConfirmed,
    /// Show or hide the hint under the proposal controls.
    AskNudge(Option<String>),
    /// Spawn particles.
    Particles(ParticleBurst),
    /// Remove every particle of a kind.
    ClearParticles(ParticleKind),
}
