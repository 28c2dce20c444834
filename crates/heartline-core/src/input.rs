//! User input vocabulary.
//!
//! Front ends translate their raw events (touch, mouse, keys) into these
//! values before handing them to a session.

/// Where a pointer event came from. Both are treated identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// Finger on a touch surface.
    Touch,
    /// Mouse or pen.
    Mouse,
}

/// Lifecycle phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Contact or button press.
    Down,
    /// Movement while pressed.
    Move,
    /// Release.
    Up,
    /// The platform aborted the gesture.
    Cancel,
}

/// A single pointer sample, normalised to a horizontal coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Origin of the event.
    pub source: PointerSource,
    /// Phase of the gesture.
    pub phase: PointerPhase,
    /// Horizontal position in distance units. Ignored for `Up` and `Cancel`.
    pub x: f32,
}

impl PointerEvent {
    /// Builds a touch event.
    #[must_use]
    pub fn touch(phase: PointerPhase, x: f32) -> Self {
        Self {
            source: PointerSource::Touch,
            phase,
            x,
        }
    }

    /// Builds a mouse event.
    #[must_use]
    pub fn mouse(phase: PointerPhase, x: f32) -> Self {
        Self {
            source: PointerSource::Mouse,
            phase,
            x,
        }
    }
}

/// Every discrete input a session reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UserInput {
    /// Drag stream on the profile card.
    Pointer(PointerEvent),
    /// Tap anywhere on the match screen.
    Tap,
    /// The proposal's accept control.
    Accept,
    /// The proposal's decline control.
    Decline,
}
