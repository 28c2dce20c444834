//! Gesture interpreter for the profile card.
//!
//! Touch and mouse streams are normalised to one horizontal offset. A drag
//! is classified on release against [`SWIPE_THRESHOLD`] with a strict
//! comparison: landing exactly on the threshold is a cancel.

use heartline_core::effects::CardFeedback;
use heartline_core::input::{PointerEvent, PointerPhase};

/// Distance a drag must exceed to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 80.0;

/// Card tilt per unit of offset, in degrees.
pub const ROTATION_PER_UNIT: f32 = 0.08;

const GLOW_BASE: f32 = 0.12;
const GLOW_RANGE: f32 = 0.15;

/// Shown, in rotation, after each reject.
pub const NUDGES: [&str; 5] = [
    "Wrong way :)",
    "Try the other way",
    "Still here",
    "I'm not going anywhere",
    "Swipe right this time",
];

/// How a finished drag is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Swiped right past the threshold.
    Accept,
    /// Swiped left past the threshold.
    Reject,
    /// Released short of the threshold, or the pointer was cancelled.
    Cancel,
}

/// Classifies a signed offset.
#[must_use]
pub fn classify_offset(offset: f32) -> SwipeOutcome {
    if offset > SWIPE_THRESHOLD {
        SwipeOutcome::Accept
    } else if offset < -SWIPE_THRESHOLD {
        SwipeOutcome::Reject
    } else {
        SwipeOutcome::Cancel
    }
}

/// Visual feedback for a drag at `offset`.
#[must_use]
pub fn feedback_for(offset: f32) -> CardFeedback {
    let progress = (offset.abs() / SWIPE_THRESHOLD).min(1.0);
    let (like, nope, glow) = if offset > 0.0 {
        (progress, 0.0, GLOW_BASE + progress * GLOW_RANGE)
    } else if offset < 0.0 {
        (0.0, progress, GLOW_BASE + progress * GLOW_RANGE)
    } else {
        (0.0, 0.0, 0.0)
    };
    CardFeedback {
        offset,
        rotation_deg: offset * ROTATION_PER_UNIT,
        like,
        nope,
        glow,
    }
}

/// The ephemeral state of one drag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSession {
    /// A pointer is down on the card.
    pub active: bool,
    /// Where the drag began.
    pub start_x: f32,
    /// Signed offset from `start_x` at the last move.
    pub current_x: f32,
}

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureStep {
    /// A drag began; earlier feedback is cleared.
    Started,
    /// The card moved.
    Feedback(CardFeedback),
    /// The drag ended.
    Released(SwipeOutcome),
}

/// Turns pointer events into feedback and outcomes.
#[derive(Debug, Default)]
pub struct GestureInterpreter {
    drag: DragSession,
    nudge_cursor: usize,
}

impl GestureInterpreter {
    /// A fresh interpreter with no drag in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current drag state.
    #[must_use]
    pub fn drag(&self) -> DragSession {
        self.drag
    }

    /// Opens a drag at `x`.
    pub fn start(&mut self, x: f32) {
        self.drag = DragSession {
            active: true,
            start_x: x,
            current_x: 0.0,
        };
    }

    /// Moves the drag to `x`. Ignored without an open drag.
    pub fn update(&mut self, x: f32) -> Option<CardFeedback> {
        if !self.drag.active {
            return None;
        }
        self.drag.current_x = x - self.drag.start_x;
        Some(feedback_for(self.drag.current_x))
    }

    /// Closes the drag and classifies the last move offset.
    pub fn end(&mut self) -> Option<SwipeOutcome> {
        if !self.drag.active {
            return None;
        }
        let outcome = classify_offset(self.drag.current_x);
        self.drag = DragSession::default();
        Some(outcome)
    }

    /// Abandons the drag without classifying it.
    pub fn cancel(&mut self) -> Option<SwipeOutcome> {
        if !self.drag.active {
            return None;
        }
        self.drag = DragSession::default();
        Some(SwipeOutcome::Cancel)
    }

    /// Feeds one pointer event, from any source.
    pub fn handle(&mut self, event: PointerEvent) -> Option<GestureStep> {
        match event.phase {
            PointerPhase::Down => {
                self.start(event.x);
                Some(GestureStep::Started)
            }
            PointerPhase::Move => self.update(event.x).map(GestureStep::Feedback),
            PointerPhase::Up => self.end().map(GestureStep::Released),
            PointerPhase::Cancel => self.cancel().map(GestureStep::Released),
        }
    }

    /// The next reject nudge. The rotation persists for the whole session.
    pub fn next_nudge(&mut self) -> &'static str {
        let nudge = NUDGES[self.nudge_cursor % NUDGES.len()];
        self.nudge_cursor += 1;
        nudge
    }
}

#[cfg(test)]
mod tests {
    use heartline_core::input::PointerEvent;

    use super::*;

    fn drag_to(offset: f32) -> Option<SwipeOutcome> {
        let mut gestures = GestureInterpreter::new();
        gestures.start(100.0);
        gestures.update(100.0 + offset);
        gestures.end()
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(drag_to(81.0), Some(SwipeOutcome::Accept));
        assert_eq!(drag_to(-81.0), Some(SwipeOutcome::Reject));
        assert_eq!(drag_to(79.0), Some(SwipeOutcome::Cancel));
        assert_eq!(drag_to(-79.0), Some(SwipeOutcome::Cancel));
        assert_eq!(drag_to(0.0), Some(SwipeOutcome::Cancel));
    }

    #[test]
    fn test_exact_threshold_is_cancel() {
        assert_eq!(classify_offset(80.0), SwipeOutcome::Cancel);
        assert_eq!(classify_offset(-80.0), SwipeOutcome::Cancel);
    }

    #[test]
    fn test_feedback_indicators_are_exclusive() {
        // Act
        let right = feedback_for(40.0);
        let left = feedback_for(-200.0);
        let still = feedback_for(0.0);

        // Assert
        assert!((right.like - 0.5).abs() < f32::EPSILON);
        assert!(right.nope.abs() < f32::EPSILON);
        assert!((right.rotation_deg - 3.2).abs() < 1e-4);
        assert!((left.nope - 1.0).abs() < f32::EPSILON);
        assert!(left.like.abs() < f32::EPSILON);
        assert!((left.glow - 0.27).abs() < 1e-6);
        assert!(still.like.abs() < f32::EPSILON && still.nope.abs() < f32::EPSILON);
        assert!(still.glow.abs() < f32::EPSILON);
    }

    #[test]
    fn test_drag_session_resets_on_every_end() {
        // Arrange
        let mut gestures = GestureInterpreter::new();
        gestures.start(10.0);
        gestures.update(200.0);

        // Act
        let outcome = gestures.end();

        // Assert
        assert_eq!(outcome, Some(SwipeOutcome::Accept));
        assert_eq!(gestures.drag(), DragSession::default());
        assert_eq!(gestures.end(), None);
    }

    #[test]
    fn test_moves_without_a_drag_are_ignored() {
        let mut gestures = GestureInterpreter::new();
        assert_eq!(gestures.update(300.0), None);
    }

    #[test]
    fn test_touch_and_mouse_are_interpreted_alike() {
        // Arrange
        let mut touch = GestureInterpreter::new();
        let mut mouse = GestureInterpreter::new();
        let phases = [
            (PointerPhase::Down, 50.0),
            (PointerPhase::Move, -60.0),
            (PointerPhase::Up, 0.0),
        ];

        // Act
        let from_touch: Vec<_> = phases
            .iter()
            .map(|(phase, x)| touch.handle(PointerEvent::touch(*phase, *x)))
            .collect();
        let from_mouse: Vec<_> = phases
            .iter()
            .map(|(phase, x)| mouse.handle(PointerEvent::mouse(*phase, *x)))
            .collect();

        // Assert
        assert_eq!(from_touch, from_mouse);
        assert_eq!(
            from_touch.last(),
            Some(&Some(GestureStep::Released(SwipeOutcome::Reject)))
        );
    }

    #[test]
    fn test_pointer_cancel_is_cancel_even_past_threshold() {
        let mut gestures = GestureInterpreter::new();
        gestures.start(0.0);
        gestures.update(500.0);

        let step = gestures.handle(PointerEvent::touch(PointerPhase::Cancel, 500.0));

        assert_eq!(step, Some(GestureStep::Released(SwipeOutcome::Cancel)));
    }

    #[test]
    fn test_nudges_rotate_round_robin() {
        let mut gestures = GestureInterpreter::new();

        let shown: Vec<&str> = (0..6).map(|_| gestures.next_nudge()).collect();

        assert_eq!(shown[0], "Wrong way :)");
        assert_eq!(shown[4], "Swipe right this time");
        assert_eq!(shown[5], "Wrong way :)");
    }
}
