//! The bounded decline control on the proposal screen.
//!
//! Each click escalates a fixed table: the control dodges, its label
//! changes and the accept control grows. After [`DECLINE_LIMIT`] clicks the
//! control is faded and inert for good. No timers are involved.

use heartline_core::effects::{AcceptView, DeclineView, DodgeOffset};

/// Clicks after which the decline control stops responding.
pub const DECLINE_LIMIT: u8 = 4;

const DODGES: [DodgeOffset; 4] = [
    DodgeOffset { dx: 80, dy: -20, rotate_deg: 5 },
    DodgeOffset { dx: -70, dy: -30, rotate_deg: -8 },
    DodgeOffset { dx: 60, dy: 40, rotate_deg: 6 },
    DodgeOffset { dx: -50, dy: -50, rotate_deg: -4 },
];

const LABELS: [&str; 3] = ["No", "Really?", "Pookie please"];

const HINTS: [&str; 4] = ["", "Nice try", "You wound me", "I had a feeling"];

/// What a click on the decline control changed.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclineStep {
    /// The control moved away.
    Dodged {
        /// New decline control state.
        decline: DeclineView,
        /// New accept control emphasis.
        accept: AcceptView,
        /// Companion hint, if this step has one.
        hint: Option<String>,
    },
    /// The final click: the control fades and the accept control pulses.
    Exhausted {
        /// Faded decline control.
        decline: DeclineView,
        /// Final accept control emphasis.
        accept: AcceptView,
        /// Closing hint.
        hint: String,
    },
    /// Clicked after exhaustion; nothing changes.
    Inert,
}

/// Counter in `0..=DECLINE_LIMIT` that never decreases.
#[derive(Debug, Default)]
pub struct DeclineMachine {
    count: u8,
}

impl DeclineMachine {
    /// A fresh control with no clicks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clicks so far.
    #[must_use]
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Whether further clicks are ignored.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.count >= DECLINE_LIMIT
    }

    /// The decline control as currently shown.
    #[must_use]
    pub fn decline_view(&self) -> DeclineView {
        let n = usize::from(self.count);
        DeclineView {
            count: self.count,
            label: LABELS[n.min(LABELS.len() - 1)].to_owned(),
            offset: n
                .checked_sub(1)
                .map(|i| DODGES[i.min(usize::from(DECLINE_LIMIT) - 2) % DODGES.len()]),
            shrunk: n >= 3,
            faded: self.is_inert(),
        }
    }

    /// The accept control emphasis for the current count.
    #[must_use]
    pub fn accept_view(&self) -> AcceptView {
        let n = f32::from(self.count);
        AcceptView {
            scale: 1.0 + 0.05 * n,
            glow: 0.35 + 0.1 * n,
        }
    }

    /// Registers a click.
    pub fn click(&mut self) -> DeclineStep {
        if self.is_inert() {
            return DeclineStep::Inert;
        }
        self.count += 1;

        let decline = self.decline_view();
        let accept = self.accept_view();
        if self.is_inert() {
            DeclineStep::Exhausted {
                decline,
                accept,
                hint: HINTS[HINTS.len() - 1].to_owned(),
            }
        } else {
            let hint = HINTS[usize::from(self.count)];
            DeclineStep::Dodged {
                decline,
                accept,
                hint: (!hint.is_empty()).then(|| hint.to_owned()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_control_reads_no() {
        let machine = DeclineMachine::new();

        let view = machine.decline_view();

        assert_eq!(view.label, "No");
        assert_eq!(view.offset, None);
        assert!(!view.faded);
    }

    #[test]
    fn test_first_three_clicks_dodge_through_fixed_offsets() {
        // Arrange
        let mut machine = DeclineMachine::new();

        // Act
        let steps: Vec<DeclineStep> = (0..3).map(|_| machine.click()).collect();

        // Assert
        let labels: Vec<String> = steps
            .iter()
            .map(|step| match step {
                DeclineStep::Dodged { decline, .. } => decline.label.clone(),
                other => panic!("expected a dodge, got {other:?}"),
            })
            .collect();
        assert_eq!(labels, vec!["Really?", "Pookie please", "Pookie please"]);
        let DeclineStep::Dodged { decline, hint, .. } = &steps[0] else {
            unreachable!()
        };
        assert_eq!(decline.offset, Some(DodgeOffset { dx: 80, dy: -20, rotate_deg: 5 }));
        assert_eq!(hint.as_deref(), Some("Nice try"));
        let DeclineStep::Dodged { decline, hint, .. } = &steps[2] else {
            unreachable!()
        };
        assert!(decline.shrunk);
        assert_eq!(decline.offset, Some(DodgeOffset { dx: 60, dy: 40, rotate_deg: 6 }));
        assert_eq!(hint.as_deref(), Some("I had a feeling"));
    }

    #[test]
    fn test_accept_emphasis_grows_with_each_click() {
        let mut machine = DeclineMachine::new();
        let mut scales = vec![machine.accept_view().scale];

        for _ in 0..4 {
            machine.click();
            scales.push(machine.accept_view().scale);
        }

        for pair in scales.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        assert!((machine.accept_view().scale - 1.2).abs() < 1e-6);
        assert!((machine.accept_view().glow - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_fourth_click_exhausts_and_fifth_is_inert() {
        // Arrange
        let mut machine = DeclineMachine::new();
        for _ in 0..3 {
            machine.click();
        }

        // Act
        let fourth = machine.click();
        let fifth = machine.click();

        // Assert
        match fourth {
            DeclineStep::Exhausted { decline, hint, .. } => {
                assert!(decline.faded);
                assert_eq!(decline.count, 4);
                assert_eq!(hint, "I had a feeling");
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
        assert_eq!(fifth, DeclineStep::Inert);
        assert_eq!(machine.count(), 4);
        assert!(machine.is_inert());
    }
}
