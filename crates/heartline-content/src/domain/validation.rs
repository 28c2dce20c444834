//! Load-time validation of the content model.
//!
//! The narrative assumes well-formed content (non-empty phases, an in-range
//! highlight index, ...). Checking once here turns a silent gap at playback
//! time into a descriptive error at startup.

use heartline_core::error::StoryError;

use super::model::{ChatPhase, ContentModel};

fn require_text(problems: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        problems.push(format!("{field} must not be empty"));
    }
}

fn check_phase(problems: &mut Vec<String>, label: &str, phase: &ChatPhase) {
    require_text(problems, &format!("chat.{label}.header_name"), &phase.header_name);
    if phase.messages.is_empty() {
        problems.push(format!("chat.{label}.messages must contain at least one message"));
    }
    for (i, message) in phase.messages.iter().enumerate() {
        require_text(problems, &format!("chat.{label}.messages[{i}].text"), &message.text);
    }
}

impl ContentModel {
    /// Checks every structural requirement and reports all problems at once.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::InvalidContent` listing each problem found.
    pub fn validate(&self) -> Result<(), StoryError> {
        let mut problems = Vec::new();

        require_text(&mut problems, "sender.name", &self.sender.name);
        require_text(&mut problems, "receiver.name", &self.receiver.name);

        check_phase(&mut problems, "phase1", &self.chat.phase1);
        check_phase(&mut problems, "phase2", &self.chat.phase2);
        require_text(&mut problems, "chat.blackout_text", &self.chat.blackout_text);

        if self.ask.words.is_empty() {
            problems.push("ask.words must contain at least one word".to_owned());
        } else if self.ask.highlight_word_index >= self.ask.words.len() {
            problems.push(format!(
                "ask.highlight_word_index {} is out of range for {} words",
                self.ask.highlight_word_index,
                self.ask.words.len()
            ));
        }
        for (i, word) in self.ask.words.iter().enumerate() {
            require_text(&mut problems, &format!("ask.words[{i}]"), word);
        }

        require_text(&mut problems, "plan.date", &self.plan.date);
        if self.plan.lines.is_empty() {
            problems.push("plan.lines must contain at least one line".to_owned());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(StoryError::InvalidContent(problems.join("; ")))
        }
    }
}
