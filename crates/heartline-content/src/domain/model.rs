//! The content model: everything a user edits to personalise a story.

use heartline_core::effects::Side;
use serde::{Deserialize, Serialize};

/// A single chat bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who speaks.
    pub side: Side,
    /// Bubble text.
    pub text: String,
}

impl ChatMessage {
    /// Convenience constructor.
    #[must_use]
    pub fn new(side: Side, text: impl Into<String>) -> Self {
        Self {
            side,
            text: text.into(),
        }
    }

    /// Length in characters, which is what timing is derived from.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// One chat segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPhase {
    /// Name displayed in the chat header during this phase.
    pub header_name: String,
    /// Messages in playback order.
    pub messages: Vec<ChatMessage>,
}

/// The person sending the story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Display name.
    pub name: String,
    /// Avatar reference.
    pub avatar: String,
}

/// The person the story is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receiver {
    /// Display name.
    pub name: String,
    /// Age shown on the profile card.
    pub age: u32,
    /// Avatar reference.
    pub avatar: String,
    /// Line under the name.
    pub subtitle: String,
    /// Profile bio.
    pub bio: String,
    /// Interest tags.
    pub tags: Vec<String>,
}

/// Both chat phases and the caption between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    /// Early-days phase.
    pub phase1: ChatPhase,
    /// Caption shown during the mid-chat blackout.
    pub blackout_text: String,
    /// Present-day phase.
    pub phase2: ChatPhase,
}

impl Chat {
    /// Both phases' messages, in global-index order.
    pub fn all_messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.phase1.messages.iter().chain(self.phase2.messages.iter())
    }
}

/// Match-screen copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCopy {
    /// Personal line under the match banner.
    pub subtitle: String,
}

/// The proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ask {
    /// Words revealed one by one.
    pub words: Vec<String>,
    /// Index of the word given special emphasis.
    pub highlight_word_index: usize,
}

/// The plan revealed after acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Date line.
    pub date: String,
    /// Body lines.
    pub lines: Vec<String>,
    /// Closing signature.
    pub signoff: String,
    /// Small hint at the bottom.
    pub hint: String,
}

/// The complete, immutable content of a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentModel {
    /// Sender identity.
    pub sender: Sender,
    /// Recipient identity.
    pub receiver: Receiver,
    /// Chat phases.
    pub chat: Chat,
    /// Match-screen copy.
    #[serde(rename = "match")]
    pub match_copy: MatchCopy,
    /// The proposal.
    pub ask: Ask,
    /// The plan.
    pub plan: Plan,
}
