//! Content fixtures.

use heartline_content::domain::model::{ChatMessage, ContentModel};
use heartline_core::effects::Side;

/// The bundled sample story.
#[must_use]
pub fn sample_content() -> ContentModel {
    ContentModel::default_content()
}

/// The sample story with both chat phases replaced.
#[must_use]
pub fn story_with(phase1: Vec<ChatMessage>, phase2: Vec<ChatMessage>) -> ContentModel {
    let mut content = sample_content();
    content.chat.phase1.messages = phase1;
    content.chat.phase2.messages = phase2;
    content
}

/// Shorthand for an incoming message.
#[must_use]
pub fn incoming(text: &str) -> ChatMessage {
    ChatMessage::new(Side::Left, text)
}

/// Shorthand for an outgoing message.
#[must_use]
pub fn outgoing(text: &str) -> ChatMessage {
    ChatMessage::new(Side::Right, text)
}
