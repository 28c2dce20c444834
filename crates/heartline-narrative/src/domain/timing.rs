//! Timing deriver.
//!
//! Converts chat messages into per-message pauses. Incoming messages wait on
//! a typing indicator whose length follows the text; outgoing messages are
//! paced by the keystroke plan instead and carry no typing duration.

use std::time::Duration;

use heartline_content::domain::model::{ChatMessage, ContentModel};
use heartline_core::clock::ms;
use heartline_core::effects::Side;

/// Typing-indicator time per character of an incoming message.
const TYPING_PER_CHAR_MS: u64 = 18;
const TYPING_MIN_MS: u64 = 400;
const TYPING_MAX_MS: u64 = 1000;

const LEFT_FIRST_PAUSE_MS: u64 = 400;
const LEFT_PAUSE_MS: u64 = 600;
const RIGHT_PAUSE_MS: u64 = 500;
const RIGHT_AFTER_RIGHT_PAUSE_MS: u64 = 300;

/// Overrides for the closing incoming question of phase two.
const FINAL_QUESTION_PAUSE_MS: u64 = 900;
const FINAL_QUESTION_TYPING_MS: u64 = 1000;

/// When and how long one message plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTiming {
    /// Position across both phases.
    pub global_index: usize,
    /// Who speaks.
    pub side: Side,
    /// Pause before anything happens for this message.
    pub read_pause: Duration,
    /// Typing-indicator time. Always zero for outgoing messages.
    pub typing: Duration,
}

fn typing_for(message: &ChatMessage) -> Duration {
    let chars = u64::try_from(message.char_len()).unwrap_or(u64::MAX);
    ms(chars
        .saturating_mul(TYPING_PER_CHAR_MS)
        .clamp(TYPING_MIN_MS, TYPING_MAX_MS))
}

/// Derives one timing per message, numbering from `start_index`.
#[must_use]
pub fn derive_timings(messages: &[ChatMessage], start_index: usize) -> Vec<MessageTiming> {
    messages
        .iter()
        .enumerate()
        .map(|(i, message)| {
            let first = i == 0;
            let (read_pause, typing) = match message.side {
                Side::Left => {
                    let pause = if first { LEFT_FIRST_PAUSE_MS } else { LEFT_PAUSE_MS };
                    (ms(pause), typing_for(message))
                }
                Side::Right => {
                    let after_right = !first && messages[i - 1].side == Side::Right;
                    let pause = if after_right {
                        RIGHT_AFTER_RIGHT_PAUSE_MS
                    } else {
                        RIGHT_PAUSE_MS
                    };
                    (ms(pause), Duration::ZERO)
                }
            };
            MessageTiming {
                global_index: start_index + i,
                side: message.side,
                read_pause,
                typing,
            }
        })
        .collect()
}

/// Like [`derive_timings`], with the closing-question override: an incoming
/// last message always gets the long pause and the full typing time.
#[must_use]
pub fn derive_phase_two_timings(
    messages: &[ChatMessage],
    start_index: usize,
) -> Vec<MessageTiming> {
    let mut timings = derive_timings(messages, start_index);
    if let Some(last) = timings.last_mut().filter(|t| t.side == Side::Left) {
        last.read_pause = ms(FINAL_QUESTION_PAUSE_MS);
        last.typing = ms(FINAL_QUESTION_TYPING_MS);
    }
    timings
}

/// Global index of the last outgoing message, if any.
#[must_use]
pub fn last_right_index(timings: &[MessageTiming]) -> Option<usize> {
    timings
        .iter()
        .rev()
        .find(|t| t.side == Side::Right)
        .map(|t| t.global_index)
}

/// Both phases' timings for a content model, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTimeline {
    /// Phase-one timings, numbered from zero.
    pub phase_one: Vec<MessageTiming>,
    /// Phase-two timings, numbered after phase one.
    pub phase_two: Vec<MessageTiming>,
    /// The last outgoing phase-two message: typed slowly, its receipt lingers.
    pub dramatic_index: Option<usize>,
}

impl ChatTimeline {
    /// Derives the timeline for `content`.
    #[must_use]
    pub fn from_content(content: &ContentModel) -> Self {
        let phase_one = derive_timings(&content.chat.phase1.messages, 0);
        let phase_two = derive_phase_two_timings(&content.chat.phase2.messages, phase_one.len());
        let dramatic_index = last_right_index(&phase_two);
        Self {
            phase_one,
            phase_two,
            dramatic_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use heartline_test_support::{incoming as left, outgoing as right, story_with};

    use super::*;

    #[test]
    fn test_indexes_are_contiguous_from_offset() {
        // Arrange
        let messages = vec![left("a"), right("b"), right("c"), left("d")];

        // Act
        let timings = derive_timings(&messages, 7);

        // Assert
        let indexes: Vec<usize> = timings.iter().map(|t| t.global_index).collect();
        assert_eq!(indexes, vec![7, 8, 9, 10]);
    }

    #[test]
    fn test_left_pauses_depend_on_position() {
        let timings = derive_timings(&[left("a"), left("b"), right("c"), left("d")], 0);

        assert_eq!(timings[0].read_pause, ms(400));
        assert_eq!(timings[1].read_pause, ms(600));
        assert_eq!(timings[3].read_pause, ms(600));
    }

    #[test]
    fn test_right_pauses_shorten_after_another_right() {
        let timings = derive_timings(&[right("a"), right("b"), left("c"), right("d")], 0);

        assert_eq!(timings[0].read_pause, ms(500));
        assert_eq!(timings[1].read_pause, ms(300));
        assert_eq!(timings[3].read_pause, ms(500));
        assert!(timings.iter().filter(|t| t.side == Side::Right).all(|t| t.typing.is_zero()));
    }

    #[test]
    fn test_left_typing_is_clamped_and_monotonic() {
        // Arrange
        let texts: Vec<String> = (0..80).map(|n| "x".repeat(n)).collect();
        let messages: Vec<ChatMessage> = texts.iter().map(|t| left(t)).collect();

        // Act
        let timings = derive_timings(&messages, 0);

        // Assert
        for pair in timings.windows(2) {
            assert!(pair[0].typing <= pair[1].typing);
        }
        assert!(timings.iter().all(|t| t.typing >= ms(400) && t.typing <= ms(1000)));
        assert_eq!(timings[30].typing, ms(540));
    }

    #[test]
    fn test_typing_counts_characters_not_bytes() {
        let timings = derive_timings(&[left(&"é".repeat(30))], 0);
        assert_eq!(timings[0].typing, ms(540));
    }

    #[test]
    fn test_emoji_count_once_toward_typing() {
        let timings = derive_timings(&[left(&"😊".repeat(30))], 0);
        assert_eq!(timings[0].typing, ms(540));
    }

    #[test]
    fn test_phase_two_final_left_is_overridden() {
        // Act
        let timings = derive_phase_two_timings(&[left("a"), right("b"), left("c")], 0);

        // Assert
        let last = timings[2];
        assert_eq!(last.read_pause, ms(900));
        assert_eq!(last.typing, ms(1000));
        assert_eq!(timings[0].typing, ms(400));
    }

    #[test]
    fn test_phase_two_final_right_is_not_overridden() {
        let timings = derive_phase_two_timings(&[left("a"), right("b")], 0);
        assert_eq!(timings[1].read_pause, ms(500));
        assert!(timings[1].typing.is_zero());
    }

    #[test]
    fn test_last_right_index_absent_without_outgoing() {
        let timings = derive_timings(&[left("a"), left("b")], 3);
        assert_eq!(last_right_index(&timings), None);
    }

    #[test]
    fn test_timeline_numbers_phase_two_after_phase_one() {
        // Arrange
        let content = story_with(vec![left("a"), right("b")], vec![left("c"), left("d")]);

        // Act
        let timeline = ChatTimeline::from_content(&content);

        // Assert
        assert_eq!(timeline.phase_two[0].global_index, 2);
        assert_eq!(timeline.dramatic_index, None);
        assert_eq!(timeline.phase_two[1].read_pause, ms(900));
    }

    #[test]
    fn test_timeline_for_default_content() {
        // Arrange
        let content = ContentModel::default_content();

        // Act
        let timeline = ChatTimeline::from_content(&content);

        // Assert
        assert_eq!(timeline.phase_one.len(), 7);
        assert_eq!(timeline.phase_two.len(), 5);
        assert_eq!(timeline.phase_two[0].global_index, 7);
        assert_eq!(timeline.dramatic_index, Some(10));
        assert_eq!(timeline.phase_two[4].read_pause, ms(900));
    }
}
