//! Presentation renderer.
//!
//! Materialises a [`ContentModel`] into the static structure of every screen,
//! once, preserving content order. Nothing here involves time; the narrative
//! later addresses the produced rows and words by index.

use heartline_core::effects::Side;
use serde::Serialize;

use crate::domain::model::ContentModel;

/// Splash screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplashView {
    /// Sender avatar.
    pub avatar: String,
    /// Greeting line.
    pub greeting: String,
}

/// The swipeable profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    /// Recipient avatar.
    pub avatar: String,
    /// Name.
    pub name: String,
    /// Age.
    pub age: u32,
    /// Subtitle.
    pub subtitle: String,
    /// Bio.
    pub bio: String,
    /// Tags in order.
    pub tags: Vec<String>,
}

/// Match celebration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    /// Sender avatar on the left.
    pub left_avatar: String,
    /// Recipient avatar on the right.
    pub right_avatar: String,
    /// Personal subtitle.
    pub subtitle: String,
}

/// One addressable chat row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRow {
    /// Position across both phases.
    pub global_index: usize,
    /// Bubble side.
    pub side: Side,
    /// Bubble text.
    pub text: String,
    /// Outgoing rows carry a "Seen" receipt.
    pub has_receipt: bool,
}

/// Chat screen skeleton. All rows start hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatLayout {
    /// Recipient avatar in the header.
    pub avatar: String,
    /// Header name shown initially (phase 1).
    pub header_name: String,
    /// Every row of both phases.
    pub rows: Vec<ChatRow>,
}

/// A proposal word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskWord {
    /// Order of reveal.
    pub index: usize,
    /// The word.
    pub text: String,
    /// Special emphasis.
    pub highlighted: bool,
}

/// Plan screen element kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PlanItemKind {
    /// Date line.
    Date(String),
    /// Horizontal divider.
    Divider,
    /// Body line; the last one is rendered softer.
    Line {
        /// Text.
        text: String,
        /// Softer styling.
        soft: bool,
    },
    /// Signature.
    Signoff(String),
    /// Closing heart glyph.
    Closer,
    /// Hint at the bottom.
    Hint(String),
}

/// A plan element with its entrance stagger slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanItem {
    /// Entrance order; `None` for elements that are not staggered.
    pub stagger: Option<usize>,
    /// What the element is.
    pub kind: PlanItemKind,
}

/// The full static structure of a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Storyboard {
    /// Splash.
    pub splash: SplashView,
    /// Card.
    pub card: ProfileCard,
    /// Match.
    pub match_view: MatchView,
    /// Chat.
    pub chat: ChatLayout,
    /// Proposal words.
    pub ask_words: Vec<AskWord>,
    /// Plan elements in display order.
    pub plan: Vec<PlanItem>,
}

/// Builds the storyboard for `content`.
#[must_use]
pub fn render_storyboard(content: &ContentModel) -> Storyboard {
    let sender = &content.sender;
    let receiver = &content.receiver;

    let rows = content
        .chat
        .all_messages()
        .enumerate()
        .map(|(global_index, message)| ChatRow {
            global_index,
            side: message.side,
            text: message.text.clone(),
            has_receipt: message.side == Side::Right,
        })
        .collect();

    let ask_words = content
        .ask
        .words
        .iter()
        .enumerate()
        .map(|(index, word)| AskWord {
            index,
            text: word.clone(),
            highlighted: index == content.ask.highlight_word_index,
        })
        .collect();

    Storyboard {
        splash: SplashView {
            avatar: sender.avatar.clone(),
            greeting: format!("Welcome back, {}", sender.name),
        },
        card: ProfileCard {
            avatar: receiver.avatar.clone(),
            name: receiver.name.clone(),
            age: receiver.age,
            subtitle: receiver.subtitle.clone(),
            bio: receiver.bio.clone(),
            tags: receiver.tags.clone(),
        },
        match_view: MatchView {
            left_avatar: sender.avatar.clone(),
            right_avatar: receiver.avatar.clone(),
            subtitle: content.match_copy.subtitle.clone(),
        },
        chat: ChatLayout {
            avatar: receiver.avatar.clone(),
            header_name: content.chat.phase1.header_name.clone(),
            rows,
        },
        ask_words,
        plan: plan_items(content),
    }
}

fn plan_items(content: &ContentModel) -> Vec<PlanItem> {
    let plan = &content.plan;
    let mut stagger = 0..;
    let mut next = move || stagger.next();
    let mut items = Vec::with_capacity(plan.lines.len() + 5);

    items.push(PlanItem {
        stagger: next(),
        kind: PlanItemKind::Date(plan.date.clone()),
    });
    items.push(PlanItem {
        stagger: next(),
        kind: PlanItemKind::Divider,
    });
    let last = plan.lines.len().saturating_sub(1);
    for (i, line) in plan.lines.iter().enumerate() {
        items.push(PlanItem {
            stagger: next(),
            kind: PlanItemKind::Line {
                text: line.clone(),
                soft: i == last,
            },
        });
    }
    items.push(PlanItem {
        stagger: next(),
        kind: PlanItemKind::Signoff(plan.signoff.clone()),
    });
    items.push(PlanItem {
        stagger: None,
        kind: PlanItemKind::Closer,
    });
    items.push(PlanItem {
        stagger: None,
        kind: PlanItemKind::Hint(plan.hint.clone()),
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_both_phases_in_order() {
        // Arrange
        let content = ContentModel::default_content();

        // Act
        let board = render_storyboard(&content);

        // Assert
        assert_eq!(board.chat.rows.len(), 12);
        for (i, row) in board.chat.rows.iter().enumerate() {
            assert_eq!(row.global_index, i);
        }
        assert_eq!(board.chat.rows[7].text, "hey babe 🥰");
        assert_eq!(board.chat.header_name, "Jordan");
    }

    #[test]
    fn test_only_outgoing_rows_have_receipts() {
        let board = render_storyboard(&ContentModel::default_content());

        for row in &board.chat.rows {
            assert_eq!(row.has_receipt, row.side == Side::Right);
        }
    }

    #[test]
    fn test_exactly_one_word_is_highlighted() {
        let board = render_storyboard(&ContentModel::default_content());

        let highlighted: Vec<&str> = board
            .ask_words
            .iter()
            .filter(|w| w.highlighted)
            .map(|w| w.text.as_str())
            .collect();
        assert_eq!(highlighted, vec!["Valentine?"]);
    }

    #[test]
    fn test_plan_items_are_staggered_in_order_with_soft_last_line() {
        // Act
        let board = render_storyboard(&ContentModel::default_content());

        // Assert
        let staggers: Vec<Option<usize>> = board.plan.iter().map(|i| i.stagger).collect();
        assert_eq!(
            staggers,
            vec![Some(0), Some(1), Some(2), Some(3), Some(4), Some(5), None, None]
        );
        let soft: Vec<bool> = board
            .plan
            .iter()
            .filter_map(|item| match &item.kind {
                PlanItemKind::Line { soft, .. } => Some(*soft),
                _ => None,
            })
            .collect();
        assert_eq!(soft, vec![false, false, true]);
    }

    #[test]
    fn test_splash_greets_sender() {
        let board = render_storyboard(&ContentModel::default_content());
        assert_eq!(board.splash.greeting, "Welcome back, Alex");
        assert_eq!(board.card.tags, vec!["Travel", "Photography", "Coffee"]);
    }
}
