//! Frame rendering.
//!
//! Draws the static [`Storyboard`] for the active screen, filtered and
//! decorated by the live [`StageView`]. Nothing here mutates state.

use heartline_content::application::storyboard::{
    ChatRow, PlanItemKind, ProfileCard, Storyboard,
};
use heartline_core::effects::{Overlay, ParticleKind, SendButton, Side, Sound};
use heartline_core::screen::ScreenState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use crate::stage::StageView;

const ROSE: Color = Color::Rgb(255, 94, 135);
const BLUSH: Color = Color::Rgb(255, 182, 193);
const PALETTE: [Color; 6] = [
    ROSE,
    BLUSH,
    Color::Rgb(255, 215, 0),
    Color::Rgb(186, 104, 200),
    Color::Rgb(255, 138, 101),
    Color::White,
];

/// Pointer units per column, matching the input translation.
const UNITS_PER_COLUMN: f32 = 8.0;

const CARD_WIDTH: u16 = 42;
const CARD_HEIGHT: u16 = 14;

/// Draws one frame.
pub fn render(frame: &mut Frame, board: &Storyboard, view: &StageView) {
    let [body, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    match view.screen {
        ScreenState::Splash => render_splash(frame, body, board),
        ScreenState::Card => render_card(frame, body, &board.card, view),
        ScreenState::Match => render_match(frame, body, board),
        ScreenState::Chat => render_chat(frame, body, board, view),
        ScreenState::Ask => render_ask(frame, body, board, view),
        ScreenState::Plan => render_plan(frame, body, board),
    }
    render_particles(frame, body, view);
    render_overlay(frame, body, view);
    render_status(frame, status, view);
}

fn avatar(avatar: &str) -> &str {
    if avatar.chars().count() <= 2 { avatar } else { "◉" }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn render_splash(frame: &mut Frame, area: Rect, board: &Storyboard) {
    let text = Text::from(vec![
        Line::from(avatar(&board.splash.avatar).fg(ROSE)),
        Line::default(),
        Line::from(board.splash.greeting.as_str().bold()),
    ]);
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        centered(area, area.width, 3),
    );
}

fn render_card(frame: &mut Frame, area: Rect, card: &ProfileCard, view: &StageView) {
    let [stack, nudge, hint] = Layout::vertical([
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    if !view.card_gone {
        let feedback = view.card;
        #[allow(clippy::cast_possible_truncation)]
        let shift = feedback.map_or(0, |f| (f.offset / UNITS_PER_COLUMN).round() as i32);
        let mut rect = centered(stack, CARD_WIDTH.min(stack.width), CARD_HEIGHT);
        let max_x = i32::from(stack.right().saturating_sub(rect.width));
        let x = (i32::from(rect.x) + shift).clamp(i32::from(stack.x), max_x);
        rect.x = u16::try_from(x).unwrap_or(rect.x);

        let mut badges = Vec::new();
        if let Some(f) = feedback {
            if f.like > 0.0 {
                badges.push(badge("LIKE", Color::Green, f.like));
            }
            if f.nope > 0.0 {
                badges.push(badge("NOPE", Color::Red, f.nope));
            }
        }
        let glow = feedback.is_some_and(|f| f.glow > 0.0);
        let border = if glow { Style::new().fg(ROSE) } else { Style::new() };

        let mut lines = vec![
            Line::from(badges).centered(),
            Line::from(avatar(&card.avatar).fg(ROSE)).centered(),
            Line::from(format!("{}, {}", card.name, card.age).bold()).centered(),
            Line::from(card.subtitle.as_str().italic()).centered(),
            Line::default(),
            Line::from(card.bio.as_str()).centered(),
            Line::default(),
        ];
        lines.push(Line::from(card.tags.join(" · ").fg(BLUSH)).centered());

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::bordered().border_style(border)),
            rect,
        );
    }

    if let Some(text) = &view.card_nudge {
        frame.render_widget(Line::from(text.as_str().fg(ROSE)).centered(), nudge);
    }
    frame.render_widget(
        Line::from("drag or ← / → to swipe".dark_gray()).centered(),
        hint,
    );
}

fn badge(label: &str, color: Color, strength: f32) -> Span<'_> {
    let style = Style::new().fg(color);
    if strength >= 0.5 {
        Span::styled(format!(" {label} "), style.add_modifier(Modifier::BOLD | Modifier::REVERSED))
    } else {
        Span::styled(format!(" {label} "), style.add_modifier(Modifier::DIM))
    }
}

fn render_match(frame: &mut Frame, area: Rect, board: &Storyboard) {
    let view = &board.match_view;
    let text = Text::from(vec![
        Line::from("It's a Match!".fg(ROSE).bold()),
        Line::default(),
        Line::from(vec![
            Span::raw(avatar(&view.left_avatar)),
            Span::raw("   "),
            "♥".fg(ROSE),
            Span::raw("   "),
            Span::raw(avatar(&view.right_avatar)),
        ]),
        Line::default(),
        Line::from(view.subtitle.as_str().italic()),
        Line::default(),
        Line::from("tap or press enter".dark_gray()),
    ]);
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        centered(area, area.width, 7),
    );
}

fn chat_items<'a>(rows: &'a [ChatRow], view: &StageView) -> Vec<ListItem<'a>> {
    let mut items = Vec::new();
    for row in rows.iter().filter(|r| view.revealed.contains(&r.global_index)) {
        let item = match row.side {
            Side::Left => ListItem::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(row.text.as_str(), Style::new().bg(Color::DarkGray)),
            ])),
            Side::Right => {
                let mut lines = vec![
                    Line::from(Span::styled(row.text.as_str(), Style::new().bg(ROSE).fg(Color::White)))
                        .right_aligned(),
                ];
                if row.has_receipt && view.receipts.contains(&row.global_index) {
                    lines.push(Line::from("Seen".dark_gray().italic()).right_aligned());
                }
                ListItem::new(lines)
            }
        };
        items.push(item);
    }
    if view.typing_left {
        items.push(ListItem::new(Line::from(" •••".dark_gray())));
    }
    if view.typing_right {
        items.push(ListItem::new(Line::from("••• ".fg(BLUSH)).right_aligned()));
    }
    items
}

fn render_chat(frame: &mut Frame, area: Rect, board: &Storyboard, view: &StageView) {
    let [messages, input] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    let name = view
        .header_name
        .as_deref()
        .unwrap_or(&board.chat.header_name);
    let title = format!(" {} {name} ", avatar(&board.chat.avatar));

    let items = chat_items(&board.chat.rows, view);
    let visible = usize::from(messages.height.saturating_sub(2));
    let used: usize = items.iter().map(ListItem::height).sum();
    let mut skip_lines = used.saturating_sub(visible);
    let items: Vec<ListItem> = items
        .into_iter()
        .skip_while(|item| {
            if skip_lines == 0 {
                return false;
            }
            skip_lines = skip_lines.saturating_sub(item.height());
            true
        })
        .collect();

    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(title.bold())),
        messages,
    );

    let send = match view.send {
        SendButton::Idle => "[Send]".dark_gray(),
        SendButton::Ready => "[Send]".fg(ROSE).bold(),
        SendButton::Sending => "[Send]".fg(ROSE).reversed(),
    };
    let key = view
        .key
        .filter(|_| !view.input.is_empty())
        .map(|k| if k == ' ' { "space".to_owned() } else { k.to_string() })
        .map_or_else(String::new, |k| format!(" key: {k} "));
    let field = Line::from(vec![
        Span::raw(view.input.as_str()),
        "█".fg(BLUSH),
        Span::raw(" "),
        send,
    ]);
    frame.render_widget(
        Paragraph::new(field).block(Block::bordered().title_bottom(key.dark_gray())),
        input,
    );
}

fn render_ask(frame: &mut Frame, area: Rect, board: &Storyboard, view: &StageView) {
    if !view.ask_revealed {
        return;
    }

    let words: Vec<Span> = board
        .ask_words
        .iter()
        .flat_map(|word| {
            let style = if word.highlighted {
                Style::new().fg(ROSE).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::new().bold()
            };
            [Span::styled(word.text.as_str(), style), Span::raw(" ")]
        })
        .collect();

    let accept_style = match view.accept {
        _ if view.accepted => Style::new().fg(Color::White).bg(ROSE).bold(),
        Some(accept) if accept.scale > 1.0 || view.accept_pulsed => {
            Style::new().fg(Color::White).bg(ROSE).bold()
        }
        _ => Style::new().fg(ROSE).bold(),
    };
    let accept_label = if view.accepted { " Yes ♥ " } else { " Yes " };

    let (decline_label, decline_style, pad) = match &view.decline {
        Some(decline) => {
            let style = if decline.faded {
                Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM)
            } else if decline.shrunk {
                Style::new().fg(Color::Gray)
            } else {
                Style::new().fg(Color::White)
            };
            let shift = decline.offset.map_or(0, |o| o.dx / 8);
            (decline.label.as_str(), style, usize::try_from(shift.abs()).unwrap_or(0))
        }
        None => ("No", Style::new().fg(Color::White), 0),
    };

    let controls = Line::from(vec![
        Span::styled(format!("[{accept_label}]"), accept_style),
        Span::raw(" ".repeat(4 + pad)),
        Span::styled(format!("[ {decline_label} ]"), decline_style),
    ]);

    let mut lines = vec![
        Line::from(words),
        Line::default(),
        Line::default(),
        controls,
        Line::default(),
    ];
    if let Some(hint) = &view.ask_nudge {
        lines.push(Line::from(hint.as_str().fg(BLUSH).italic()));
    } else {
        lines.push(Line::from("y = yes   n = no".dark_gray()));
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered(area, area.width, height),
    );
}

fn render_plan(frame: &mut Frame, area: Rect, board: &Storyboard) {
    let lines: Vec<Line> = board
        .plan
        .iter()
        .map(|item| match &item.kind {
            PlanItemKind::Date(date) => Line::from(date.as_str().fg(ROSE).bold()),
            PlanItemKind::Divider => Line::from("────────".fg(BLUSH)),
            PlanItemKind::Line { text, soft: false } => Line::from(text.as_str()),
            PlanItemKind::Line { text, soft: true } => Line::from(text.as_str().italic().dim()),
            PlanItemKind::Signoff(signoff) => Line::from(signoff.as_str().italic()),
            PlanItemKind::Closer => Line::from("♥".fg(ROSE)),
            PlanItemKind::Hint(hint) => Line::from(hint.as_str().dark_gray()),
        })
        .collect();

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered(area, area.width, height),
    );
}

fn particle_glyph(kind: ParticleKind, glyph: Option<char>) -> char {
    glyph.unwrap_or(match kind {
        ParticleKind::Sparkle => '✦',
        ParticleKind::Bokeh => '○',
        ParticleKind::AskDrift => '·',
        ParticleKind::Confetti | ParticleKind::FloatingHeart => '♥',
    })
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn render_particles(frame: &mut Frame, area: Rect, view: &StageView) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buffer = frame.buffer_mut();
    for (kind, particle) in &view.particles {
        let col = (particle.x.clamp(0.0, 100.0) / 100.0 * f32::from(area.width - 1)) as u16;
        let row = (particle.y.clamp(0.0, 100.0) / 100.0 * f32::from(area.height - 1)) as u16;
        let color = PALETTE[usize::from(particle.palette) % PALETTE.len()];
        let glyph = particle_glyph(*kind, particle.glyph);
        let mut style = Style::new().fg(color);
        if *kind == ParticleKind::Bokeh {
            style = style.add_modifier(Modifier::DIM);
        }
        buffer.set_string(area.x + col, area.y + row, glyph.to_string(), style);
    }
}

fn render_overlay(frame: &mut Frame, area: Rect, view: &StageView) {
    let background = match view.overlay {
        Overlay::Clear | Overlay::BlackoutLift => return,
        Overlay::Blackout => Color::Black,
        Overlay::PulseGlow => Color::Rgb(40, 0, 12),
        Overlay::AppSwitch => Color::Rgb(24, 24, 24),
        Overlay::WhiteFlash => Color::White,
    };
    frame.render_widget(Clear, area);
    frame.render_widget(Block::new().style(Style::new().bg(background)), area);

    if let Some(caption) = &view.caption {
        frame.render_widget(
            Paragraph::new(Line::from(caption.as_str().italic().fg(Color::White)))
                .alignment(Alignment::Center)
                .style(Style::new().bg(background)),
            centered(area, area.width, 1),
        );
    }
}

fn sound_name(sound: Sound) -> String {
    match sound {
        Sound::WordTone(k) => format!("tone {}", k + 1),
        other => format!("{other:?}").to_lowercase(),
    }
}

fn render_status(frame: &mut Frame, area: Rect, view: &StageView) {
    let mut spans = vec![Span::raw(format!(" {} ", view.screen)).reversed()];
    if let Some(sound) = view.sound {
        spans.push(Span::raw(format!("  ♪ {}", sound_name(sound))).fg(BLUSH));
    }
    if view.pad {
        spans.push("  ♫ pad".fg(BLUSH));
    }
    if let Some(buzz) = &view.buzz {
        let total: u32 = buzz.0.iter().sum();
        spans.push(Span::raw(format!("  〰 {total}ms")).dark_gray());
    }
    spans.push("  q quits".dark_gray());
    frame.render_widget(Line::from(spans), area);
}

#[cfg(test)]
mod tests {
    use heartline_content::application::storyboard::render_storyboard;
    use heartline_content::domain::model::ContentModel;
    use heartline_core::effects::{DeclineView, StageCue};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn draw(view: &StageView) -> String {
        let board = render_storyboard(&ContentModel::default_content());
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, &board, view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn view_on(screen: ScreenState) -> StageView {
        let mut view = StageView::default();
        view.apply(StageCue::Screen(screen));
        view
    }

    #[test]
    fn test_splash_greets_sender() {
        let screen = draw(&StageView::default());
        assert!(screen.contains("Welcome back, Alex"));
    }

    #[test]
    fn test_card_shows_profile_and_nudge() {
        // Arrange
        let mut view = view_on(ScreenState::Card);
        view.apply(StageCue::CardNudge(Some("Wrong way :)".to_owned())));

        // Act
        let screen = draw(&view);

        // Assert
        assert!(screen.contains("Jordan, 25"));
        assert!(screen.contains("Wrong way :)"));
    }

    #[test]
    fn test_chat_shows_only_revealed_rows_and_receipts() {
        // Arrange
        let mut view = view_on(ScreenState::Chat);
        view.apply(StageCue::RevealRow(2));
        view.apply(StageCue::RevealRow(3));
        view.apply(StageCue::ShowReceipt(3));

        // Act
        let screen = draw(&view);

        // Assert
        assert!(screen.contains("So what brings you to this app?"));
        assert!(screen.contains("Just seeing what's out there"));
        assert!(screen.contains("Seen"));
        assert!(!screen.contains("Let's grab coffee sometime?"));
    }

    #[test]
    fn test_chat_header_follows_rename() {
        let mut view = view_on(ScreenState::Chat);
        view.apply(StageCue::HeaderName("Babe".to_owned()));

        assert!(draw(&view).contains("Babe"));
    }

    #[test]
    fn test_ask_words_wait_for_reveal() {
        // Arrange
        let mut view = view_on(ScreenState::Ask);
        assert!(!draw(&view).contains("Valentine?"));

        // Act
        view.apply(StageCue::AskReveal);
        view.apply(StageCue::Decline(DeclineView {
            count: 1,
            label: "Are you sure?".to_owned(),
            offset: None,
            shrunk: false,
            faded: false,
        }));

        // Assert
        let screen = draw(&view);
        assert!(screen.contains("Valentine?"));
        assert!(screen.contains("Are you sure?"));
    }

    #[test]
    fn test_blackout_covers_screen_with_caption() {
        // Arrange
        let mut view = view_on(ScreenState::Chat);
        view.apply(StageCue::RevealRow(0));
        view.apply(StageCue::Overlay(Overlay::Blackout));
        view.apply(StageCue::Caption(Some("Best swipe of my life.".to_owned())));

        // Act
        let screen = draw(&view);

        // Assert
        assert!(screen.contains("Best swipe of my life."));
        assert!(!screen.contains("we matched"));
    }

    #[test]
    fn test_plan_lists_every_line() {
        let screen = draw(&view_on(ScreenState::Plan));

        assert!(screen.contains("February 14th"));
        assert!(screen.contains("Just bring yourself, love."));
    }

    #[test]
    fn test_status_line_names_last_sound() {
        let view = StageView {
            sound: Some(Sound::WordTone(2)),
            ..StageView::default()
        };

        assert!(draw(&view).contains("tone 3"));
    }
}
