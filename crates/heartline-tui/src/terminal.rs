//! Terminal setup and event translation.

use std::io::{self, Stderr};

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use heartline_core::input::{PointerEvent, PointerPhase, UserInput};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// The terminal the player draws on.
pub type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Pointer distance units per terminal column.
const UNITS_PER_COLUMN: f32 = 8.0;

/// Horizontal distance of the swipe an arrow key stands in for.
const ARROW_SWIPE: f32 = 120.0;

/// What a terminal event means to the player.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Forward these inputs to the session, in order.
    Inputs(Vec<UserInput>),
    /// Leave the player.
    Quit,
    /// Nothing to do; redraw only.
    Ignore,
}

/// Switches to raw mode on the alternate screen with mouse capture.
///
/// # Errors
///
/// Returns any I/O error from the terminal.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stderr(), EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(io::stderr()))
}

/// Puts the terminal back the way [`init`] found it.
///
/// # Errors
///
/// Returns any I/O error from the terminal.
pub fn restore() -> io::Result<()> {
    execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Restores the terminal before the default panic output.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

/// Translates a raw terminal event.
#[must_use]
pub fn translate(event: &Event) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        _ => Action::Ignore,
    }
}

fn translate_key(key: &KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let input = match key.code {
        KeyCode::Char('c') if ctrl => return Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Left => return Action::Inputs(arrow_swipe(-ARROW_SWIPE)),
        KeyCode::Right => return Action::Inputs(arrow_swipe(ARROW_SWIPE)),
        KeyCode::Enter | KeyCode::Char(' ') => UserInput::Tap,
        KeyCode::Char('y' | 'Y') => UserInput::Accept,
        KeyCode::Char('n' | 'N') => UserInput::Decline,
        _ => return Action::Ignore,
    };
    Action::Inputs(vec![input])
}

fn translate_mouse(mouse: &MouseEvent) -> Action {
    let phase = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerPhase::Down,
        MouseEventKind::Drag(MouseButton::Left) => PointerPhase::Move,
        MouseEventKind::Up(MouseButton::Left) => PointerPhase::Up,
        _ => return Action::Ignore,
    };
    let x = f32::from(mouse.column) * UNITS_PER_COLUMN;
    Action::Inputs(vec![UserInput::Pointer(PointerEvent::mouse(phase, x))])
}

/// A complete drag of `dx` starting at the origin.
fn arrow_swipe(dx: f32) -> Vec<UserInput> {
    [
        (PointerPhase::Down, 0.0),
        (PointerPhase::Move, dx / 2.0),
        (PointerPhase::Move, dx),
        (PointerPhase::Up, dx),
    ]
    .into_iter()
    .map(|(phase, x)| UserInput::Pointer(PointerEvent::mouse(phase, x)))
    .collect()
}
