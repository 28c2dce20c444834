//! Screen state machine surface.
//!
//! Exactly one screen is active at a time. Activation is exclusive, and any
//! background work tied to a screen holds a [`ScreenScope`] that resolves the
//! moment that screen stops being active.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

/// The ordered set of full-screen states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenState {
    /// Welcome splash.
    Splash,
    /// Swipeable profile card.
    Card,
    /// Match celebration.
    Match,
    /// Simulated chat, both phases.
    Chat,
    /// The proposal.
    Ask,
    /// Post-acceptance plan reveal.
    Plan,
}

impl ScreenState {
    /// All screens in narrative order.
    pub const ALL: [Self; 6] = [
        Self::Splash,
        Self::Card,
        Self::Match,
        Self::Chat,
        Self::Ask,
        Self::Plan,
    ];

    /// Stable lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Card => "card",
            Self::Match => "match",
            Self::Chat => "chat",
            Self::Ask => "ask",
            Self::Plan => "plan",
        }
    }
}

impl fmt::Display for ScreenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the single active screen. Cheap to clone; clones share state.
#[derive(Debug, Clone)]
pub struct ScreenBoard {
    tx: Arc<watch::Sender<ScreenState>>,
}

impl ScreenBoard {
    /// Creates a board with [`ScreenState::Splash`] active.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ScreenState::Splash);
        Self { tx: Arc::new(tx) }
    }

    /// Activates `screen`, deactivating whatever was active. Returns the
    /// previously active screen.
    pub fn activate(&self, screen: ScreenState) -> ScreenState {
        self.tx.send_replace(screen)
    }

    /// The currently active screen.
    #[must_use]
    pub fn active(&self) -> ScreenState {
        *self.tx.borrow()
    }

    /// Whether `screen` is the active one.
    #[must_use]
    pub fn is_active(&self, screen: ScreenState) -> bool {
        self.active() == screen
    }

    /// Creates a cancellation scope owned by `screen`.
    ///
    /// A scope created for a screen that is not active is already cancelled.
    #[must_use]
    pub fn scope(&self, screen: ScreenState) -> ScreenScope {
        ScreenScope {
            owner: screen,
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ScreenBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancellation token bound to one screen's active lifetime.
#[derive(Debug, Clone)]
pub struct ScreenScope {
    owner: ScreenState,
    rx: watch::Receiver<ScreenState>,
}

impl ScreenScope {
    /// The screen this scope belongs to.
    #[must_use]
    pub fn owner(&self) -> ScreenState {
        self.owner
    }

    /// Whether the owning screen has been deactivated.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow() != self.owner
    }

    /// Resolves once the owning screen is no longer active.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() != self.owner {
                return;
            }
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}
