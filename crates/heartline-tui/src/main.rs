//! Heartline terminal player entry point.

use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crossterm::event::EventStream;
use futures_util::StreamExt;
use heartline_content::application::storyboard::{Storyboard, render_storyboard};
use heartline_content::domain::model::ContentModel;
use heartline_core::clock::TokioClock;
use heartline_core::input::UserInput;
use heartline_narrative::application::session::Session;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod stage;
mod terminal;
mod ui;

use config::AppConfig;
use error::AppError;
use stage::TerminalStage;
use terminal::{Action, Tui};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_path.as_deref())?;

    tracing::info!("Starting Heartline");

    let content = match &config.content_path {
        Some(path) => ContentModel::load(path)?,
        None => ContentModel::default_content(),
    };
    tracing::info!(fingerprint = %content.fingerprint(), "story ready");
    let storyboard = render_storyboard(&content);

    let stage = Arc::new(TerminalStage::new());
    let mut session = Session::with_settings(
        Arc::new(content),
        config.settings,
        Arc::new(TokioClock::new()),
        stage.clone(),
        stage.clone(),
        stage.clone(),
    );

    let mut terminal = terminal::init()?;
    terminal::install_panic_hook();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let story = tokio::spawn(async move {
        let outcome = session.run(&mut rx).await;
        tracing::info!(?outcome, "story over; waiting for quit");
    });

    let result = run(&mut terminal, &stage, &storyboard, &tx).await;
    terminal::restore()?;

    story.abort();
    tracing::info!("Heartline stopped");
    result
}

/// Writes JSON logs to `path`, or discards them; stdout belongs to the UI.
fn init_tracing(path: Option<&Path>) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match path {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}

async fn run(
    terminal: &mut Tui,
    stage: &TerminalStage,
    storyboard: &Storyboard,
    tx: &UnboundedSender<UserInput>,
) -> Result<(), AppError> {
    let mut events = EventStream::new();
    loop {
        let view = stage.snapshot();
        terminal.draw(|frame| ui::render(frame, storyboard, &view))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => match terminal::translate(&event) {
                    Action::Quit => return Ok(()),
                    Action::Inputs(inputs) => {
                        for input in inputs {
                            if tx.send(input).is_err() {
                                tracing::debug!(?input, "story finished; input dropped");
                            }
                        }
                    }
                    Action::Ignore => {}
                },
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
            () = stage.changed() => {}
        }
    }
}
