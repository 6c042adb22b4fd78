// src/main.rs

use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

mod app;
mod config;
mod core;
mod logging;
mod ui;

use app::App;
use config::WidgetConfig;
use crate::core::client::{dispatch, HttpSentimentClient, SentimentService};
use crate::core::models::{Completion, Submission};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let log_path = logging::initialize_logging()?;
    info!(log = %log_path.display(), "Starting {}.", env!("CARGO_PKG_NAME"));

    let config = WidgetConfig::load().wrap_err("failed to load configuration")?;
    let client = Arc::new(
        HttpSentimentClient::new(config.endpoint_url.clone()).wrap_err("failed to build HTTP client")?,
    );
    info!(
        endpoint = %client.endpoint(),
        colors = config.palette.len(),
        fallback = ?config.palette.fallback(),
        "Configuration ready."
    );

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new(config.palette);
    let outcome = run(&mut terminal, &mut app, client).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    if let Err(e) = &outcome {
        error!(error = ?e, "UI loop failed.");
    }
    info!("Exiting.");
    outcome
}

async fn run<B: Backend, S: SentimentService>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    service: Arc<S>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Completion>(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Some(submission) = handle_events(app)? {
                spawn_analysis(Arc::clone(&service), submission, tx.clone());
            }
        }

        if let Ok(completion) = rx.try_recv() {
            app.on_reply(completion);
        }
        app.on_tick();
    }
    Ok(())
}

/// Reads one terminal event and forwards key presses to the app.
fn handle_events(app: &mut App) -> Result<Option<Submission>> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            return Ok(app.handle_key(key));
        }
    }
    Ok(None)
}

/// Runs the request on its own task so the UI keeps redrawing.
fn spawn_analysis<S: SentimentService>(service: Arc<S>, submission: Submission, tx: mpsc::Sender<Completion>) {
    tokio::spawn(async move {
        let completion = dispatch(service.as_ref(), submission).await;
        let _ = tx.send(completion).await;
    });
}
