//! A TUI for signing up for an account on the command line

/// The "functional core" to the main module's "imperative shell"
mod app;

/// Configuration and argument parsing
mod config;

/// Tab-order enums for forms
mod form_fields;

use app::{App, EffectContext};
use clap::Parser;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use std::{fs, io, process::ExitCode, sync::Arc};
use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedSender},
    task::JoinHandle,
};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode, Problem> {
    let config = config::Config::parse();

    // The terminal belongs to the UI, so logs go to a file instead. Keep the
    // guard alive until we exit so buffered lines get flushed.
    let _guard = init_logging(&config)?;
    tracing::info!(server = %config.server, "starting");

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let res = run(terminal, Arc::new(EffectContext::new(&config))).await;
    ratatui::restore();

    Ok(res?)
}

/// Send `tracing` output to a daily log file in the configured directory.
fn init_logging(config: &config::Config) -> Result<WorkerGuard, Problem> {
    let log_dir = config.log_dir();
    fs::create_dir_all(&log_dir)?;

    let appender = rolling::RollingFileAppender::builder()
        .rotation(rolling::Rotation::DAILY)
        .filename_prefix("signup")
        .filename_suffix("log")
        .build(&log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}

/// Manage the lifecycle of the app
async fn run(mut terminal: DefaultTerminal, conn: Arc<EffectContext>) -> io::Result<ExitCode> {
    let mut app = App::new();

    // Side-effectful behaviors (network access) take place via async tasks.
    // Once those tasks are done, we read their results off of a channel. We
    // keep track of outstanding effects so we can exit cleanly.
    let (effect_tx, mut effect_rx) = unbounded_channel();
    let mut outstanding_effects: Vec<JoinHandle<()>> = Vec::new();

    terminal.draw(|frame| app.render(frame))?;

    let mut event_stream = EventStream::new();

    loop {
        // Wait for either external input or the result of an effect. Not
        // every terminal event matters to us (e.g. resizes just need a
        // redraw), hence the `Option`.
        let next_action_opt = tokio::select! {
            event_opt = event_stream.next() => {
                match event_opt {
                    Some(Ok(Event::Key(key_event))) => Some(app::Action::Key(key_event)),
                    Some(Err(err)) => Some(app::Action::Problem(err.to_string())),
                    _ => None,
                }
            },

            effect_opt = effect_rx.recv() => effect_opt,
        };

        if let Some(action) = next_action_opt {
            for effect in app.handle(action) {
                outstanding_effects.push(spawn_effect_task(
                    effect_tx.clone(),
                    Arc::clone(&conn),
                    effect,
                ));
            }
        }

        terminal.draw(|frame| app.render(frame))?;

        // This list should never be too long (since we do this on every pass
        // through the event loop) so a full scan is fine.
        outstanding_effects.retain(|handle| !handle.is_finished());

        if let Some(code) = app.should_exit() {
            abort_effects(outstanding_effects).await;

            tracing::info!("exiting");
            return Ok(code);
        }
    }
}

/// Spawn a task to run an effect and send the next action to the app.
fn spawn_effect_task(
    effect_tx: UnboundedSender<app::Action>,
    conn: Arc<EffectContext>,
    effect: app::Effect,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let next_action = effect.run(&conn).await;

        // A closed channel means the UI is shutting down, so the answer no
        // longer matters.
        if effect_tx.send(next_action).is_err() {
            tracing::debug!("dropping effect result after shutdown");
        }
    })
}

/// Stop whatever effects are still running. Nothing will read their results
/// once we quit, and a request with no response shouldn't keep us open.
async fn abort_effects(effects: Vec<JoinHandle<()>>) {
    for effect in effects {
        effect.abort();

        match effect.await {
            Ok(()) => {}
            Err(err) if err.is_cancelled() => tracing::debug!("cancelled effect on shutdown"),
            Err(err) => tracing::warn!(?err, "effect task failed during shutdown"),
        }
    }
}

/// Things that can stop the app from starting or running.
#[derive(Debug, thiserror::Error)]
enum Problem {
    /// Problem with the terminal or the log directory.
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    /// We couldn't open the log file.
    #[error("couldn't set up logging: {0}")]
    Logging(#[from] rolling::InitError),
}
