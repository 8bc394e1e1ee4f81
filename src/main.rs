// zero-wizard - Interactive project scaffolding wizard
//
// Walks the user through a short series of prompts (directory, app name,
// domain, framework, modules, review, package manager) and emits the answers
// as one JSON record for the launcher that spawned it.
//
// Architecture:
// - Wizard: pure state machine over the prompts, plus the record emitter
// - TUI (ratatui): splash animation and prompt rendering, driven by a
//   tokio event source that merges key presses with animation ticks
// - Particles: the animated slashed-zero logo
// - Logging: tracing events are buffered in memory while the terminal is
//   in raw mode and replayed to stderr afterwards

mod cli;
mod config;
mod logging;
mod particles;
mod theme;
mod tui;
mod wizard;

use anyhow::Result;
use cli::Cli;
use config::Config;
use logging::LogBuffer;
use wizard::{Destination, Outcome};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Load configuration, then let flags win
    let config = Config::load()?.with_overrides(cli.appearance(), cli.no_splash);

    // Keep the guard alive until exit so buffered file logs get flushed
    let log_buffer = LogBuffer::new();
    let _log_guard = logging::init(&config.logging, log_buffer.clone())?;

    tracing::info!(version = config::VERSION, "Starting zero-wizard");

    let result = tui::run_tui(&config).await;

    // The terminal is ours again; surface anything worth reading
    if let Err(e) = log_buffer.replay_problems(&mut std::io::stderr()) {
        eprintln!("Warning: Could not replay logs: {}", e);
    }

    match result? {
        Outcome::Completed(record) => {
            let destination = Destination::from_flag(cli.output.as_deref());
            wizard::emit(&record, &destination)?;
        }
        Outcome::Cancelled => {}
    }

    Ok(())
}
