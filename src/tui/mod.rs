// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, animation ticks)
// - Rendering the wizard

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod layout;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::theme::Palette;
use crate::wizard::Outcome;
use anyhow::{anyhow, Context, Result};
use app::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::{Event, EventSource};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

/// Run the wizard in the terminal
///
/// Sets up the terminal, runs the event loop until the session produces an
/// outcome, then restores the terminal. The terminal is restored before any
/// loop error is returned.
pub async fn run_tui(config: &Config) -> Result<Outcome> {
    let palette = Palette::resolve(config.appearance);
    let mut app = App::new(palette, config.splash, Instant::now());

    tracing::info!(
        appearance = config.appearance.as_str(),
        splash_ms = config.splash.map(|d| d.as_millis() as u64).unwrap_or(0),
        tick_ms = config.tick_rate.as_millis() as u64,
        "Starting wizard"
    );

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to setup terminal");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e).context("Failed to create terminal");
        }
    };

    let mut events = EventSource::new(config.tick_rate);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut events).await;
    events.stop();

    // Restore terminal
    let restored = restore_terminal(&mut terminal);

    prefer_loop_error(result, restored)
}

/// Run every restore step even if an earlier one fails; report the first failure
fn restore_terminal<W: io::Write>(terminal: &mut Terminal<CrosstermBackend<W>>) -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen =
        execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal");
    let cursor = terminal.show_cursor().context("Failed to show cursor");
    raw.and(screen).and(cursor)
}

/// A loop error wins over a restore error; a restore error still fails a finished session
fn prefer_loop_error<T>(result: Result<T>, restored: Result<()>) -> Result<T> {
    match (result, restored) {
        (Err(e), Err(restore)) => {
            tracing::error!("Terminal restore also failed: {:#}", restore);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(_), Err(restore)) => Err(restore),
        (Ok(value), Ok(())) => Ok(value),
    }
}

/// Main event loop
///
/// Draws, waits for the next tick or key, applies it, and repeats until the
/// wizard is finished. One event is handled per iteration.
async fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut EventSource,
) -> Result<Outcome> {
    loop {
        if let Some(outcome) = app.outcome() {
            return Ok(outcome);
        }

        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        match events.next().await {
            Some(Event::Tick) => app.on_tick(Instant::now()),
            Some(Event::Key(key)) => app.on_key(key),
            Some(Event::Resize) => {}
            None => return Err(anyhow!("Terminal event stream ended before the wizard finished")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::ParticleField;
    use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
    use futures::{stream, StreamExt};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn key(code: KeyCode) -> io::Result<CrosstermEvent> {
        Ok(CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn test_app() -> App {
        let particles = ParticleField::with_rng(&mut StdRng::seed_from_u64(5));
        App::with_particles(Palette::dark(), None, Instant::now(), particles)
    }

    #[tokio::test]
    async fn scripted_session_completes() {
        let mut script = vec![key(KeyCode::Enter)];
        script.extend("demo".chars().map(|c| key(KeyCode::Char(c))));
        script.extend([
            key(KeyCode::Enter),
            key(KeyCode::Enter),
            key(KeyCode::Enter),
            key(KeyCode::Char(' ')),
            key(KeyCode::Enter),
            key(KeyCode::Enter),
            key(KeyCode::Down),
            key(KeyCode::Char(' ')),
        ]);
        let input = stream::iter(script).chain(stream::pending());

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = test_app();
        let mut events = EventSource::with_input(input, Duration::from_millis(20));

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            run_event_loop(&mut terminal, &mut app, &mut events),
        )
        .await
        .expect("event loop stalled")
        .unwrap();

        let Outcome::Completed(record) = outcome else {
            panic!("expected completion");
        };
        assert_eq!(record.app_name, "demo");
        assert_eq!(record.modules, vec![crate::wizard::catalog::Module::Neon]);
        assert_eq!(record.package_manager.id(), "pnpm");
    }

    #[tokio::test]
    async fn escape_cancels() {
        let input = stream::iter(vec![key(KeyCode::Esc)]).chain(stream::pending());
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = test_app();
        let mut events = EventSource::with_input(input, Duration::from_millis(20));

        let outcome = run_event_loop(&mut terminal, &mut app, &mut events)
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
    }

    #[test]
    fn loop_error_survives_a_failed_restore() {
        let err = prefer_loop_error::<Outcome>(
            Err(anyhow!("Failed to draw terminal")),
            Err(anyhow!("Failed to disable raw mode")),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Failed to draw terminal");
    }

    #[test]
    fn restore_error_fails_a_finished_session() {
        let err = prefer_loop_error(Ok(Outcome::Cancelled), Err(anyhow!("Failed to show cursor")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to show cursor");

        let outcome = prefer_loop_error(Ok(Outcome::Cancelled), Ok(())).unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
    }

    #[tokio::test]
    async fn closed_input_before_outcome_is_an_error() {
        let input = stream::iter(vec![key(KeyCode::Char('x'))]);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = test_app();
        let mut events = EventSource::with_input(input, Duration::from_secs(60));

        let err = run_event_loop(&mut terminal, &mut app, &mut events)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("ended before the wizard finished"));
    }
}
