// Views module - screen-level rendering logic
//
// - Splash: full-size particle animation with a subtitle
// - Wizard: logo header, the active prompt, key hints
//
// This module dispatches to the appropriate view based on the app phase.
// Rendering reads the app and never mutates it.

mod splash;
mod wizard;

use super::app::{App, Phase};
use super::layout::CANVAS_WIDTH;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let area = stage(f.area());
    match app.phase {
        Phase::Splash { .. } => splash::render(f, area, app),
        Phase::Wizard => wizard::render(f, area, app),
    }
}

/// Left-aligned column no wider than the particle canvas
fn stage(area: Rect) -> Rect {
    Rect {
        width: area.width.min(CANVAS_WIDTH),
        ..area
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::particles::ParticleField;
    use crate::theme::Palette;
    use crate::tui::app::App;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    pub fn app(splash: bool) -> App {
        let particles = ParticleField::with_rng(&mut StdRng::seed_from_u64(11));
        let splash = splash.then(|| Duration::from_secs(3));
        App::with_particles(Palette::dark(), splash, Instant::now(), particles)
    }

    /// Draw once and return the screen as text rows
    pub fn screen(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| super::draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    pub fn contains(screen: &[String], needle: &str) -> bool {
        screen.iter().any(|row| row.contains(needle))
    }
}
