// TUI application state
//
// Wraps the wizard state machine with the pieces only the terminal front-end
// needs: the splash phase, the particle animation, and the resolved palette.

use super::input::{is_interrupt, map_key, KeyAction};
use crate::particles::ParticleField;
use crate::theme::Palette;
use crate::tui::traits::Handled;
use crate::wizard::{Control, Outcome, WizardState};
use crossterm::event::{KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};

/// What the screen is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Full-screen animation before the first prompt
    Splash { started: Instant },
    /// Prompts
    Wizard,
}

pub struct App {
    pub phase: Phase,
    pub wizard: WizardState,
    pub particles: ParticleField,
    pub palette: Palette,
    /// None skips the splash entirely
    splash: Option<Duration>,
}

impl App {
    pub fn new(palette: Palette, splash: Option<Duration>, now: Instant) -> Self {
        Self::with_particles(palette, splash, now, ParticleField::new())
    }

    pub fn with_particles(
        palette: Palette,
        splash: Option<Duration>,
        now: Instant,
        particles: ParticleField,
    ) -> Self {
        let splash = splash.filter(|d| !d.is_zero());
        let phase = match splash {
            Some(_) => Phase::Splash { started: now },
            None => Phase::Wizard,
        };

        Self {
            phase,
            wizard: WizardState::new(),
            particles,
            palette,
            splash,
        }
    }

    pub fn in_splash(&self) -> bool {
        matches!(self.phase, Phase::Splash { .. })
    }

    /// Advance the animation; leave the splash once it has run its course
    pub fn on_tick(&mut self, now: Instant) {
        self.particles.tick();

        if let (Phase::Splash { started }, Some(duration)) = (self.phase, self.splash) {
            if now.saturating_duration_since(started) >= duration {
                tracing::debug!("Splash finished");
                self.phase = Phase::Wizard;
            }
        }
    }

    /// Route a key press
    ///
    /// During the splash any key skips it and is consumed; only Ctrl+C
    /// has its usual meaning. Afterwards bindings go to the state machine
    /// first and everything it declines goes to the focused field.
    pub fn on_key(&mut self, key: KeyEvent) {
        if self.in_splash() {
            if is_interrupt(&key) {
                self.wizard.handle(Control::Cancel);
            } else if key.kind == KeyEventKind::Press {
                tracing::debug!("Splash skipped");
                self.phase = Phase::Wizard;
            }
            return;
        }

        match map_key(key) {
            KeyAction::Control(control) => {
                if self.wizard.handle(control) == Handled::No {
                    self.wizard.forward_key(key);
                }
            }
            KeyAction::Edit(key) => {
                self.wizard.forward_key(key);
            }
            KeyAction::Ignore => {}
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.wizard.outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Step;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_app(splash: Option<Duration>, now: Instant) -> App {
        let particles = ParticleField::with_rng(&mut StdRng::seed_from_u64(1));
        App::with_particles(Palette::dark(), splash, now, particles)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn splash_ends_after_duration_on_tick() {
        let start = Instant::now();
        let mut app = test_app(Some(Duration::from_secs(3)), start);
        assert!(app.in_splash());

        app.on_tick(start + Duration::from_millis(2900));
        assert!(app.in_splash());

        app.on_tick(start + Duration::from_secs(3));
        assert_eq!(app.phase, Phase::Wizard);
        assert!((app.particles.rotation() - 0.016).abs() < 1e-12);
    }

    #[test]
    fn zero_splash_starts_on_the_prompts() {
        let app = test_app(Some(Duration::ZERO), Instant::now());
        assert_eq!(app.phase, Phase::Wizard);
        let app = test_app(None, Instant::now());
        assert_eq!(app.phase, Phase::Wizard);
    }

    #[test]
    fn key_during_splash_is_consumed() {
        let mut app = test_app(Some(Duration::from_secs(3)), Instant::now());
        app.on_key(press(KeyCode::Enter));
        assert_eq!(app.phase, Phase::Wizard);
        assert_eq!(app.wizard.step(), Step::Directory);
        assert!(app.outcome().is_none());
    }

    #[test]
    fn esc_during_splash_only_skips() {
        let mut app = test_app(Some(Duration::from_secs(3)), Instant::now());
        app.on_key(press(KeyCode::Esc));
        assert_eq!(app.phase, Phase::Wizard);
        assert!(app.outcome().is_none());
    }

    #[test]
    fn ctrl_c_during_splash_cancels() {
        let mut app = test_app(Some(Duration::from_secs(3)), Instant::now());
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(app.outcome(), Some(Outcome::Cancelled));
    }

    #[test]
    fn space_types_into_text_fields() {
        let mut app = test_app(None, Instant::now());
        app.on_key(press(KeyCode::Enter));
        for code in [KeyCode::Char('m'), KeyCode::Char(' '), KeyCode::Char('y')] {
            app.on_key(press(code));
        }
        assert_eq!(app.wizard.name().value(), "m y");
    }

    #[test]
    fn up_down_on_text_step_are_harmless() {
        let mut app = test_app(None, Instant::now());
        app.on_key(press(KeyCode::Up));
        app.on_key(press(KeyCode::Down));
        assert_eq!(app.wizard.step(), Step::Directory);
        assert_eq!(app.wizard.directory().value(), ".");
    }
}
