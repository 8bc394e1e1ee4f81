// Components module - reusable UI building blocks
//
// - Title bar: particle logo and app title
// - Status bar: key hints
// - Particle canvas: the animated slashed zero on a character grid
// - Option list / text field: line builders for the prompt body
//
// Each component is a focused, single-responsibility module.

pub mod option_list;
pub mod particle_canvas;
pub mod status_bar;
pub mod text_field;
pub mod title_bar;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
