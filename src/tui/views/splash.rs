// Splash view - the slashed zero at full size
//
// Canvas, a blank row, then the subtitle indented under the figure.

use crate::particles::Grid;
use crate::tui::app::App;
use crate::tui::components::particle_canvas;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

pub const SUBTITLE: &str = "Starting from 0...";
const SUBTITLE_INDENT: usize = 36;
const GLYPH: char = '•';

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let [canvas_area, _, subtitle_area] = Layout::vertical([
        Constraint::Length(Grid::FULL.height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    particle_canvas::render(
        f,
        canvas_area,
        &app.particles,
        &Grid::FULL,
        GLYPH,
        app.palette.accent,
    );

    let subtitle = Paragraph::new(format!("{}{}", " ".repeat(SUBTITLE_INDENT), SUBTITLE))
        .style(Style::default().fg(app.palette.muted));
    f.render_widget(subtitle, subtitle_area);
}
