// Title bar component
//
// The small particle logo with the "ZER0" title beneath it. Compact
// terminals get the title alone.

use super::particle_canvas;
use crate::particles::Grid;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub const TITLE: &str = "ZER0";
pub const LOGO_GLYPH: char = '·';

/// Rows the title bar needs at this width
pub fn height(width: u16) -> u16 {
    if Breakpoint::from_width(width).shows_logo() {
        Grid::LOGO.height + 1
    } else {
        1
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(TITLE).style(
        Style::default()
            .fg(app.palette.foreground)
            .add_modifier(Modifier::BOLD),
    );

    if !Breakpoint::from_width(area.width).shows_logo() {
        f.render_widget(title, area);
        return;
    }

    let [logo_area, title_area] =
        Layout::vertical([Constraint::Length(Grid::LOGO.height), Constraint::Length(1)])
            .areas(area);

    particle_canvas::render(
        f,
        logo_area,
        &app.particles,
        &Grid::LOGO,
        LOGO_GLYPH,
        app.palette.muted,
    );
    f.render_widget(title, title_area);
}
