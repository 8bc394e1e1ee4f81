// Status bar component
//
// Key hints at the bottom of every prompt screen, under a divider rule.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const HINTS: &str = "↑/↓ move • space toggle • enter confirm • esc cancel";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(HINTS)
        .style(Style::default().fg(app.palette.muted))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(app.palette.muted)),
        );

    f.render_widget(status, area);
}
