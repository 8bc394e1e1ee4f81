// Text field component
//
// One prompt line: "> " followed by the value, or the placeholder in the
// muted tone when the value is empty.

use crate::theme::Palette;
use crate::wizard::field::TextField;
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

pub const PROMPT: &str = "> ";

pub fn line(field: &TextField, palette: &Palette) -> Line<'static> {
    let body = if field.value().is_empty() {
        Span::styled(field.placeholder(), Style::default().fg(palette.muted))
    } else {
        Span::styled(field.value().to_string(), Style::default().fg(palette.foreground))
    };
    Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(palette.accent)),
        body,
    ])
}

/// Cursor column relative to the start of the line
pub fn cursor_column(field: &TextField) -> u16 {
    let column = PROMPT.width() + field.visual_cursor();
    u16::try_from(column).unwrap_or(u16::MAX)
}
