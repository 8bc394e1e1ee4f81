// Option list component
//
// Turns a catalog picker into styled lines: cursor column, marker, label.
// The active entry's description, if any, follows the list in the muted tone.

use crate::theme::Palette;
use crate::wizard::catalog::Choice;
use crate::wizard::selection::OptionList;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

pub const CURSOR: &str = "▶";
pub const RADIO_ON: &str = "◉";
pub const RADIO_OFF: &str = "○";
pub const CHECK_ON: &str = "■";
pub const CHECK_OFF: &str = "□";

/// Marker for single-choice lists: filled under the cursor
pub fn radio<T>(_: T, active: bool) -> &'static str {
    if active {
        RADIO_ON
    } else {
        RADIO_OFF
    }
}

pub fn lines<T, M>(list: &OptionList<T>, marker: M, palette: &Palette) -> Vec<Line<'static>>
where
    T: Choice,
    M: Fn(T, bool) -> &'static str,
{
    let mut lines: Vec<Line<'static>> = list
        .entries()
        .map(|(item, active)| {
            let cursor = if active { CURSOR } else { " " };
            let label_style = if active {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.foreground)
            };
            Line::from(vec![
                Span::styled(
                    format!("{} {} ", cursor, marker(item, active)),
                    Style::default().fg(palette.foreground),
                ),
                Span::styled(item.label(), label_style),
            ])
        })
        .collect();

    if let Some(description) = list.current().description() {
        lines.push(Line::default());
        lines.push(Line::styled(description, Style::default().fg(palette.muted)));
    }

    lines
}
