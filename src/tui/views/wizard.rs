// Wizard view - one prompt at a time
//
// Layout, top to bottom: title bar (logo + "ZER0"), divider, prompt body,
// status bar. The body is the validation error if any, the step title, then
// the step's input: a text field, an option list, or the review summary.

use crate::tui::app::App;
use crate::tui::components::{self, option_list, text_field, title_bar};
use crate::wizard::catalog::Module;
use crate::wizard::state::ENV_VARS_LABEL;
use crate::wizard::Step;
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let [header, divider, body, footer] = Layout::vertical([
        Constraint::Length(title_bar::height(area.width)),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(area);

    components::render_title(f, header, app);
    f.render_widget(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(app.palette.muted)),
        divider,
    );
    render_body(f, body, app);
    components::render_status(f, footer, app);
}

fn render_body(f: &mut Frame, area: Rect, app: &App) {
    let state = &app.wizard;
    let palette = &app.palette;
    let mut lines: Vec<Line<'static>> = Vec::new();

    if let Some(error) = state.validation_error() {
        lines.push(Line::styled(error.to_string(), Style::default().fg(palette.error)));
    }

    lines.push(Line::styled(
        state.step().title(),
        Style::default()
            .fg(palette.foreground)
            .add_modifier(Modifier::BOLD),
    ));

    // Row of the field line, for the terminal cursor
    let mut cursor_row = None;

    match state.step() {
        Step::Directory | Step::Name | Step::Domain => {
            if let Some(field) = state.active_field() {
                cursor_row = Some((lines.len(), text_field::cursor_column(field)));
                lines.push(text_field::line(field, palette));
            }
        }
        Step::Framework => {
            lines.extend(option_list::lines(state.framework(), option_list::radio, palette));
        }
        Step::Modules => {
            let marker = |module: Module, _active: bool| {
                if state.is_selected(module) {
                    option_list::CHECK_ON
                } else {
                    option_list::CHECK_OFF
                }
            };
            lines.extend(option_list::lines(state.modules(), marker, palette));
        }
        Step::Confirm => {
            let muted = Style::default().fg(palette.muted);
            let mut rows = state.summary().rows();
            let actions = state.confirm().len();

            // Keep every action on screen: drop the gap, then the env vars row
            let room = (area.height as usize).saturating_sub(lines.len());
            let gap = room > rows.len() + actions;
            if rows.len() + actions > room {
                rows.retain(|(label, _)| *label != ENV_VARS_LABEL);
            }

            for (label, value) in rows {
                lines.push(Line::styled(format!("{}: {}", label, value), muted));
            }
            if gap {
                lines.push(Line::default());
            }
            lines.extend(option_list::lines(state.confirm(), option_list::radio, palette));
        }
        Step::PackageManager => {
            lines.extend(option_list::lines(
                state.package_manager(),
                option_list::radio,
                palette,
            ));
        }
    }

    f.render_widget(Paragraph::new(lines), area);

    if let Some((row, column)) = cursor_row {
        let x = area.x.saturating_add(column).min(area.right().saturating_sub(1));
        let y = area.y + row as u16;
        if y < area.bottom() {
            f.set_cursor_position(Position::new(x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tui::components::status_bar::HINTS;
    use crate::tui::views::test_support::{app, contains, screen};
    use crate::wizard::Control;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_str(app: &mut crate::tui::app::App, text: &str) {
        for c in text.chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn directory_prompt_layout() {
        let app = app(false);
        let screen = screen(&app, 80, 24);

        assert!(contains(&screen[..6], "·"));
        assert!(screen[6].starts_with("ZER0"));
        assert!(screen[7].starts_with("────"));
        assert!(screen[8].starts_with("Directory (default: .)"));
        assert!(screen[9].starts_with("> ."));
        assert!(contains(&screen, HINTS));
    }

    #[test]
    fn compact_width_drops_the_logo() {
        let app = app(false);
        let screen = screen(&app, 50, 20);
        assert!(screen[0].starts_with("ZER0"));
        assert!(screen[2].starts_with("Directory (default: .)"));
        assert!(!contains(&screen, "·"));
    }

    #[test]
    fn validation_error_sits_above_the_prompt() {
        let mut app = app(false);
        app.wizard.handle(Control::Advance);
        app.wizard.handle(Control::Advance);
        let screen = screen(&app, 50, 20);

        assert!(screen[2].starts_with("App name is required."));
        assert!(screen[3].starts_with("App name"));
        assert!(screen[4].starts_with("> my-app"));
    }

    #[test]
    fn modules_show_checkboxes() {
        let mut app = app(false);
        app.wizard.handle(Control::Advance);
        type_str(&mut app, "demo");
        for _ in 0..3 {
            app.wizard.handle(Control::Advance);
        }
        app.wizard.handle(Control::Toggle);
        app.wizard.handle(Control::MoveDown);

        let screen = screen(&app, 50, 20);
        assert!(screen[3].starts_with("  ■ Database (Neon)"));
        assert!(screen[4].starts_with("▶ □ Auth (Clerk)"));
        assert!(contains(&screen, "Authentication with Clerk."));
    }

    #[test]
    fn review_shows_summary_and_actions() {
        let mut app = app(false);
        app.wizard.handle(Control::Advance);
        type_str(&mut app, "demo");
        for _ in 0..4 {
            app.wizard.handle(Control::Advance);
        }

        let screen = screen(&app, 60, 40);
        assert!(contains(&screen, "Directory: ."));
        assert!(contains(&screen, "App name: demo"));
        assert!(contains(&screen, "Domain: None"));
        assert!(contains(&screen, "Framework: Next.js"));
        assert!(contains(&screen, "Modules: None"));
        assert!(contains(&screen, "▶ ◉ Continue"));
        assert!(contains(&screen, "  ○ Edit modules"));
        assert!(contains(&screen, "Env vars: CONTACT_FROM_EMAIL"));
    }

    fn review_on_cancel() -> crate::tui::app::App {
        let mut app = app(false);
        app.wizard.handle(Control::Advance);
        type_str(&mut app, "demo");
        for _ in 0..4 {
            app.wizard.handle(Control::Advance);
        }
        for _ in 0..6 {
            app.wizard.handle(Control::MoveDown);
        }
        app
    }

    #[test]
    fn review_fits_a_standard_terminal() {
        let app = review_on_cancel();
        let screen = screen(&app, 80, 24);

        assert!(screen[8].starts_with("Review"));
        assert!(screen[14].starts_with("Env vars: "));
        assert!(screen[15].starts_with("  ○ Continue"));
        assert!(screen[21].starts_with("▶ ◉ Cancel"));
        assert!(contains(&screen[22..], HINTS));
    }

    #[test]
    fn short_review_drops_env_vars_before_actions() {
        let app = review_on_cancel();
        let screen = screen(&app, 80, 23);

        assert!(!contains(&screen, "Env vars"));
        assert!(screen[13].starts_with("Modules: None"));
        assert!(screen[20].starts_with("▶ ◉ Cancel"));
    }
}
