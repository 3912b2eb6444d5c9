//! Rendering of the full frame: search bar, section list, footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    state::{AppState, Focus},
    theme::{Theme, theme},
};

pub mod helpers;
mod sections;

/// What: Render one frame of the dashboard.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (input, sections, selection)
///
/// Output:
/// - Draws the search bar, the filtered section list (or the no-results
///   notice), and the footer hints; places the caret when the search
///   input has focus.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    // Background
    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_search(f, app, chunks[0], &th);
    if app.no_results {
        render_no_results(f, chunks[1], &th);
    } else {
        sections::render_sections(f, app, chunks[1], &th);
    }
    render_footer(f, app, chunks[2], &th);
}

/// Search input with a focus-colored border and a visible caret.
fn render_search(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Search;
    let border = if focused { th.sapphire } else { th.overlay1 };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            " Search ",
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ));
    let input = Paragraph::new(app.input.clone())
        .style(Style::default().fg(th.text))
        .block(block);
    f.render_widget(input, area);

    if focused && area.width > 2 && area.height > 1 {
        let caret_x = area
            .x
            .saturating_add(1)
            .saturating_add(u16::try_from(app.input.width()).unwrap_or(u16::MAX))
            .min(area.x + area.width - 2);
        f.set_cursor_position(Position::new(caret_x, area.y + 1));
    }
}

/// Centered notice shown when a non-empty term matches nothing.
fn render_no_results(f: &mut Frame, area: Rect, th: &Theme) {
    let notice = Paragraph::new(Line::from(vec![Span::styled(
        "No links match your search.",
        Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Percentage(60),
        ])
        .split(area);
    f.render_widget(notice, vertical[1]);
}

/// One-line footer: keybinding hints on the left, status on the right.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let hint_style = Style::default().fg(th.subtext0);
    let key_style = Style::default().fg(th.sapphire);
    let mut spans = vec![
        Span::styled(" /", key_style),
        Span::styled(" search  ", hint_style),
        Span::styled("Enter", key_style),
        Span::styled(" open  ", hint_style),
        Span::styled("f", key_style),
        Span::styled(" favorite  ", hint_style),
        Span::styled("E", key_style),
        Span::styled("/", hint_style),
        Span::styled("C", key_style),
        Span::styled(" expand/collapse all  ", hint_style),
        Span::styled("q", key_style),
        Span::styled(" quit", hint_style),
    ];
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled("  |  ", hint_style));
        spans.push(Span::styled(msg.clone(), Style::default().fg(th.green)));
    }
    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(th.mantle));
    f.render_widget(footer, area);
}
