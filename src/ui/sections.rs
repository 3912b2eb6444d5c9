//! Rendering of the flattened section list.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::logic;
use crate::state::{AppState, Row};
use crate::theme::Theme;

use super::helpers::ellipsize;

/// Collapse arrows shown on section headers.
const ARROW_EXPANDED: &str = "\u{25be}"; // ▾
const ARROW_COLLAPSED: &str = "\u{25b8}"; // ▸

/// What: Render the filtered sections as one scrollable list.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (row view, selection)
/// - `area`: Target rectangle
/// - `th`: Palette
///
/// Output:
/// - Draws header rows (arrow, title, visible-link count) and link rows
///   (favorite star, label, url) with the selection bar over the
///   highlighted row.
pub fn render_sections(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let rows = logic::visible_rows(app);
    let inner_width = usize::from(area.width.saturating_sub(2));

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match *row {
            Row::Header(si) => header_item(app, si, th),
            Row::Link { section, link } => link_item(app, section, link, inner_width, th),
        })
        .collect();

    let focused = app.focus == crate::state::Focus::Links;
    let border = if focused { th.sapphire } else { th.overlay1 };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender));
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// Header row: collapse arrow, title, visible-link count.
fn header_item(app: &AppState, si: usize, th: &Theme) -> ListItem<'static> {
    let section = &app.sections[si];
    let arrow = if section.collapsed {
        ARROW_COLLAPSED
    } else {
        ARROW_EXPANDED
    };
    let visible = section
        .links
        .iter()
        .filter(|id| app.is_visible(id))
        .count();
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{arrow} {}", section.title),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({visible})"), Style::default().fg(th.subtext0)),
    ]))
}

/// Link row: favorite star, label, dimmed url.
fn link_item(
    app: &AppState,
    section: usize,
    link: usize,
    width: usize,
    th: &Theme,
) -> ListItem<'static> {
    let id = &app.sections[section].links[link];
    app.link(id).map_or_else(
        || ListItem::new(Line::from("")),
        |record| {
            let star = if app.is_favorite(id) {
                Span::styled("\u{2605} ", Style::default().fg(th.yellow))
            } else {
                Span::styled("\u{2606} ", Style::default().fg(th.surface1))
            };
            let label = Span::styled(
                format!("{:<24}", ellipsize(&record.label, 24)),
                Style::default().fg(th.text),
            );
            let url_budget = width.saturating_sub(30);
            let url = Span::styled(
                ellipsize(&record.url, url_budget),
                Style::default().fg(th.subtext0),
            );
            ListItem::new(Line::from(vec![Span::raw("  "), star, label, url]))
        },
    )
}
