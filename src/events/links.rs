//! Key handling for the sections/links pane.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic;
use crate::state::{AppState, Focus, Row};

/// What: Handle one key press while the links pane has focus.
///
/// Inputs:
/// - `ke`: The key event
/// - `app`: Application state
///
/// Output:
/// - `true` when the key requests application exit.
///
/// Details:
/// - Enter acts on the highlighted row: headers toggle their section's
///   collapse, links record usage and open in the browser.
/// - `f`/Space toggle the highlighted link's favorite; `E`/`C` expand or
///   collapse every section at once.
pub fn handle_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Up | KeyCode::Char('k') => logic::move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') => logic::move_selection(app, 1),
        KeyCode::Tab | KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Enter => match logic::selected_row(app) {
            Some(Row::Header(si)) => {
                logic::toggle_collapse(app, si);
                logic::clamp_selection(app);
            }
            Some(Row::Link { section, link }) => {
                if let Some(id) = link_id(app, section, link) {
                    crate::launch::open_link(app, &id);
                }
            }
            None => {}
        },
        KeyCode::Char('f' | ' ') => {
            if let Some(Row::Link { section, link }) = logic::selected_row(app)
                && let Some(id) = link_id(app, section, link)
            {
                logic::toggle_favorite(app, &id);
            }
        }
        KeyCode::Char('E') => {
            logic::expand_all(app);
            logic::clamp_selection(app);
        }
        KeyCode::Char('C') => {
            logic::collapse_all(app);
            logic::clamp_selection(app);
        }
        _ => {}
    }
    false
}

/// Resolve a row position back to its link id.
fn link_id(app: &AppState, section: usize, link: usize) -> Option<String> {
    app.sections
        .get(section)
        .and_then(|s| s.links.get(link))
        .cloned()
}
