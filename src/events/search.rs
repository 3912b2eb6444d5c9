//! Key handling for the search input pane.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic;
use crate::state::{AppState, Focus};

/// What: Handle one key press while the search input has focus.
///
/// Inputs:
/// - `ke`: The key event
/// - `app`: Application state
///
/// Output:
/// - Always `false` (the search pane never quits the app); edits re-run
///   the filter immediately so results narrow on every keystroke.
pub fn handle_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char(c) => {
            app.input.push(c);
            logic::apply_search(app);
        }
        KeyCode::Backspace => {
            app.input.pop();
            logic::apply_search(app);
        }
        KeyCode::Esc => {
            // First Esc clears the term, second leaves the pane.
            if app.input.is_empty() {
                app.focus = Focus::Links;
            } else {
                app.input.clear();
                logic::apply_search(app);
            }
        }
        KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
            app.focus = Focus::Links;
            logic::clamp_selection(app);
        }
        _ => {}
    }
    false
}
