//! Event handling layer for linkdeck's TUI.
//!
//! This module re-exports `handle_event` and delegates pane-specific
//! key handling to submodules.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::state::{AppState, Focus};

mod links;
mod search;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            // Ctrl+C quits from anywhere.
            if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
                return true;
            }
            match app.focus {
                Focus::Search => search::handle_key(ke, app),
                Focus::Links => links::handle_key(ke, app),
            }
        }
        // Resize is handled implicitly: the loop redraws after every event.
        _ => false,
    }
}
