//! Mutations of the three persisted lists.
//!
//! Every operation here writes its list through to disk before
//! returning, so persisted and in-memory state never diverge between
//! events.

use crate::app::persist;
use crate::state::AppState;

/// What: Toggle `id` in the favorites list.
///
/// Inputs:
/// - `app`: Application state
/// - `id`: Link id to toggle (absent ids are appended; present ids removed)
///
/// Output:
/// - Persists the favorites list, rebuilds the derived sections so the
///   favorites section reflects the change, and re-applies the current
///   search filter to the rebuilt view.
pub fn toggle_favorite(app: &mut AppState, id: &str) {
    if let Some(pos) = app.favorites.iter().position(|f| f == id) {
        app.favorites.remove(pos);
    } else {
        app.favorites.push(id.to_string());
    }
    persist::save_favorites(app);
    super::rebuild_derived_sections(app);
    super::apply_search(app);
}

/// What: Move `id` to the front of the recently-used list.
///
/// Inputs:
/// - `app`: Application state
/// - `id`: Link id that was just used
///
/// Output:
/// - Persists the recently-used list. The on-screen recent section is
///   deliberately not rebuilt here; it refreshes on the next derived
///   rebuild so an in-progress navigation is not disrupted.
///
/// Details:
/// - The LRU cache de-duplicates (an existing entry moves to the front)
///   and evicts the oldest entry beyond [`crate::state::RECENT_CAPACITY`].
pub fn record_usage(app: &mut AppState, id: &str) {
    app.recent.put(id.to_string(), ());
    persist::save_recent(app);
}

/// What: Flip the collapsed state of the section at `section_idx`.
///
/// Inputs:
/// - `app`: Application state
/// - `section_idx`: Index into `app.sections`
///
/// Output:
/// - Toggles the section's visual flag, updates the collapsed list, and
///   persists it. Out-of-range indices and sections without an id are
///   no-ops.
pub fn toggle_collapse(app: &mut AppState, section_idx: usize) {
    let Some(section) = app.sections.get_mut(section_idx) else {
        return;
    };
    if section.id.is_empty() {
        return;
    }
    section.collapsed = !section.collapsed;
    let id = section.id.clone();
    if let Some(pos) = app.collapsed.iter().position(|c| *c == id) {
        app.collapsed.remove(pos);
    } else {
        app.collapsed.push(id);
    }
    persist::save_collapsed(app);
}

/// What: Expand every section and clear the collapsed list.
pub fn expand_all(app: &mut AppState) {
    app.collapsed.clear();
    for section in &mut app.sections {
        section.collapsed = false;
    }
    persist::save_collapsed(app);
}

/// What: Collapse every currently present section (derived and static)
/// and record all their ids in the collapsed list.
pub fn collapse_all(app: &mut AppState) {
    app.collapsed = app.sections.iter().map(|s| s.id.clone()).collect();
    for section in &mut app.sections {
        section.collapsed = true;
    }
    persist::save_collapsed(app);
}
