//! Write-through persistence for the three bookkeeping lists.
//!
//! Each list is stored as one JSON array of string ids. Saves serialize
//! the full list on every mutation; loads happen exactly once at
//! startup. A missing or unreadable file means "empty list" and is never
//! surfaced to the user.

use std::fs;
use std::path::Path;

use crate::state::AppState;

/// Serialize `values` to `path`, logging instead of failing.
fn save_ids(path: &Path, values: &[String], what: &str) {
    match serde_json::to_string(values) {
        Ok(s) => match fs::write(path, &s) {
            Ok(()) => {
                tracing::debug!(
                    path = %path.display(),
                    count = values.len(),
                    "[Persist] wrote {what}"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "[Persist] failed to write {what}"
                );
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "[Persist] failed to serialize {what}");
        }
    }
}

/// Read a JSON id array from `path`; `None` when absent or malformed.
fn load_ids(path: &Path) -> Option<Vec<String>> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(list) => Some(list),
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "[Persist] ignoring unreadable list"
            );
            None
        }
    }
}

/// Persist the favorites list.
pub fn save_favorites(app: &AppState) {
    save_ids(&app.favorites_path, &app.favorites, "favorites");
}

/// Persist the recently-used list, most recent first.
pub fn save_recent(app: &AppState) {
    let values = app.recent_ids();
    save_ids(&app.recent_path, &values, "recently used");
}

/// Persist the collapsed-category list.
pub fn save_collapsed(app: &AppState) {
    save_ids(&app.collapsed_path, &app.collapsed, "collapsed categories");
}

/// What: Load all three lists from disk into `app`.
///
/// Inputs:
/// - `app`: Application state whose list paths are already resolved
///
/// Output:
/// - Populates `favorites`, `recent`, and `collapsed` in place; lists
///   whose file is absent or unparseable stay empty.
///
/// Details:
/// - The recently-used array is stored most-recent-first, so entries are
///   replayed oldest-first into the LRU cache to reproduce the order.
pub fn load_lists(app: &mut AppState) {
    if let Some(list) = load_ids(&app.favorites_path) {
        app.favorites = list;
        tracing::info!(
            path = %app.favorites_path.display(),
            count = app.favorites.len(),
            "loaded favorites"
        );
    }
    if let Some(list) = load_ids(&app.recent_path) {
        for id in list.into_iter().rev() {
            app.recent.put(id, ());
        }
        tracing::info!(
            path = %app.recent_path.display(),
            count = app.recent.len(),
            "loaded recently used"
        );
    }
    if let Some(list) = load_ids(&app.collapsed_path) {
        app.collapsed = list;
        tracing::info!(
            path = %app.collapsed_path.display(),
            count = app.collapsed.len(),
            "loaded collapsed categories"
        );
    }
}
