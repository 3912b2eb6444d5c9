//! Flattened row view of the filtered sections, plus cursor movement.

use crate::state::{AppState, Row};

/// What: Flatten the filtered sections into selectable rows.
///
/// Inputs:
/// - `app`: Application state providing sections and the visibility set
///
/// Output:
/// - One `Header` row per section with at least one visible link,
///   followed by that section's visible `Link` rows unless the section
///   is collapsed.
#[must_use]
pub fn visible_rows(app: &AppState) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    for (si, section) in app.sections.iter().enumerate() {
        let visible: Vec<usize> = section
            .links
            .iter()
            .enumerate()
            .filter(|(_, id)| app.visible_ids.contains(*id))
            .map(|(li, _)| li)
            .collect();
        if visible.is_empty() {
            continue;
        }
        rows.push(Row::Header(si));
        if !section.collapsed {
            for li in visible {
                rows.push(Row::Link { section: si, link: li });
            }
        }
    }
    rows
}

/// The row currently under the cursor, if any.
#[must_use]
pub fn selected_row(app: &AppState) -> Option<Row> {
    visible_rows(app).get(app.selected).copied()
}

/// Move the cursor by `delta` rows, clamped to the row view.
pub fn move_selection(app: &mut AppState, delta: i64) {
    let len = visible_rows(app).len();
    if len == 0 {
        app.selected = 0;
        app.list_state.select(None);
        return;
    }
    let current = i64::try_from(app.selected).unwrap_or(0);
    let last = i64::try_from(len - 1).unwrap_or(0);
    let next = (current + delta).clamp(0, last);
    app.selected = usize::try_from(next).unwrap_or(0);
    app.list_state.select(Some(app.selected));
}

/// Clamp the cursor after the row view changed shape (filtering,
/// rebuilds, collapse toggles).
pub fn clamp_selection(app: &mut AppState) {
    let len = visible_rows(app).len();
    if len == 0 {
        app.selected = 0;
        app.list_state.select(None);
    } else {
        app.selected = app.selected.min(len - 1);
        app.list_state.select(Some(app.selected));
    }
}
