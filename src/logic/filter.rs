//! Search filtering over the link catalog.

use crate::state::AppState;

/// What: Recompute link visibility from the current search input.
///
/// Inputs:
/// - `app`: Application state providing the input text, records, and sections
///
/// Output:
/// - Rewrites `app.visible_ids` (every id when the term is empty, matching
///   ids otherwise), sets `app.no_results`, and clamps the selection to
///   the filtered row view.
///
/// Details:
/// - The term is trimmed and lowercased; a link matches when its
///   lowercased display text or its explicit search alias contains it.
/// - A section counts as hidden when none of its links are visible; the
///   no-results notice shows only for a non-empty term with zero matches
///   across all sections.
pub fn apply_search(app: &mut AppState) {
    let term = app.input.trim().to_lowercase();

    app.visible_ids.clear();
    for record in &app.records {
        let matches = term.is_empty()
            || record.search_text.contains(&term)
            || (!record.search_alias.is_empty() && record.search_alias.contains(&term));
        if matches {
            app.visible_ids.insert(record.id.clone());
        }
    }

    let total_visible: usize = app
        .sections
        .iter()
        .map(|s| s.links.iter().filter(|id| app.visible_ids.contains(*id)).count())
        .sum();
    app.no_results = total_visible == 0 && !term.is_empty();

    super::clamp_selection(app);
}
