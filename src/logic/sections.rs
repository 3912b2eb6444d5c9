//! Derived sections and collapse-state synchronization.

use crate::state::{AppState, LinkRecord, Section, SectionKind};

/// Section id of the derived recently-used section.
pub const RECENT_SECTION_ID: &str = "recent";
/// Section id of the derived favorites section.
pub const FAVORITES_SECTION_ID: &str = "favorites";

/// Keep only ids that resolve against the record source.
fn resolve_ids(records: &[LinkRecord], ids: &[String]) -> Vec<String> {
    ids.iter()
        .filter(|id| records.iter().any(|r| &r.id == *id))
        .cloned()
        .collect()
}

/// What: Rebuild the recently-used and favorites sections from their
/// backing lists.
///
/// Inputs:
/// - `app`: Application state providing the lists and the record source
///
/// Output:
/// - Replaces the derived prefix of `app.sections` (recent first, then
///   favorites, then the untouched static sections) and re-applies the
///   persisted collapse state so rebuilt sections inherit it.
///
/// Details:
/// - A derived section is present iff its backing list is non-empty; ids
///   with no matching record are dropped from the section body without
///   affecting presence.
pub fn rebuild_derived_sections(app: &mut AppState) {
    app.sections.retain(|s| s.kind == SectionKind::Static);

    let mut derived: Vec<Section> = Vec::new();
    let recent_ids = app.recent_ids();
    if !recent_ids.is_empty() {
        derived.push(Section {
            id: RECENT_SECTION_ID.to_string(),
            title: "Recently used".to_string(),
            kind: SectionKind::Recent,
            links: resolve_ids(&app.records, &recent_ids),
            collapsed: false,
        });
    }
    if !app.favorites.is_empty() {
        derived.push(Section {
            id: FAVORITES_SECTION_ID.to_string(),
            title: "Favorites".to_string(),
            kind: SectionKind::Favorites,
            links: resolve_ids(&app.records, &app.favorites),
            collapsed: false,
        });
    }
    app.sections.splice(0..0, derived);

    // Newly created sections must inherit the persisted collapse state.
    apply_collapse_state(app);
}

/// What: Synchronize every section's visual collapsed flag with the
/// collapsed-category list.
///
/// Inputs:
/// - `app`: Application state providing sections and the collapsed list
///
/// Output:
/// - Sets `collapsed` on each section; idempotent, safe to call after any
///   operation that creates sections.
pub fn apply_collapse_state(app: &mut AppState) {
    for section in &mut app.sections {
        section.collapsed =
            !section.id.is_empty() && app.collapsed.iter().any(|c| c == &section.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn record(id: &str) -> LinkRecord {
        LinkRecord {
            id: id.to_string(),
            label: id.to_uppercase(),
            url: format!("https://{id}.example"),
            search_text: id.to_string(),
            search_alias: String::new(),
        }
    }

    fn static_section(id: &str, links: &[&str]) -> Section {
        Section {
            id: id.to_string(),
            title: id.to_uppercase(),
            kind: SectionKind::Static,
            links: links.iter().map(|s| (*s).to_string()).collect(),
            collapsed: false,
        }
    }

    fn new_app() -> AppState {
        let mut app = AppState::default();
        app.records = vec![record("a"), record("b"), record("c")];
        app.sections = vec![static_section("tools", &["a", "b", "c"])];
        app
    }

    #[test]
    /// What: Derived sections precede static ones, recent before favorites.
    fn derived_sections_order_and_presence() {
        let mut app = new_app();
        app.favorites = vec!["b".to_string()];
        app.recent.put("a".to_string(), ());
        rebuild_derived_sections(&mut app);
        let ids: Vec<&str> = app.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![RECENT_SECTION_ID, FAVORITES_SECTION_ID, "tools"]);
    }

    #[test]
    /// What: Sections with an empty backing list are omitted entirely.
    fn empty_backing_lists_produce_no_sections() {
        let mut app = new_app();
        rebuild_derived_sections(&mut app);
        let ids: Vec<&str> = app.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["tools"]);
    }

    #[test]
    /// What: Ids with no matching record are dropped from the body while
    /// the section itself stays present.
    fn unresolved_ids_are_dropped_silently() {
        let mut app = new_app();
        app.favorites = vec!["ghost".to_string(), "b".to_string()];
        rebuild_derived_sections(&mut app);
        let favorites = &app.sections[0];
        assert_eq!(favorites.id, FAVORITES_SECTION_ID);
        assert_eq!(favorites.links, vec!["b".to_string()]);
    }

    #[test]
    /// What: Rebuilt sections inherit the persisted collapse state.
    fn rebuilt_sections_inherit_collapse_state() {
        let mut app = new_app();
        app.collapsed = vec![FAVORITES_SECTION_ID.to_string()];
        app.favorites = vec!["a".to_string()];
        rebuild_derived_sections(&mut app);
        assert!(app.sections[0].collapsed);
        assert!(!app.sections[1].collapsed);
    }

    #[test]
    /// What: apply_collapse_state is idempotent and covers every section.
    fn apply_collapse_state_idempotent() {
        let mut app = new_app();
        app.collapsed = vec!["tools".to_string()];
        apply_collapse_state(&mut app);
        apply_collapse_state(&mut app);
        assert!(app.sections[0].collapsed);
        app.collapsed.clear();
        apply_collapse_state(&mut app);
        assert!(!app.sections[0].collapsed);
    }
}
