//! Integration tests for the list bookkeeping and search contract.

use linkdeck::app::persist;
use linkdeck::logic;
use linkdeck::state::{AppState, LinkRecord, RECENT_CAPACITY, Section, SectionKind};

fn record(id: &str, label: &str, alias: &str) -> LinkRecord {
    LinkRecord {
        id: id.to_string(),
        label: label.to_string(),
        url: format!("https://{id}.example"),
        search_text: label.to_lowercase(),
        search_alias: alias.to_lowercase(),
    }
}

/// App with three catalog links in one static section, persisting into `dir`.
fn new_app(dir: &std::path::Path) -> AppState {
    let mut app = AppState::default();
    app.favorites_path = dir.join("favorites.json");
    app.recent_path = dir.join("recently_used.json");
    app.collapsed_path = dir.join("collapsed_categories.json");
    app.records = vec![
        record("a", "Alpha", ""),
        record("b", "Beta", "second letter"),
        record("c", "Gamma", ""),
    ];
    app.sections = vec![Section {
        id: "letters".to_string(),
        title: "Letters".to_string(),
        kind: SectionKind::Static,
        links: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        collapsed: false,
    }];
    logic::apply_search(&mut app);
    app
}

#[test]
fn favorites_follow_toggle_parity() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = new_app(dir.path());
    logic::toggle_favorite(&mut app, "a");
    logic::toggle_favorite(&mut app, "b");
    logic::toggle_favorite(&mut app, "a");
    assert_eq!(app.favorites, vec!["b".to_string()]);
}

#[test]
fn recent_list_caps_and_dedups() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = new_app(dir.path());
    for i in 0..10 {
        logic::record_usage(&mut app, &format!("id{i}"));
    }
    assert_eq!(app.recent_ids().len(), RECENT_CAPACITY);
    logic::record_usage(&mut app, "id7");
    logic::record_usage(&mut app, "id7");
    let ids = app.recent_ids();
    assert_eq!(ids.len(), RECENT_CAPACITY);
    assert_eq!(ids[0], "id7");
    assert_eq!(ids.iter().filter(|i| i.as_str() == "id7").count(), 1);
}

#[test]
fn expand_all_then_apply_leaves_nothing_collapsed() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = new_app(dir.path());
    logic::toggle_collapse(&mut app, 0);
    assert!(app.sections[0].collapsed);
    logic::expand_all(&mut app);
    logic::apply_collapse_state(&mut app);
    assert!(app.sections.iter().all(|s| !s.collapsed));
}

#[test]
fn collapse_all_covers_sections_created_afterwards() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = new_app(dir.path());
    logic::collapse_all(&mut app);
    logic::apply_collapse_state(&mut app);
    assert!(app.sections.iter().all(|s| s.collapsed));

    // A derived section appearing later inherits the state only once the
    // collapse pass runs again over the new set; the favorites id was not
    // in the collapsed list, so it starts expanded.
    logic::toggle_favorite(&mut app, "a");
    let favorites = app
        .sections
        .iter()
        .find(|s| s.id == "favorites")
        .expect("favorites section");
    assert!(!favorites.collapsed);

    // Collapse-all over the enlarged set now includes it.
    logic::collapse_all(&mut app);
    logic::apply_collapse_state(&mut app);
    assert!(app.sections.iter().all(|s| s.collapsed));
    assert!(app.collapsed.contains(&"favorites".to_string()));
}

#[test]
fn search_scenarios_from_three_records() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = new_app(dir.path());

    app.input = String::new();
    logic::apply_search(&mut app);
    assert!(app.is_visible("a") && app.is_visible("b") && app.is_visible("c"));
    assert!(!app.no_results);

    app.input = "xyz".to_string();
    logic::apply_search(&mut app);
    assert!(!app.is_visible("a") && !app.is_visible("b") && !app.is_visible("c"));
    assert!(app.no_results);

    app.input = "alpha".to_string();
    logic::apply_search(&mut app);
    assert!(app.is_visible("a"));
    assert!(!app.is_visible("b") && !app.is_visible("c"));
    assert!(!app.no_results);
}

#[test]
fn persisted_lists_roundtrip_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = new_app(dir.path());
    logic::toggle_favorite(&mut app, "c");
    logic::toggle_favorite(&mut app, "a");
    logic::record_usage(&mut app, "b");
    logic::record_usage(&mut app, "a");
    logic::record_usage(&mut app, "b");
    logic::toggle_collapse(&mut app, 0);

    // Simulated restart: fresh state, same paths, reload from disk.
    let mut restarted = AppState::default();
    restarted.favorites_path = dir.path().join("favorites.json");
    restarted.recent_path = dir.path().join("recently_used.json");
    restarted.collapsed_path = dir.path().join("collapsed_categories.json");
    persist::load_lists(&mut restarted);

    assert_eq!(restarted.favorites, vec!["c".to_string(), "a".to_string()]);
    assert_eq!(
        restarted.recent_ids(),
        vec!["b".to_string(), "a".to_string()]
    );
    assert_eq!(restarted.collapsed, app.collapsed);
}

#[test]
fn usage_does_not_refresh_recent_section_until_next_rebuild() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = new_app(dir.path());
    logic::record_usage(&mut app, "a");
    // The list is updated and persisted, but no recent section exists yet.
    assert!(app.sections.iter().all(|s| s.id != "recent"));

    // The next derived rebuild (here via a favorite toggle) surfaces it.
    logic::toggle_favorite(&mut app, "b");
    let recent = app
        .sections
        .iter()
        .find(|s| s.id == "recent")
        .expect("recent section");
    assert_eq!(recent.links, vec!["a".to_string()]);
}
