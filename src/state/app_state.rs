//! Central `AppState` container.

use lru::LruCache;
use ratatui::widgets::ListState;
use std::{collections::HashSet, num::NonZeroUsize, path::PathBuf};

use crate::state::types::{Focus, LinkRecord, Section};

/// Maximum number of recently-used links to retain (most-recent-first).
pub const RECENT_CAPACITY: usize = 5;

/// What: Provide the non-zero capacity used by the recently-used LRU cache.
///
/// Inputs: None.
///
/// Output:
/// - Non-zero capacity for the recent LRU cache.
///
/// Details:
/// - Uses a const unchecked constructor because the capacity constant is
///   guaranteed to be greater than zero.
#[must_use]
pub const fn recent_capacity() -> NonZeroUsize {
    // SAFETY: `RECENT_CAPACITY` is a non-zero constant.
    unsafe { NonZeroUsize::new_unchecked(RECENT_CAPACITY) }
}

/// Global application state shared by the event and UI layers.
///
/// Mutated in response to input events only. The three bookkeeping lists
/// (favorites, recently used, collapsed categories) are written through
/// to disk by the operations in [`crate::logic`], so their persisted
/// value always equals the in-memory value between events.
#[derive(Debug)]
pub struct AppState {
    /// Current search input text.
    pub input: String,
    /// Which pane receives key input.
    pub focus: Focus,
    /// Static link catalog, immutable for the session.
    pub records: Vec<LinkRecord>,
    /// Sections in presentation order: derived first, then static.
    pub sections: Vec<Section>,
    /// Favorited link ids, insertion-ordered, unique.
    pub favorites: Vec<String>,
    /// Recently-used link ids; iteration order is most-recent-first.
    pub recent: LruCache<String, ()>,
    /// Collapsed category-section ids.
    pub collapsed: Vec<String>,
    /// Link ids matching the current search term (all ids when empty).
    pub visible_ids: HashSet<String>,
    /// Whether the no-results notice is showing.
    pub no_results: bool,
    /// Index of the highlighted row in the flattened section view.
    pub selected: usize,
    /// List selection state for the sections view.
    pub list_state: ListState,
    /// One-line feedback shown in the footer after an action.
    pub status_message: Option<String>,
    /// If `true`, links are logged instead of opened.
    pub dry_run: bool,
    /// Path where the favorites list is persisted as JSON.
    pub favorites_path: PathBuf,
    /// Path where the recently-used list is persisted as JSON.
    pub recent_path: PathBuf,
    /// Path where the collapsed-category list is persisted as JSON.
    pub collapsed_path: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        let lists = crate::theme::lists_dir();
        Self {
            input: String::new(),
            focus: Focus::Search,
            records: Vec::new(),
            sections: Vec::new(),
            favorites: Vec::new(),
            recent: LruCache::new(recent_capacity()),
            collapsed: Vec::new(),
            visible_ids: HashSet::new(),
            no_results: false,
            selected: 0,
            list_state: ListState::default(),
            status_message: None,
            dry_run: false,
            favorites_path: lists.join("favorites.json"),
            recent_path: lists.join("recently_used.json"),
            collapsed_path: lists.join("collapsed_categories.json"),
        }
    }
}

impl AppState {
    /// Look up a catalog record by id.
    #[must_use]
    pub fn link(&self, id: &str) -> Option<&LinkRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Recently-used ids, most recent first.
    #[must_use]
    pub fn recent_ids(&self) -> Vec<String> {
        self.recent.iter().map(|(id, _)| id.clone()).collect()
    }

    /// Whether `id` is currently favorited.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    /// Whether `id` matches the current search term.
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible_ids.contains(id)
    }
}
