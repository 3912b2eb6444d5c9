//! Core value types shared across the logic, event, and UI layers.

/// One entry of the static link catalog.
///
/// Built once at startup from the catalog file and never mutated
/// afterwards; every other structure refers to links by `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRecord {
    /// Unique identifier used by the persisted lists.
    pub id: String,
    /// Human-readable label shown on the link row.
    pub label: String,
    /// Navigation target handed to the system opener.
    pub url: String,
    /// Lowercased display text used for search matching.
    pub search_text: String,
    /// Lowercased explicit search alias; empty when the catalog has none.
    pub search_alias: String,
}

/// Origin of a category section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    /// Rebuilt from the recently-used list.
    Recent,
    /// Rebuilt from the favorites list.
    Favorites,
    /// Authored in the catalog file.
    Static,
}

/// One category section as shown on screen.
///
/// Derived sections (`Recent`, `Favorites`) are rebuilt wholesale from
/// their backing lists; static sections live for the whole session.
#[derive(Clone, Debug)]
pub struct Section {
    /// Category identifier, also the key stored in the collapsed list.
    pub id: String,
    /// Header title.
    pub title: String,
    /// Where this section's membership comes from.
    pub kind: SectionKind,
    /// Link ids in display order. For derived sections only ids that
    /// resolved against the catalog are kept.
    pub links: Vec<String>,
    /// Visual collapsed flag, synchronized from the collapsed list.
    pub collapsed: bool,
}

/// Which pane currently receives key input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// The search input field.
    Search,
    /// The sections/links list.
    Links,
}

/// One row of the flattened, search-filtered section view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row {
    /// A section header; the payload indexes into `AppState::sections`.
    Header(usize),
    /// A link row.
    Link {
        /// Index into `AppState::sections`.
        section: usize,
        /// Index into that section's `links`.
        link: usize,
    },
}
