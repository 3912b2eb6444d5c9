//! Loading and validation of the static link catalog.
//!
//! The catalog is a TOML file listing categories and their links. It is
//! read once at startup; everything the session shows is derived from it
//! plus the three persisted bookkeeping lists.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::logic::sections::{FAVORITES_SECTION_ID, RECENT_SECTION_ID};
use crate::state::{LinkRecord, Section, SectionKind};

/// Boxed error alias used at the loading boundary.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Starter catalog written on first run so the deck renders something.
const DEFAULT_CATALOG: &str = r#"# linkdeck catalog
#
# Each [[category]] groups [[category.link]] entries. Link ids must be
# unique across the whole file; they are the keys stored in the
# favorites and recently-used lists. The optional `search` field adds
# extra text the search box matches against.

[[category]]
id = "dev"
title = "Development"

[[category.link]]
id = "github"
label = "GitHub"
url = "https://github.com"
search = "git repositories code"

[[category.link]]
id = "crates-io"
label = "crates.io"
url = "https://crates.io"
search = "rust packages registry"

[[category.link]]
id = "docs-rs"
label = "docs.rs"
url = "https://docs.rs"
search = "rust documentation"

[[category]]
id = "news"
title = "News"

[[category.link]]
id = "hn"
label = "Hacker News"
url = "https://news.ycombinator.com"

[[category.link]]
id = "lobsters"
label = "Lobsters"
url = "https://lobste.rs"
"#;

/// Top-level shape of the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    /// Authored categories in display order.
    #[serde(default, rename = "category")]
    categories: Vec<CategoryEntry>,
}

/// One authored category.
#[derive(Debug, Deserialize)]
struct CategoryEntry {
    /// Category identifier (collapse-state key).
    id: String,
    /// Header title.
    title: String,
    /// Links in display order.
    #[serde(default, rename = "link")]
    links: Vec<LinkEntry>,
}

/// One authored link.
#[derive(Debug, Deserialize)]
struct LinkEntry {
    /// Unique link identifier.
    id: String,
    /// Display label.
    label: String,
    /// Navigation target.
    url: String,
    /// Optional extra search text.
    #[serde(default)]
    search: String,
}

/// Result of loading the catalog: the flat record source plus the static
/// sections in authored order.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Flat, de-duplicated link source.
    pub records: Vec<LinkRecord>,
    /// Static sections in authored order.
    pub sections: Vec<Section>,
}

/// What: Load the catalog from `path`, materializing a starter file first
/// when none exists.
///
/// Inputs:
/// - `path`: Resolved catalog location (config dir default or `--catalog`)
///
/// Output:
/// - A [`Catalog`] on success; an error when the file cannot be read or
///   parsed (this is the only startup step that aborts the session).
pub fn load_or_init(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        std::fs::write(path, DEFAULT_CATALOG)?;
        tracing::info!(path = %path.display(), "[Catalog] wrote starter catalog");
    }
    let raw = std::fs::read_to_string(path)?;
    let parsed: CatalogFile = toml::from_str(&raw)?;
    let catalog = build(parsed);
    tracing::info!(
        path = %path.display(),
        links = catalog.records.len(),
        categories = catalog.sections.len(),
        "[Catalog] loaded"
    );
    Ok(catalog)
}

/// Turn the parsed file into records and static sections, dropping
/// duplicate link ids (first occurrence wins) and categories whose id
/// collides with a derived-section id.
fn build(file: CatalogFile) -> Catalog {
    let mut seen: HashSet<String> = HashSet::new();
    let mut records: Vec<LinkRecord> = Vec::new();
    let mut sections: Vec<Section> = Vec::new();

    for category in file.categories {
        if category.id == RECENT_SECTION_ID || category.id == FAVORITES_SECTION_ID {
            tracing::warn!(
                id = %category.id,
                "[Catalog] category id is reserved for a derived section; skipping"
            );
            continue;
        }
        let mut ids: Vec<String> = Vec::with_capacity(category.links.len());
        for link in category.links {
            if !seen.insert(link.id.clone()) {
                tracing::warn!(id = %link.id, "[Catalog] duplicate link id; keeping first");
                continue;
            }
            ids.push(link.id.clone());
            records.push(LinkRecord {
                search_text: link.label.to_lowercase(),
                search_alias: link.search.to_lowercase(),
                id: link.id,
                label: link.label,
                url: link.url,
            });
        }
        sections.push(Section {
            id: category.id,
            title: category.title,
            kind: SectionKind::Static,
            links: ids,
            collapsed: false,
        });
    }

    Catalog { records, sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Catalog {
        build(toml::from_str(raw).unwrap())
    }

    #[test]
    /// What: The embedded starter catalog parses and keeps authored order.
    fn starter_catalog_parses() {
        let catalog = parse(DEFAULT_CATALOG);
        assert_eq!(catalog.sections.len(), 2);
        assert_eq!(catalog.sections[0].id, "dev");
        assert_eq!(catalog.sections[0].links.len(), 3);
        assert_eq!(catalog.records.len(), 5);
        let gh = catalog.records.iter().find(|r| r.id == "github").unwrap();
        assert_eq!(gh.search_text, "github");
        assert!(gh.search_alias.contains("repositories"));
    }

    #[test]
    /// What: Duplicate link ids keep the first occurrence only.
    fn duplicate_ids_keep_first() {
        let catalog = parse(
            r#"
            [[category]]
            id = "a"
            title = "A"
            [[category.link]]
            id = "x"
            label = "First"
            url = "https://first.example"
            [[category.link]]
            id = "x"
            label = "Second"
            url = "https://second.example"
            "#,
        );
        assert_eq!(catalog.records.len(), 1);
        assert_eq!(catalog.records[0].label, "First");
        assert_eq!(catalog.sections[0].links, vec!["x".to_string()]);
    }

    #[test]
    /// What: Categories named after derived sections are skipped.
    fn reserved_category_ids_are_skipped() {
        let catalog = parse(
            r#"
            [[category]]
            id = "favorites"
            title = "Shadowed"
            [[category.link]]
            id = "x"
            label = "X"
            url = "https://x.example"
            "#,
        );
        assert!(catalog.sections.is_empty());
        assert!(catalog.records.is_empty());
    }

    #[test]
    /// What: Search text and alias are lowercased at build time.
    fn search_fields_are_lowercased() {
        let catalog = parse(
            r#"
            [[category]]
            id = "a"
            title = "A"
            [[category.link]]
            id = "x"
            label = "Mixed Case Label"
            url = "https://x.example"
            search = "ALIAS Text"
            "#,
        );
        assert_eq!(catalog.records[0].search_text, "mixed case label");
        assert_eq!(catalog.records[0].search_alias, "alias text");
    }
}
