//! Content catalog
//!
//! Ordered categories of [`Content`], loaded from a JSON object whose keys
//! are category keys and whose values are arrays of entries. Key order in
//! the file is row order on the page. Malformed fields inside an entry read
//! as missing rather than failing the load.

mod entry;
mod query;

pub use query::{format_duration, genre_list, is_searchable};

use std::path::Path;

use marquee_contracts::catalog_like::CatalogSource;
use marquee_model::{CategoryKey, Content};
use tracing::{debug, info};

use crate::error::CatalogError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<(CategoryKey, Vec<Content>)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category, replacing the items of an existing one in place.
    pub fn insert(&mut self, key: CategoryKey, items: Vec<Content>) {
        match self.categories.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = items,
            None => self.categories.push((key, items)),
        }
    }

    pub fn with_category(mut self, key: CategoryKey, items: Vec<Content>) -> Self {
        self.insert(key, items);
        self
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let serde_json::Value::Object(map) = value else {
            return Err(CatalogError::NotAnObject);
        };

        let mut catalog = Catalog::new();
        for (raw_key, entries) in map {
            let key = CategoryKey::new(raw_key.as_str())?;
            let entries: Vec<serde_json::Value> =
                serde_json::from_value(entries).map_err(|source| {
                    CatalogError::InvalidCategory {
                        category: raw_key.clone(),
                        source,
                    }
                })?;
            let items = entry::decode_entries(&key, entries);
            debug!(category = %key, items = items.len(), "loaded category");
            catalog.insert(key, items);
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| {
            CatalogError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Categories in row order.
    pub fn categories(&self) -> impl Iterator<Item = (&CategoryKey, &[Content])> {
        self.categories.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl CatalogSource for Catalog {
    fn category_keys(&self) -> Vec<&CategoryKey> {
        self.categories.iter().map(|(k, _)| k).collect()
    }

    fn items(&self, key: &CategoryKey) -> Option<&[Content]> {
        self.categories
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_model::ContentId;

    const SAMPLE: &str = r#"{
        "trending": [
            {"id": 1, "title": "Stranger Things", "genres": "Sci-Fi, Horror"},
            {"id": 2, "title": "Wednesday", "badge": "new"}
        ],
        "popular": [{"id": 3}],
        "top10": [{"id": 1, "title": "Stranger Things", "badge": "top10", "rank": 1}]
    }"#;

    #[test]
    fn preserves_category_order() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let keys: Vec<&str> =
            catalog.category_keys().iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["trending", "popular", "top10"]);
        assert_eq!(catalog.items(&CategoryKey::trending()).unwrap().len(), 2);
    }

    #[test]
    fn find_by_id_takes_first_match() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let found = catalog.find_by_id(ContentId(1)).unwrap();
        assert_eq!(found.rank, None);
        assert!(catalog.find_by_id(ContentId(99)).is_none());
    }

    #[test]
    fn rejects_non_object_roots() {
        assert!(matches!(
            Catalog::from_json_str("[1, 2]"),
            Err(CatalogError::NotAnObject)
        ));
        assert!(matches!(
            Catalog::from_json_str(r#"{"trending": {"id": 1}}"#),
            Err(CatalogError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn bad_fields_fall_back_to_defaults() {
        let catalog = Catalog::from_json_str(
            r#"{"trending": [
                {"id": 1, "title": "Good", "match": 97},
                {"id": 2, "match": 97.5},
                {"id": 3, "title": 42, "year": "2020"},
                {"title": "no id"}
            ]}"#,
        )
        .unwrap();

        let items = catalog.items(&CategoryKey::trending()).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].match_or_default(), 97);
        assert_eq!(items[1].match_or_default(), 0);
        assert_eq!(items[2].title_or_default(), "Unknown Title");
        assert_eq!(items[2].year, None);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut catalog = Catalog::new()
            .with_category(CategoryKey::trending(), vec![Content::new(1u64, "a")])
            .with_category(CategoryKey::popular(), vec![]);
        catalog.insert(CategoryKey::trending(), vec![]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.items(&CategoryKey::trending()).unwrap().is_empty());
    }
}
