//! # Reference Data
//!
//! Loads the `source` and `category` pick lists once when the form mounts.
//!
//! The two reads are independent: each lands in its own slot whichever
//! finishes first, and a failed read leaves its slot empty without touching
//! the other one. Failures are never shown to the user, the picker simply
//! offers no options.

use shared::{Category, Source};
use tracing::debug;

use crate::storage::ReferenceStorage;

/// Both pick lists. `None` means the read failed (or has not finished yet).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    pub sources: Option<Vec<Source>>,
    pub categories: Option<Vec<Category>>,
}

impl ReferenceData {
    /// `(id, label)` pairs for the source picker
    pub fn source_options(&self) -> Vec<(String, String)> {
        self.sources
            .iter()
            .flatten()
            .map(|source| (source.id.clone(), source.option_label()))
            .collect()
    }

    /// `(id, label)` pairs for the category picker
    pub fn category_options(&self) -> Vec<(String, String)> {
        self.categories
            .iter()
            .flatten()
            .map(|category| (category.id.clone(), category.option_label()))
            .collect()
    }
}

#[derive(Clone)]
pub struct ReferenceDataLoader<S> {
    store: S,
}

impl<S: ReferenceStorage> ReferenceDataLoader<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn load_sources(&self) -> Option<Vec<Source>> {
        match self.store.list_sources().await {
            Ok(sources) => {
                debug!("loaded {} sources", sources.len());
                Some(sources)
            }
            Err(e) => {
                debug!("source list unavailable: {}", e);
                None
            }
        }
    }

    pub async fn load_categories(&self) -> Option<Vec<Category>> {
        match self.store.list_categories().await {
            Ok(categories) => {
                debug!("loaded {} categories", categories.len());
                Some(categories)
            }
            Err(e) => {
                debug!("category list unavailable: {}", e);
                None
            }
        }
    }

    /// Run both reads concurrently and collect whatever came back
    pub async fn load(&self) -> ReferenceData {
        let (sources, categories) = futures::join!(self.load_sources(), self.load_categories());
        ReferenceData {
            sources,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoreError;
    use crate::storage::MemoryStore;
    use shared::Table;

    fn chase() -> Source {
        Source {
            id: "s1".to_string(),
            source_type: "bank".to_string(),
            name: "Chase".to_string(),
        }
    }

    fn category(id: &str, kind: &str) -> Category {
        Category {
            id: id.to_string(),
            category_type: kind.to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_fills_both_lists() {
        let store = MemoryStore::new()
            .with_sources(vec![chase()])
            .with_categories(vec![category("c1", "food"), category("c2", "rent")]);
        let loader = ReferenceDataLoader::new(store);

        let data = loader.load().await;

        assert_eq!(data.sources, Some(vec![chase()]));
        assert_eq!(data.categories.as_ref().map(Vec::len), Some(2));
        assert_eq!(
            data.category_options(),
            vec![
                ("c1".to_string(), "food".to_string()),
                ("c2".to_string(), "rent".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_one_source_and_no_categories_gives_no_category_options() {
        let store = MemoryStore::new().with_sources(vec![chase()]);
        let loader = ReferenceDataLoader::new(store);

        let data = loader.load().await;

        assert_eq!(data.sources.as_ref().map(Vec::len), Some(1));
        assert_eq!(data.categories, Some(vec![]));
        assert_eq!(
            data.source_options(),
            vec![("s1".to_string(), "bank:Chase".to_string())]
        );
        assert!(data.category_options().is_empty());
    }

    #[tokio::test]
    async fn test_failed_source_read_leaves_categories_alone() {
        let store = MemoryStore::new()
            .with_sources(vec![chase()])
            .with_categories(vec![category("c1", "food")])
            .failing(Table::Source, StoreError::Network("offline".to_string()));
        let loader = ReferenceDataLoader::new(store);

        let data = loader.load().await;

        assert_eq!(data.sources, None);
        assert!(data.source_options().is_empty());
        assert_eq!(data.categories, Some(vec![category("c1", "food")]));
    }

    #[tokio::test]
    async fn test_failed_category_read_leaves_sources_alone() {
        let store = MemoryStore::new()
            .with_sources(vec![chase()])
            .failing(Table::Category, StoreError::rejected("permission denied"));
        let loader = ReferenceDataLoader::new(store);

        assert_eq!(loader.load_sources().await, Some(vec![chase()]));
        assert_eq!(loader.load_categories().await, None);
    }
}
