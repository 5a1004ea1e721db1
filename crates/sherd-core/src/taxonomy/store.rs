//! Copy-on-write taxonomy store.
//!
//! Readers take an `Arc` snapshot and keep it for the whole batch. Writers
//! clone the current taxonomy, mutate the clone, and publish it under a new
//! version; a reader never sees a half-applied change.

use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use super::{Category, KeywordSet, KeywordTaxonomy};
use crate::config::TaxonomyConfig;
use crate::error::Result;

/// Shared handle to the live taxonomy.
#[derive(Debug, Clone)]
pub struct TaxonomyStore {
    current: Arc<RwLock<Arc<KeywordTaxonomy>>>,
}

impl Default for TaxonomyStore {
    fn default() -> Self {
        Self::new(KeywordTaxonomy::default())
    }
}

impl TaxonomyStore {
    pub fn new(taxonomy: KeywordTaxonomy) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(taxonomy))),
        }
    }

    /// Built-in vocabulary with configuration overrides applied.
    pub fn from_config(config: &TaxonomyConfig) -> Result<Self> {
        Ok(Self::new(KeywordTaxonomy::with_config(config)?))
    }

    /// Frozen view of the current taxonomy.
    pub fn snapshot(&self) -> Arc<KeywordTaxonomy> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Version of the currently published taxonomy.
    pub fn version(&self) -> u64 {
        self.snapshot().version()
    }

    /// Apply `change` to a private copy and publish it if the change succeeds.
    ///
    /// Returns the new version. On error the published taxonomy is unchanged.
    pub fn update<F>(&self, change: F) -> Result<u64>
    where
        F: FnOnce(&mut KeywordTaxonomy) -> Result<()>,
    {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let mut next = KeywordTaxonomy::clone(&guard);
        change(&mut next)?;
        let version = guard.version() + 1;
        next.set_version(version);
        *guard = Arc::new(next);
        debug!(
            subsystem = "taxonomy",
            component = "store",
            op = "update",
            taxonomy_version = version,
            "Published taxonomy"
        );
        Ok(version)
    }

    pub fn add_keyword(&self, category: Category, key: &str, keywords: &[String]) -> u64 {
        self.infallible(|t| t.add_keyword(category, key, keywords))
    }

    pub fn remove_keyword(&self, category: Category, key: &str, keywords: &[String]) -> u64 {
        self.infallible(|t| t.remove_keyword(category, key, keywords))
    }

    pub fn replace_category(&self, category: Category, set: KeywordSet) -> Result<u64> {
        let version = self.update(|t| t.replace_category(category, set))?;
        info!(
            subsystem = "taxonomy",
            component = "store",
            op = "replace_category",
            category = %category,
            taxonomy_version = version,
            "Replaced taxonomy category"
        );
        Ok(version)
    }

    pub fn apply_config(&self, config: &TaxonomyConfig) -> Result<u64> {
        self.update(|t| t.apply_config(config))
    }

    fn infallible<F>(&self, change: F) -> u64
    where
        F: FnOnce(&mut KeywordTaxonomy),
    {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let mut next = KeywordTaxonomy::clone(&guard);
        change(&mut next);
        let version = guard.version() + 1;
        next.set_version(version);
        *guard = Arc::new(next);
        version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_frozen_across_updates() {
        let store = TaxonomyStore::default();
        let before = store.snapshot();

        let version =
            store.add_keyword(Category::Shape, "figurine", &["figurine".to_string()]);
        assert_eq!(version, 1);

        assert!(before.keywords(Category::Shape, "figurine").is_none());
        assert_eq!(before.version(), 0);
        assert!(store
            .snapshot()
            .keywords(Category::Shape, "figurine")
            .is_some());
    }

    #[test]
    fn test_failed_update_publishes_nothing() {
        let store = TaxonomyStore::default();
        let mut bad = KeywordSet::new();
        bad.insert("", vec!["x".to_string()]);

        assert!(store.replace_category(Category::Color, bad).is_err());
        assert_eq!(store.version(), 0);
        assert!(store.snapshot().keywords(Category::Color, "red").is_some());
    }

    #[test]
    fn test_versions_increase() {
        let store = TaxonomyStore::default();
        store.remove_keyword(Category::Color, "red", &["crimson".to_string()]);
        let v = store
            .replace_category(
                Category::Glaze,
                KeywordSet::from_pairs(&[("lustre", &["lustre"])]),
            )
            .unwrap();
        assert_eq!(v, 2);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let store = TaxonomyStore::default();
        let other = store.clone();
        other.add_keyword(Category::Color, "red", &["vermilion".to_string()]);
        assert_eq!(store.version(), 1);
    }
}
