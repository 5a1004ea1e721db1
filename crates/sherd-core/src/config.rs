//! Taxonomy configuration overrides.
//!
//! A configuration document is a JSON object with one optional member per
//! keyword category plus an optional place table:
//!
//! ```json
//! {
//!   "color": {"blue and white": ["blue", "qinghua"]},
//!   "production": {"delft": ["delft", "delfts"]},
//!   "place_normalization": {"belgium": ["belgium", "belgique"]}
//! }
//! ```
//!
//! Every present member replaces its category wholesale; absent members keep
//! the built-in vocabulary.
//!
//! # Example
//!
//! ```
//! use sherd_core::config::TaxonomyConfig;
//! use sherd_core::taxonomy::{Category, KeywordTaxonomy};
//!
//! let config = TaxonomyConfig::from_json_str(r#"{"shape": {"vase": ["vase", "gu"]}}"#).unwrap();
//! let taxonomy = KeywordTaxonomy::with_config(&config).unwrap();
//! assert_eq!(taxonomy.keys(Category::Shape), vec!["vase"]);
//! ```

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::defaults::TAXONOMY_PATH_ENV;
use crate::error::Result;
use crate::taxonomy::{Category, KeywordSet};

/// Per-category vocabulary overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxonomyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<KeywordSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration_themes: Option<KeywordSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<KeywordSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<KeywordSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<KeywordSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glaze: Option<KeywordSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<KeywordSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<KeywordSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_normalization: Option<KeywordSet>,
}

impl TaxonomyConfig {
    /// Parse a configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        info!(
            subsystem = "taxonomy",
            component = "config",
            op = "load",
            path = %path.display(),
            "Loaded taxonomy configuration"
        );
        Ok(config)
    }

    /// Load the file named by `SHERD_TAXONOMY_PATH`, if the variable is set.
    pub fn from_env() -> Result<Option<Self>> {
        match Self::env_path() {
            Some(path) => Self::from_file(&path).map(Some),
            None => {
                debug!(
                    subsystem = "taxonomy",
                    component = "config",
                    "{} not set, using built-in vocabulary",
                    TAXONOMY_PATH_ENV
                );
                Ok(None)
            }
        }
    }

    fn env_path() -> Option<PathBuf> {
        env::var(TAXONOMY_PATH_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Override for one category, if present.
    pub fn category(&self, category: Category) -> Option<&KeywordSet> {
        match category {
            Category::Color => self.color.as_ref(),
            Category::DecorationTheme => self.decoration_themes.as_ref(),
            Category::Shape => self.shape.as_ref(),
            Category::Function => self.function.as_ref(),
            Category::Material => self.material.as_ref(),
            Category::Glaze => self.glaze.as_ref(),
            Category::ProductionPlace => self.production.as_ref(),
            Category::Period => self.period.as_ref(),
        }
    }

    /// Set the override for one category.
    pub fn set_category(&mut self, category: Category, set: KeywordSet) {
        let slot = match category {
            Category::Color => &mut self.color,
            Category::DecorationTheme => &mut self.decoration_themes,
            Category::Shape => &mut self.shape,
            Category::Function => &mut self.function,
            Category::Material => &mut self.material,
            Category::Glaze => &mut self.glaze,
            Category::ProductionPlace => &mut self.production,
            Category::Period => &mut self.period,
        };
        *slot = Some(set);
    }

    /// True when no override is present.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.category(*c).is_none())
            && self.place_normalization.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let config = TaxonomyConfig::from_json_str("{}").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_unknown_member_is_rejected() {
        let err = TaxonomyConfig::from_json_str(r#"{"texture": {}}"#).unwrap_err();
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_malformed_keyword_list_is_rejected() {
        assert!(TaxonomyConfig::from_json_str(r#"{"color": {"red": "red"}}"#).is_err());
    }

    #[test]
    fn test_category_accessors() {
        let mut config = TaxonomyConfig::default();
        config.set_category(
            Category::ProductionPlace,
            KeywordSet::from_pairs(&[("faenza", &["faenza"])]),
        );
        assert!(config.category(Category::ProductionPlace).is_some());
        assert!(config.category(Category::Color).is_none());
        assert!(!config.is_empty());

        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"production\""));
        assert_eq!(TaxonomyConfig::from_json_str(&json).unwrap(), config);
    }
}
