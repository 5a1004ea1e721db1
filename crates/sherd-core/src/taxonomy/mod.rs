//! Keyword taxonomy: the domain vocabulary driving every extractor.
//!
//! The taxonomy maps `category -> canonical key -> surface forms`. Keys and
//! keywords keep their declaration order because several lookups are
//! first-match-wins, and a different iteration order would change results.
//!
//! A [`KeywordTaxonomy`] is a plain owned value. Sharing it between concurrent
//! extraction calls goes through [`TaxonomyStore`], which hands out frozen
//! `Arc` snapshots and applies mutations copy-on-write.

mod store;
mod vocabulary;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::chronology::{DynastyRange, DynastyTable};
use crate::config::TaxonomyConfig;
use crate::error::{Error, Result};
use crate::places::PlaceNormalizationTable;

pub use store::TaxonomyStore;

// =============================================================================
// CATEGORY
// =============================================================================

/// Keyword categories held by the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Color,
    DecorationTheme,
    Shape,
    Function,
    Material,
    Glaze,
    ProductionPlace,
    Period,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 8] = [
        Category::Color,
        Category::DecorationTheme,
        Category::Shape,
        Category::Function,
        Category::Material,
        Category::Glaze,
        Category::ProductionPlace,
        Category::Period,
    ];

    /// Field name used for this category in taxonomy configuration files.
    pub fn config_key(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::DecorationTheme => "decoration_themes",
            Self::Shape => "shape",
            Self::Function => "function",
            Self::Material => "material",
            Self::Glaze => "glaze",
            Self::ProductionPlace => "production",
            Self::Period => "period",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color => write!(f, "color"),
            Self::DecorationTheme => write!(f, "decoration_theme"),
            Self::Shape => write!(f, "shape"),
            Self::Function => write!(f, "function"),
            Self::Material => write!(f, "material"),
            Self::Glaze => write!(f, "glaze"),
            Self::ProductionPlace => write!(f, "production_place"),
            Self::Period => write!(f, "period"),
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "color" | "colour" => Ok(Self::Color),
            "decoration_theme" | "decoration_themes" | "decoration" => Ok(Self::DecorationTheme),
            "shape" => Ok(Self::Shape),
            "function" => Ok(Self::Function),
            "material" => Ok(Self::Material),
            "glaze" => Ok(Self::Glaze),
            "production_place" | "production" => Ok(Self::ProductionPlace),
            "period" => Ok(Self::Period),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

// =============================================================================
// KEYWORD SET
// =============================================================================

/// One canonical key and its surface forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub key: String,
    pub keywords: Vec<String>,
}

/// Ordered `key -> keywords` mapping for one category.
///
/// Serializes as a JSON object whose member order is the declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    entries: Vec<KeywordEntry>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from static `(key, keywords)` pairs.
    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Self {
        let mut set = Self::new();
        for (key, keywords) in pairs {
            set.insert(*key, keywords.iter().map(|k| k.to_string()).collect());
        }
        set
    }

    /// Insert or overwrite a key, keeping its original position on overwrite.
    pub fn insert(&mut self, key: impl Into<String>, keywords: Vec<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.keywords = keywords,
            None => self.entries.push(KeywordEntry { key, keywords }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.keywords.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add keywords under `key`, creating the key if needed.
    ///
    /// Keywords are trimmed and lower-cased; blanks and keywords already
    /// listed under the key are skipped.
    pub fn add(&mut self, key: &str, keywords: &[String]) {
        let idx = match self.entries.iter().position(|e| e.key == key) {
            Some(idx) => idx,
            None => {
                self.entries.push(KeywordEntry {
                    key: key.to_string(),
                    keywords: Vec::new(),
                });
                self.entries.len() - 1
            }
        };
        let list = &mut self.entries[idx].keywords;
        for keyword in keywords {
            let keyword = normalize_keyword(keyword);
            if !keyword.is_empty() && !list.contains(&keyword) {
                list.push(keyword);
            }
        }
    }

    /// Remove keywords from `key`. Missing keys or keywords are ignored.
    pub fn remove(&mut self, key: &str, keywords: &[String]) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            let doomed: Vec<String> = keywords.iter().map(|k| normalize_keyword(k)).collect();
            entry.keywords.retain(|k| !doomed.contains(k));
        }
    }

    /// Check the set before it replaces a live category.
    pub fn validate(&self, category: &str) -> Result<()> {
        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.key.trim().is_empty() {
                return Err(Error::Config(format!("empty key in {}", category)));
            }
            if self.entries[..idx].iter().any(|e| e.key == entry.key) {
                return Err(Error::Config(format!(
                    "duplicate key '{}' in {}",
                    entry.key, category
                )));
            }
            if entry.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(Error::Config(format!(
                    "blank keyword under '{}' in {}",
                    entry.key, category
                )));
            }
        }
        Ok(())
    }

    /// Copy with every keyword trimmed and lower-cased.
    ///
    /// Extraction matches against lower-cased text, so configuration input is
    /// normalized once on the way in.
    pub fn normalized(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|e| KeywordEntry {
                    key: e.key.trim().to_string(),
                    keywords: e.keywords.iter().map(|k| normalize_keyword(k)).collect(),
                })
                .collect(),
        }
    }
}

fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

impl Serialize for KeywordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.keywords)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeywordSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct KeywordSetVisitor;

        impl<'de> Visitor<'de> for KeywordSetVisitor {
            type Value = KeywordSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping keys to lists of keywords")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<KeywordSet, A::Error> {
                let mut set = KeywordSet::new();
                while let Some((key, keywords)) = access.next_entry::<String, Vec<String>>()? {
                    if set.contains_key(&key) {
                        return Err(serde::de::Error::custom(format!("duplicate key '{}'", key)));
                    }
                    set.entries.push(KeywordEntry { key, keywords });
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(KeywordSetVisitor)
    }
}

// =============================================================================
// KEYWORD TAXONOMY
// =============================================================================

/// The full vocabulary: eight keyword categories, the place normalization
/// table, and the dynasty table.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTaxonomy {
    color: KeywordSet,
    decoration_themes: KeywordSet,
    shape: KeywordSet,
    function: KeywordSet,
    material: KeywordSet,
    glaze: KeywordSet,
    production: KeywordSet,
    period: KeywordSet,
    places: PlaceNormalizationTable,
    dynasties: DynastyTable,
    version: u64,
}

/// Built-in vocabulary, assembled on first use.
static BUILTIN: Lazy<KeywordTaxonomy> = Lazy::new(|| KeywordTaxonomy {
    color: vocabulary::colors(),
    decoration_themes: vocabulary::decoration_themes(),
    shape: vocabulary::shapes(),
    function: vocabulary::functions(),
    material: vocabulary::materials(),
    glaze: vocabulary::glazes(),
    production: vocabulary::production_places(),
    period: vocabulary::periods(),
    places: PlaceNormalizationTable::new(vocabulary::place_variants()),
    dynasties: DynastyTable::default(),
    version: 0,
});

impl Default for KeywordTaxonomy {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl KeywordTaxonomy {
    /// Built-in vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with configuration overrides applied.
    pub fn with_config(config: &TaxonomyConfig) -> Result<Self> {
        let mut taxonomy = Self::default();
        taxonomy.apply_config(config)?;
        Ok(taxonomy)
    }

    /// Monotonic version, bumped by [`TaxonomyStore`] on every published change.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    /// Keyword set for a category.
    pub fn category(&self, category: Category) -> &KeywordSet {
        match category {
            Category::Color => &self.color,
            Category::DecorationTheme => &self.decoration_themes,
            Category::Shape => &self.shape,
            Category::Function => &self.function,
            Category::Material => &self.material,
            Category::Glaze => &self.glaze,
            Category::ProductionPlace => &self.production,
            Category::Period => &self.period,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut KeywordSet {
        match category {
            Category::Color => &mut self.color,
            Category::DecorationTheme => &mut self.decoration_themes,
            Category::Shape => &mut self.shape,
            Category::Function => &mut self.function,
            Category::Material => &mut self.material,
            Category::Glaze => &mut self.glaze,
            Category::ProductionPlace => &mut self.production,
            Category::Period => &mut self.period,
        }
    }

    /// Every category the taxonomy holds.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Canonical keys declared for a category.
    pub fn keys(&self, category: Category) -> Vec<&str> {
        self.category(category).keys().collect()
    }

    /// Surface forms listed under a key.
    pub fn keywords(&self, category: Category, key: &str) -> Option<&[String]> {
        self.category(category).get(key)
    }

    pub fn places(&self) -> &PlaceNormalizationTable {
        &self.places
    }

    pub fn dynasties(&self) -> &DynastyTable {
        &self.dynasties
    }

    /// Add keywords under `key`, deduplicating within that key.
    pub fn add_keyword(&mut self, category: Category, key: &str, keywords: &[String]) {
        self.category_mut(category).add(key, keywords);
    }

    /// Remove keywords from `key`; absent keys or keywords are a no-op.
    pub fn remove_keyword(&mut self, category: Category, key: &str, keywords: &[String]) {
        self.category_mut(category).remove(key, keywords);
    }

    /// Swap a whole category. The set is validated first; on error nothing changes.
    pub fn replace_category(&mut self, category: Category, set: KeywordSet) -> Result<()> {
        set.validate(category.config_key())?;
        *self.category_mut(category) = set.normalized();
        Ok(())
    }

    /// Swap the place normalization table after validating canonical names.
    pub fn replace_places(&mut self, variants: KeywordSet) -> Result<()> {
        let table = PlaceNormalizationTable::try_new(variants)?;
        self.places = table;
        Ok(())
    }

    /// Swap the dynasty table.
    pub fn replace_dynasties(&mut self, ranges: Vec<DynastyRange>) -> Result<()> {
        self.dynasties = DynastyTable::try_new(ranges)?;
        Ok(())
    }

    /// Apply every override present in `config`.
    ///
    /// All overrides are validated against a scratch copy before anything is
    /// written back, so a bad entry leaves `self` untouched.
    pub fn apply_config(&mut self, config: &TaxonomyConfig) -> Result<()> {
        let mut scratch = self.clone();
        for category in Category::ALL {
            if let Some(set) = config.category(category) {
                scratch.replace_category(category, set.clone())?;
            }
        }
        if let Some(places) = &config.place_normalization {
            scratch.replace_places(places.clone())?;
        }
        scratch.version = self.version;
        *self = scratch;
        Ok(())
    }

    /// Export the live vocabulary in configuration shape.
    pub fn to_config(&self) -> TaxonomyConfig {
        let mut config = TaxonomyConfig::default();
        for category in Category::ALL {
            config.set_category(category, self.category(category).clone());
        }
        config.place_normalization = Some(self.places.variants().clone());
        config
    }

    /// Resolve a raw place string to a canonical place name.
    ///
    /// See [`PlaceNormalizationTable::normalize`]; the production-place
    /// keywords serve as the second lookup table.
    pub fn normalize_place(&self, raw: &str) -> Option<String> {
        self.places.normalize(raw, &self.production)
    }

    /// Dynasty whose range contains `year`, or `"Unknown"`.
    pub fn dynasty_for_year(&self, year: i32) -> &str {
        self.dynasties.dynasty_for_year(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("color".parse::<Category>().unwrap(), Category::Color);
        assert_eq!(
            "decoration_themes".parse::<Category>().unwrap(),
            Category::DecorationTheme
        );
        assert_eq!(
            "production".parse::<Category>().unwrap(),
            Category::ProductionPlace
        );
        assert!(matches!(
            "texture".parse::<Category>(),
            Err(Error::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_serialization() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
            let parsed: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_defaults_cover_every_category() {
        let taxonomy = KeywordTaxonomy::new();
        for category in Category::ALL {
            assert!(!taxonomy.category(category).is_empty(), "{}", category);
            taxonomy
                .category(category)
                .validate(category.config_key())
                .unwrap();
        }
        assert_eq!(taxonomy.version(), 0);
    }

    #[test]
    fn test_default_keywords_are_lowercase() {
        let taxonomy = KeywordTaxonomy::new();
        for category in Category::ALL {
            for entry in taxonomy.category(category).iter() {
                for keyword in &entry.keywords {
                    assert_eq!(keyword, &keyword.to_lowercase(), "{}/{}", category, entry.key);
                }
            }
        }
    }

    #[test]
    fn test_term_may_appear_under_several_keys() {
        let taxonomy = KeywordTaxonomy::new();
        let faience = "faience".to_string();
        assert!(taxonomy
            .keywords(Category::Glaze, "tin_glaze")
            .unwrap()
            .contains(&faience));
        assert!(taxonomy
            .keywords(Category::ProductionPlace, "delft")
            .unwrap()
            .contains(&faience));
    }

    #[test]
    fn test_add_keyword_deduplicates_and_preserves_order() {
        let mut taxonomy = KeywordTaxonomy::new();
        let before = taxonomy.keywords(Category::Color, "red").unwrap().len();
        taxonomy.add_keyword(
            Category::Color,
            "red",
            &strings(&["Red", "coral red", "coral red", "  "]),
        );
        let after = taxonomy.keywords(Category::Color, "red").unwrap();
        assert_eq!(after.len(), before + 1);
        assert_eq!(after.last().unwrap(), "coral red");
        assert_eq!(after[0], "red");
    }

    #[test]
    fn test_add_keyword_creates_key() {
        let mut taxonomy = KeywordTaxonomy::new();
        taxonomy.add_keyword(Category::Shape, "figurine", &strings(&["figurine", "statuette"]));
        assert_eq!(
            taxonomy.keywords(Category::Shape, "figurine").unwrap(),
            &strings(&["figurine", "statuette"])[..]
        );
        assert_eq!(taxonomy.keys(Category::Shape).last(), Some(&"figurine"));
    }

    #[test]
    fn test_remove_keyword_is_noop_when_absent() {
        let mut taxonomy = KeywordTaxonomy::new();
        let before = taxonomy.clone();
        taxonomy.remove_keyword(Category::Shape, "no_such_key", &strings(&["bowl"]));
        taxonomy.remove_keyword(Category::Shape, "bowl", &strings(&["not-a-keyword"]));
        assert_eq!(taxonomy, before);

        taxonomy.remove_keyword(Category::Shape, "bowl", &strings(&["tea bowl"]));
        assert!(!taxonomy
            .keywords(Category::Shape, "bowl")
            .unwrap()
            .contains(&"tea bowl".to_string()));
    }

    #[test]
    fn test_replace_category_swaps_whole_mapping() {
        let mut taxonomy = KeywordTaxonomy::new();
        let set = KeywordSet::from_pairs(&[("Azure", &["Azure", "sky blue"])]);
        taxonomy.replace_category(Category::Color, set).unwrap();
        assert_eq!(taxonomy.keys(Category::Color), vec!["Azure"]);
        assert_eq!(
            taxonomy.keywords(Category::Color, "Azure").unwrap(),
            &strings(&["azure", "sky blue"])[..]
        );
    }

    #[test]
    fn test_replace_category_rejects_bad_set_without_change() {
        let mut taxonomy = KeywordTaxonomy::new();
        let before = taxonomy.clone();
        let mut set = KeywordSet::new();
        set.insert("ok", strings(&["fine"]));
        set.insert(" ", strings(&["bad"]));
        assert!(taxonomy.replace_category(Category::Shape, set).is_err());
        assert_eq!(taxonomy, before);
    }

    #[test]
    fn test_keyword_set_json_preserves_order() {
        let json = r#"{"zeta": ["z"], "alpha": ["a", "b"]}"#;
        let set: KeywordSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"{"zeta":["z"],"alpha":["a","b"]}"#);
    }

    #[test]
    fn test_keyword_set_json_rejects_duplicate_keys() {
        let json = r#"{"a": ["x"], "a": ["y"]}"#;
        assert!(serde_json::from_str::<KeywordSet>(json).is_err());
    }

    #[test]
    fn test_to_config_round_trips_through_with_config() {
        let mut taxonomy = KeywordTaxonomy::new();
        taxonomy.add_keyword(Category::Glaze, "lustre", &strings(&["lustreware"]));
        let rebuilt = KeywordTaxonomy::with_config(&taxonomy.to_config()).unwrap();
        assert_eq!(rebuilt, taxonomy);
    }
}
