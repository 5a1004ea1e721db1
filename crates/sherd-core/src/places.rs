//! Place-name normalization.
//!
//! Place fields in catalogue exports are compound, multilingual, and often
//! name the holding museum rather than the production site. Normalization
//! filters out institution labels, then resolves the rest to a stable
//! lower-case canonical name by first-match substring lookup.

use tracing::trace;

use crate::defaults::PLACE_MAX_LEN;
use crate::error::{Error, Result};
use crate::taxonomy::KeywordSet;

/// Substrings marking an institution or manufactory label rather than a place.
pub const INSTITUTION_MARKERS: &[&str] = &[
    "museum",
    "gallery",
    "collection",
    "hallwyl",
    "herstellung",
    "manufacture",
];

/// City tags folded into their country tag.
pub const CITY_FOLDS: &[(&str, &str)] = &[("brussels", "belgium")];

/// True when `lowered` carries an institution marker.
pub fn is_institution_label(lowered: &str) -> bool {
    INSTITUTION_MARKERS.iter().any(|m| lowered.contains(m))
}

/// Apply [`CITY_FOLDS`] to a canonical name.
pub fn fold_city(place: &str) -> &str {
    CITY_FOLDS
        .iter()
        .find(|(city, _)| *city == place)
        .map(|(_, country)| *country)
        .unwrap_or(place)
}

/// Canonical place name -> language variants, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceNormalizationTable {
    variants: KeywordSet,
}

impl PlaceNormalizationTable {
    /// Wrap a variant set known to be valid (the built-in table).
    pub(crate) fn new(variants: KeywordSet) -> Self {
        Self { variants }
    }

    /// Validate and wrap a variant set.
    ///
    /// Canonical names must be lower-case ASCII identifiers
    /// (`[a-z0-9_]`, e.g. `united_kingdom`) since the rest of the system
    /// keys on them.
    pub fn try_new(variants: KeywordSet) -> Result<Self> {
        variants.validate("place_normalization")?;
        for key in variants.keys() {
            let valid = key
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
            if !valid {
                return Err(Error::Config(format!(
                    "canonical place name '{}' must be lower-case ASCII",
                    key
                )));
            }
        }
        Ok(Self {
            variants: variants.normalized(),
        })
    }

    pub fn variants(&self) -> &KeywordSet {
        &self.variants
    }

    /// Resolve `raw` to a canonical place name.
    ///
    /// Returns `None` for blank input, institution labels, and unresolved
    /// strings longer than [`PLACE_MAX_LEN`]. Lookup order:
    /// 1. first variant of this table contained in the lower-cased input,
    /// 2. first keyword of `production` contained in the input,
    /// 3. the trimmed, lower-cased input itself.
    ///
    /// The result goes through [`fold_city`], so `"Bruxelles"` yields
    /// `"belgium"`.
    pub fn normalize(&self, raw: &str, production: &KeywordSet) -> Option<String> {
        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }
        if is_institution_label(&lowered) {
            trace!(
                subsystem = "taxonomy",
                component = "places",
                place = %lowered,
                "Discarded institution label"
            );
            return None;
        }

        let resolved = first_containing(&self.variants, &lowered)
            .or_else(|| first_containing(production, &lowered));

        let place = match resolved {
            Some(key) => key.to_string(),
            None if lowered.chars().count() > PLACE_MAX_LEN => return None,
            None => lowered,
        };
        Some(fold_city(&place).to_string())
    }
}

fn first_containing<'a>(set: &'a KeywordSet, lowered: &str) -> Option<&'a str> {
    set.iter()
        .find(|entry| entry.keywords.iter().any(|k| lowered.contains(k.as_str())))
        .map(|entry| entry.key.as_str())
}

#[cfg(test)]
mod tests {
    use crate::taxonomy::{Category, KeywordTaxonomy};

    use super::*;

    #[test]
    fn test_institution_labels_fail_closed() {
        let taxonomy = KeywordTaxonomy::new();
        assert_eq!(taxonomy.normalize_place("Vienna Museum Collection"), None);
        assert_eq!(taxonomy.normalize_place("Hallwyl Museum, Stockholm"), None);
        assert_eq!(taxonomy.normalize_place("Porzellan-Manufacture"), None);
        assert_eq!(taxonomy.normalize_place("   "), None);
    }

    #[test]
    fn test_multilingual_variants() {
        let taxonomy = KeywordTaxonomy::new();
        assert_eq!(taxonomy.normalize_place("Bruxelles").as_deref(), Some("belgium"));
        assert_eq!(taxonomy.normalize_place("Brüssel").as_deref(), Some("belgium"));
        assert_eq!(taxonomy.normalize_place("Kinijos").as_deref(), Some("china"));
        assert_eq!(taxonomy.normalize_place("中国").as_deref(), Some("china"));
        assert_eq!(taxonomy.normalize_place("Pays-Bas").as_deref(), Some("netherlands"));
        assert_eq!(taxonomy.normalize_place("Wien").as_deref(), Some("vienna"));
    }

    #[test]
    fn test_falls_back_to_production_keywords() {
        let taxonomy = KeywordTaxonomy::new();
        assert_eq!(
            taxonomy.normalize_place("Jingdezhen, Jiangxi").as_deref(),
            Some("jingdezhen")
        );
        assert_eq!(taxonomy.normalize_place("Delft").as_deref(), Some("delft"));
        assert_eq!(taxonomy.normalize_place("Antwerpen").as_deref(), Some("antwerp"));
    }

    #[test]
    fn test_unresolved_input_is_returned_lowercased() {
        let taxonomy = KeywordTaxonomy::new();
        assert_eq!(taxonomy.normalize_place("  Faenza ").as_deref(), Some("faenza"));
        let long = "x".repeat(PLACE_MAX_LEN + 1);
        assert_eq!(taxonomy.normalize_place(&long), None);
        let exact = "x".repeat(PLACE_MAX_LEN);
        assert_eq!(taxonomy.normalize_place(&exact), Some(exact));
    }

    #[test]
    fn test_first_declared_variant_wins() {
        let taxonomy = KeywordTaxonomy::new();
        // "chinese" sits in the china entry, which is declared before japan.
        assert_eq!(
            taxonomy.normalize_place("Chinese or Japan").as_deref(),
            Some("china")
        );
    }

    #[test]
    fn test_canonical_names_are_stable() {
        let taxonomy = KeywordTaxonomy::new();
        let canonical: Vec<String> = taxonomy
            .places()
            .variants()
            .keys()
            .chain(taxonomy.category(Category::ProductionPlace).keys())
            .map(|k| fold_city(k).to_string())
            .collect();
        for name in canonical {
            let once = taxonomy.normalize_place(&name);
            assert_eq!(once.as_deref(), Some(name.as_str()), "{}", name);
            assert_eq!(taxonomy.normalize_place(once.as_deref().unwrap()), once);
        }
    }

    #[test]
    fn test_try_new_rejects_non_canonical_names() {
        let set = KeywordSet::from_pairs(&[("Delft", &["delft"])]);
        assert!(PlaceNormalizationTable::try_new(set).is_err());
        let set = KeywordSet::from_pairs(&[("faenza", &["Faenza", "faventia"])]);
        let table = PlaceNormalizationTable::try_new(set).unwrap();
        assert_eq!(
            table.variants().get("faenza").unwrap(),
            &["faenza".to_string(), "faventia".to_string()][..]
        );
    }

    #[test]
    fn test_fold_city() {
        assert_eq!(fold_city("brussels"), "belgium");
        assert_eq!(fold_city("antwerp"), "antwerp");
    }
}
