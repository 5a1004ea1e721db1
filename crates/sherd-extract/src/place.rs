//! Production place extraction.
//!
//! Places come from three sources: the record's place fields (normalized
//! through the taxonomy), production keywords in the free text, and a few
//! regional phrase patterns. Museum host cities are dropped and the result is
//! ranked with known production centres first.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use sherd_core::defaults::{MAX_PLACES, PLACE_MAX_LEN};
use sherd_core::places::fold_city;
use sherd_core::record::RawItem;
use sherd_core::taxonomy::Category;
use tracing::debug;

use crate::matcher::CompiledTaxonomy;

/// Record fields that may name a place, in lookup order.
pub const PLACE_FIELDS: &[&str] = &[
    "edmPlaceLabel",
    "placeLabel",
    "place",
    "origin",
    "provenance",
    "production",
];

/// Cities that usually name the holding museum, not the maker.
pub const MUSEUM_CITIES: &[&str] = &["vienna", "stockholm", "london", "paris", "new york"];

/// Ranking for output. Places not listed follow in alphabetical order.
pub const PLACE_PRIORITY: &[&str] = &[
    "jingdezhen",
    "longquan",
    "dehua",
    "yixing",
    "jun",
    "ding",
    "cizhou",
    "delft",
    "amsterdam",
    "rotterdam",
    "haarlem",
    "makkum",
    "antwerp",
    "tournai",
    "ghent",
    "china",
    "netherlands",
    "belgium",
    "meissen",
    "sevres",
    "worcester",
    "export",
];

static REGIONAL_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\bdelft(?:ware|se?)?\b", "delft"),
        (r"\bdutch\s+(?:delft|pottery|ceramic)", "delft"),
        (r"\bhollants\s+porceleyn\b", "delft"),
        (r"\bde\s+porceleyne\s+fles\b", "delft"),
        (r"\broyal\s+delft\b", "delft"),
        (r"\bbelgian\s+(?:pottery|ceramic|porcelain)", "belgium"),
        (r"\bbrussels\s+(?:pottery|ceramic)", "belgium"),
        (r"\bantwerp\s+(?:pottery|ceramic|delft)", "belgium"),
        (r"\btournai\s+(?:pottery|ceramic|porcelain)", "belgium"),
    ]
    .into_iter()
    .filter_map(|(pattern, place)| Regex::new(pattern).ok().map(|re| (re, place)))
    .collect()
});

/// Canonical production places for `item`, ranked and capped.
pub fn extract_production_place(
    compiled: &CompiledTaxonomy,
    item: &RawItem,
    text: &str,
) -> Vec<String> {
    let text = text.to_lowercase();
    let taxonomy = compiled.taxonomy();
    let mut places = BTreeSet::new();

    for field in PLACE_FIELDS {
        for value in item.strings(field) {
            if let Some(place) = taxonomy.normalize_place(&value) {
                if place.chars().count() < PLACE_MAX_LEN {
                    places.insert(place);
                }
            }
        }
    }

    for key in compiled.matcher(Category::ProductionPlace).found_keys(&text) {
        places.insert(key.to_string());
    }

    for (pattern, place) in REGIONAL_PATTERNS.iter() {
        if pattern.is_match(&text) {
            places.insert((*place).to_string());
        }
    }

    let places: BTreeSet<String> = places
        .into_iter()
        .filter(|p| {
            let museum = MUSEUM_CITIES.contains(&p.as_str());
            if museum {
                debug!(
                    subsystem = "extract",
                    component = "place",
                    item_id = %item.id(),
                    place = %p,
                    "Dropped museum location"
                );
            }
            !museum
        })
        .map(|p| fold_city(&p).to_string())
        .collect();

    rank_places(places)
}

/// Order by [`PLACE_PRIORITY`], then alphabetically, and cap.
pub fn rank_places(places: BTreeSet<String>) -> Vec<String> {
    let mut ranked: Vec<String> = PLACE_PRIORITY
        .iter()
        .filter(|p| places.contains(**p))
        .map(|p| p.to_string())
        .collect();
    ranked.extend(
        places
            .into_iter()
            .filter(|p| !PLACE_PRIORITY.contains(&p.as_str())),
    );
    ranked.truncate(MAX_PLACES);
    ranked
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use sherd_core::taxonomy::KeywordTaxonomy;

    use super::*;

    fn compiled() -> CompiledTaxonomy {
        CompiledTaxonomy::new(Arc::new(KeywordTaxonomy::default()))
    }

    fn item(value: serde_json::Value) -> RawItem {
        RawItem::from_value(value).unwrap()
    }

    #[test]
    fn test_kiln_before_country() {
        let places = extract_production_place(
            &compiled(),
            &item(json!({"id": "a"})),
            "made in jingdezhen, china",
        );
        let jingdezhen = places.iter().position(|p| p == "jingdezhen").unwrap();
        let china = places.iter().position(|p| p == "china").unwrap();
        assert!(jingdezhen < china);
    }

    #[test]
    fn test_museum_labels_and_cities_dropped() {
        let record = item(json!({
            "edmPlaceLabel": ["Vienna", "Rijksmuseum Amsterdam", "Delft"],
        }));
        let places = extract_production_place(&compiled(), &record, "");
        assert_eq!(places, vec!["delft"]);
    }

    #[test]
    fn test_brussels_folds_into_belgium() {
        let record = item(json!({"placeLabel": "Bruxelles"}));
        let places = extract_production_place(&compiled(), &record, "brussels pottery");
        assert_eq!(places, vec!["belgium"]);
    }

    #[test]
    fn test_wrapped_place_values() {
        let record = item(json!({"edmPlaceLabel": {"def": ["Jingdezhen"]}}));
        let places = extract_production_place(&compiled(), &record, "");
        assert_eq!(places, vec!["jingdezhen"]);
    }

    #[test]
    fn test_regional_patterns() {
        let record = item(json!({}));
        let places =
            extract_production_place(&compiled(), &record, "a charger by de porceleyne fles");
        assert!(places.contains(&"delft".to_string()));
    }

    #[test]
    fn test_unknown_places_alphabetical_after_ranked() {
        let set: BTreeSet<String> = ["zwolle", "china", "arnhem", "delft"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(rank_places(set), vec!["delft", "china", "arnhem", "zwolle"]);
    }

    #[test]
    fn test_place_cap() {
        let set: BTreeSet<String> = (0..20).map(|i| format!("place{:02}", i)).collect();
        assert_eq!(rank_places(set).len(), MAX_PLACES);
    }
}
