//! Physical and decorative attribute extractors.
//!
//! Each extractor takes lower-cased free text and returns an ordered,
//! de-duplicated, capped list. Nothing here fails: no match means an empty
//! list (or the material fallback).

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use sherd_core::defaults::{
    DECORATION_CAPTURES_PER_PATTERN, DECORATION_CAPTURE_MAX_LEN, DECORATION_HITS_PER_THEME,
    MAX_DECORATIONS, MAX_GLAZES, MAX_SHAPES,
};
use sherd_core::taxonomy::Category;

use crate::matcher::CompiledTaxonomy;

/// Descriptive phrases and the tag prefixed to their capture.
static DECORATION_PHRASES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("decorated with", "decorated"),
        ("depicting", "depicting"),
        ("painted with", "painted"),
        ("design of", "design"),
        ("motif of", "motif"),
        ("pattern of", "pattern"),
    ]
    .into_iter()
    .filter_map(|(lead, tag)| {
        let pattern = format!(r"\b{}\s+([\w\s,]+?)(?:\.|,|;|\band\b)", lead.replace(' ', r"\s+"));
        Regex::new(&pattern).ok().map(|re| (re, tag))
    })
    .collect()
});

const CERAMIC_HINTS: &[&str] = &["ceramic", "pottery", "clay"];
const PORCELAIN_HINTS: &[&str] = &["porcelain", "china"];

/// Colour keys found in the text.
pub fn extract_colored_drawing(compiled: &CompiledTaxonomy, text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    owned(compiled.matcher(Category::Color).found_keys(&text))
}

/// Decoration descriptors: `theme:keyword`, `color:key`, and `tag:phrase`.
pub fn extract_decorations(compiled: &CompiledTaxonomy, text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let mut out = Vec::new();

    let hits = compiled.matcher(Category::DecorationTheme).hits(&text);
    let mut current_theme = "";
    let mut theme_hits = 0;
    for hit in hits {
        if hit.key != current_theme {
            current_theme = hit.key;
            theme_hits = 0;
        }
        if theme_hits < DECORATION_HITS_PER_THEME {
            out.push(format!("{}:{}", hit.key, hit.keyword));
            theme_hits += 1;
        }
    }

    for color in compiled.matcher(Category::Color).found_keys(&text) {
        out.push(format!("color:{}", color));
    }

    out.extend(phrase_captures(
        &DECORATION_PHRASES,
        &text,
        DECORATION_CAPTURES_PER_PATTERN,
        DECORATION_CAPTURE_MAX_LEN,
    ));

    let mut out = dedup_ignore_case(out);
    out.truncate(MAX_DECORATIONS);
    out
}

/// Shape keys, then the literal forms that differ from their key.
pub fn extract_shape(compiled: &CompiledTaxonomy, text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let mut keys = Vec::new();
    let mut details = Vec::new();
    for hit in compiled.matcher(Category::Shape).hits(&text) {
        keys.push(hit.key.to_string());
        if hit.keyword != hit.key {
            details.push(hit.keyword.to_string());
        }
    }
    keys.extend(details);

    let mut out = dedup_keep_order(keys);
    out.truncate(MAX_SHAPES);
    out
}

/// Function keys found in the text.
pub fn extract_function(compiled: &CompiledTaxonomy, text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    owned(compiled.matcher(Category::Function).found_keys(&text))
}

/// Material keys, or a single generic material sniffed from the text.
pub fn extract_material(compiled: &CompiledTaxonomy, text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let found = owned(compiled.matcher(Category::Material).found_keys(&text));
    if !found.is_empty() {
        return found;
    }
    if CERAMIC_HINTS.iter().any(|h| text.contains(h)) {
        vec!["ceramic".to_string()]
    } else if PORCELAIN_HINTS.iter().any(|h| text.contains(h)) {
        vec!["porcelain".to_string()]
    } else {
        Vec::new()
    }
}

/// Glaze names (key with underscores as spaces) plus differing literal forms.
pub fn extract_glaze(compiled: &CompiledTaxonomy, text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let mut out = Vec::new();
    for hit in compiled.matcher(Category::Glaze).hits(&text) {
        let name = hit.key.replace('_', " ");
        if hit.keyword != hit.key && hit.keyword != name {
            out.push(name);
            out.push(hit.keyword.to_string());
        } else {
            out.push(name);
        }
    }

    let mut out = dedup_keep_order(out);
    out.truncate(MAX_GLAZES);
    out
}

/// `tag:capture` strings for every phrase pattern, `per_pattern` at most each.
pub(crate) fn phrase_captures(
    patterns: &[(Regex, &'static str)],
    text: &str,
    per_pattern: usize,
    max_len: usize,
) -> Vec<String> {
    let mut out = Vec::new();
    for (pattern, tag) in patterns {
        let captures = pattern
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty() && s.chars().count() < max_len)
            .take(per_pattern);
        for capture in captures {
            out.push(format!("{}:{}", tag, capture));
        }
    }
    out
}

/// Drop repeated values, keeping the first occurrence.
pub(crate) fn dedup_keep_order(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Drop values equal to an earlier one ignoring case; the first spelling wins.
fn dedup_ignore_case(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .into_iter()
        .filter(|value| seen.insert(value.to_lowercase()))
        .collect()
}

fn owned(keys: Vec<&str>) -> Vec<String> {
    keys.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sherd_core::taxonomy::{KeywordSet, KeywordTaxonomy};

    use super::*;

    fn compiled() -> CompiledTaxonomy {
        CompiledTaxonomy::new(Arc::new(KeywordTaxonomy::default()))
    }

    #[test]
    fn test_colors_blue_and_white() {
        let colors = extract_colored_drawing(&compiled(), "A blue and white Ming vase");
        assert!(colors.contains(&"blue and white".to_string()));
    }

    #[test]
    fn test_decorations_theme_and_phrase() {
        let decorations =
            extract_decorations(&compiled(), "a vase decorated with dragons, from jingdezhen");
        assert!(decorations.contains(&"animal:dragon".to_string()));
        assert!(decorations.contains(&"decorated:dragons".to_string()));
    }

    #[test]
    fn test_decoration_phrase_stops_at_and() {
        let decorations =
            extract_decorations(&compiled(), "painted with peonies and lotus scrolls.");
        assert!(decorations.contains(&"painted:peonies".to_string()));
    }

    #[test]
    fn test_decorations_dedup_ignores_case() {
        let mixed = CompiledTaxonomy::new(Arc::new({
            let mut t = KeywordTaxonomy::default();
            let themes = KeywordSet::from_pairs(&[("Color", &["red"])]);
            t.replace_category(Category::DecorationTheme, themes).unwrap();
            t
        }));
        assert_eq!(extract_decorations(&mixed, "a red vase"), vec!["Color:red"]);
    }

    #[test]
    fn test_decorations_capped() {
        let text = "dragon phoenix crane deer lion fish horse lotus peony chrysanthemum \
                    bamboo pine plum landscape mountain river figure scholar immortal \
                    geometric key-fret red blue green yellow";
        assert!(extract_decorations(&compiled(), text).len() <= MAX_DECORATIONS);
    }

    #[test]
    fn test_shape_keys_then_details() {
        let shapes = extract_shape(&compiled(), "a meiping vase and a small bowl");
        assert_eq!(shapes, vec!["bowl", "vase", "meiping"]);
        assert!(shapes.contains(&"meiping".to_string()));
        let vase = shapes.iter().position(|s| s == "vase").unwrap();
        let meiping = shapes.iter().position(|s| s == "meiping").unwrap();
        assert!(vase < meiping);
        assert!(shapes.len() <= MAX_SHAPES);
    }

    #[test]
    fn test_material_fallback() {
        let empty = CompiledTaxonomy::new(Arc::new({
            let mut t = KeywordTaxonomy::default();
            t.replace_category(Category::Material, KeywordSet::new()).unwrap();
            t
        }));
        assert_eq!(extract_material(&empty, "a clay figure"), vec!["ceramic"]);
        assert_eq!(extract_material(&empty, "fine porcelain"), vec!["porcelain"]);
        assert!(extract_material(&empty, "a bronze mirror").is_empty());
    }

    #[test]
    fn test_material_keys() {
        let materials = extract_material(&compiled(), "hard-paste porcelain body");
        assert!(materials.contains(&"porcelain".to_string()));
    }

    #[test]
    fn test_glaze_normalized_names() {
        let glazes = extract_glaze(&compiled(), "covered in a celadon glaze with crackle");
        assert!(glazes.contains(&"celadon".to_string()));
        assert!(glazes.len() <= MAX_GLAZES);
    }

    #[test]
    fn test_no_matches_yield_empty() {
        let c = compiled();
        assert!(extract_colored_drawing(&c, "").is_empty());
        assert!(extract_function(&c, "").is_empty());
        assert!(extract_shape(&c, "").is_empty());
        assert!(extract_glaze(&c, "").is_empty());
    }

    #[test]
    fn test_dedup_keep_order() {
        let values = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(dedup_keep_order(values), vec!["b", "a"]);
    }
}
