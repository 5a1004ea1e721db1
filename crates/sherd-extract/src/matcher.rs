//! Whole-word keyword matching over a frozen taxonomy.
//!
//! Every surface form is compiled once per taxonomy snapshot into a regex
//! anchored on word boundaries, so "art" never fires inside "cart". A simple
//! English plural (`s`/`es`) is accepted after alphabetic keywords so that
//! "dragons" still hits "dragon".

use std::sync::Arc;

use regex::Regex;
use sherd_core::taxonomy::{Category, KeywordSet, KeywordTaxonomy};
use tracing::warn;

/// One keyword that matched, with the canonical key it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordHit<'a> {
    pub key: &'a str,
    pub keyword: &'a str,
}

#[derive(Debug)]
struct CompiledKeyword {
    keyword: String,
    pattern: Regex,
}

#[derive(Debug)]
struct CompiledEntry {
    key: String,
    keywords: Vec<CompiledKeyword>,
}

/// Compiled matchers for one keyword category, in declaration order.
#[derive(Debug)]
pub struct KeywordMatcher {
    entries: Vec<CompiledEntry>,
}

impl KeywordMatcher {
    pub fn new(set: &KeywordSet) -> Self {
        let entries = set
            .iter()
            .map(|entry| CompiledEntry {
                key: entry.key.clone(),
                keywords: entry
                    .keywords
                    .iter()
                    .filter_map(|keyword| compile_keyword(keyword))
                    .collect(),
            })
            .collect();
        Self { entries }
    }

    /// Keys with at least one matching keyword, in declaration order.
    pub fn found_keys(&self, text: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.keywords.iter().any(|k| k.pattern.is_match(text)))
            .map(|entry| entry.key.as_str())
            .collect()
    }

    /// Every matching keyword, grouped by key in declaration order.
    pub fn hits(&self, text: &str) -> Vec<KeywordHit<'_>> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry
                    .keywords
                    .iter()
                    .filter(|k| k.pattern.is_match(text))
                    .map(move |k| KeywordHit {
                        key: entry.key.as_str(),
                        keyword: k.keyword.as_str(),
                    })
            })
            .collect()
    }

    /// True if any keyword of any key matches.
    pub fn any_match(&self, text: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.keywords.iter().any(|k| k.pattern.is_match(text)))
    }
}

/// Regex for one surface form, or `None` if it cannot be compiled.
fn compile_keyword(keyword: &str) -> Option<CompiledKeyword> {
    let keyword = keyword.trim().to_lowercase();
    let first = keyword.chars().next()?;
    let last = keyword.chars().last()?;

    let mut pattern = String::new();
    if is_word_char(first) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(&keyword));
    if last.is_alphabetic() {
        pattern.push_str(r"(?:s|es)?");
    }
    if is_word_char(last) {
        pattern.push_str(r"\b");
    }

    match Regex::new(&pattern) {
        Ok(pattern) => Some(CompiledKeyword { keyword, pattern }),
        Err(e) => {
            warn!(
                subsystem = "extract",
                component = "matcher",
                keyword = %keyword,
                error = %e,
                "Skipping keyword that does not compile"
            );
            None
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Matchers for every category of one taxonomy snapshot.
#[derive(Debug)]
pub struct CompiledTaxonomy {
    taxonomy: Arc<KeywordTaxonomy>,
    color: KeywordMatcher,
    decoration: KeywordMatcher,
    shape: KeywordMatcher,
    function: KeywordMatcher,
    material: KeywordMatcher,
    glaze: KeywordMatcher,
    production: KeywordMatcher,
    period: KeywordMatcher,
}

impl CompiledTaxonomy {
    pub fn new(taxonomy: Arc<KeywordTaxonomy>) -> Self {
        let build = |category| KeywordMatcher::new(taxonomy.category(category));
        Self {
            color: build(Category::Color),
            decoration: build(Category::DecorationTheme),
            shape: build(Category::Shape),
            function: build(Category::Function),
            material: build(Category::Material),
            glaze: build(Category::Glaze),
            production: build(Category::ProductionPlace),
            period: build(Category::Period),
            taxonomy,
        }
    }

    pub fn taxonomy(&self) -> &KeywordTaxonomy {
        &self.taxonomy
    }

    pub fn matcher(&self, category: Category) -> &KeywordMatcher {
        match category {
            Category::Color => &self.color,
            Category::DecorationTheme => &self.decoration,
            Category::Shape => &self.shape,
            Category::Function => &self.function,
            Category::Material => &self.material,
            Category::Glaze => &self.glaze,
            Category::ProductionPlace => &self.production,
            Category::Period => &self.period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains_word(text: &str, keyword: &str) -> bool {
        compile_keyword(keyword).is_some_and(|k| k.pattern.is_match(text))
    }

    #[test]
    fn test_whole_word_only() {
        assert!(contains_word("a painted cart", "cart"));
        assert!(!contains_word("a painted cart", "art"));
        assert!(!contains_word("cupboard", "cup"));
    }

    #[test]
    fn test_plural_forms() {
        assert!(contains_word("decorated with dragons", "dragon"));
        assert!(contains_word("two peaches", "peach"));
        assert!(!contains_word("dragonfly", "dragon"));
    }

    #[test]
    fn test_keywords_with_punctuation() {
        assert!(contains_word("a key-fret border", "key-fret"));
        assert!(contains_word("dated 1368-1644 by style", "1368-1644"));
        assert!(contains_word("cizhou (tz'u-chou) ware", "tz'u-chou"));
    }

    #[test]
    fn test_found_keys_declaration_order() {
        let set = KeywordSet::from_pairs(&[
            ("vase", &["vase", "gu"]),
            ("bowl", &["bowl"]),
            ("jar", &["jar"]),
        ]);
        let matcher = KeywordMatcher::new(&set);
        assert_eq!(matcher.found_keys("a jar beside a bowl"), vec!["bowl", "jar"]);
        assert!(matcher.any_match("gu form"));
        assert!(!matcher.any_match("guan ware"));
    }

    #[test]
    fn test_hits_report_keyword() {
        let set = KeywordSet::from_pairs(&[("vase", &["vase", "meiping"])]);
        let matcher = KeywordMatcher::new(&set);
        let hits = matcher.hits("a meiping vase");
        assert_eq!(
            hits,
            vec![
                KeywordHit { key: "vase", keyword: "vase" },
                KeywordHit { key: "vase", keyword: "meiping" },
            ]
        );
    }

    #[test]
    fn test_non_latin_keywords() {
        assert!(contains_word("made in 中国", "中国"));
        assert!(contains_word("faïence de delft", "faïence"));
    }
}
