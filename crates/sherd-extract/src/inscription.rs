//! Marks, seals, and inscriptions.

use once_cell::sync::Lazy;
use regex::Regex;
use sherd_core::defaults::{
    INSCRIPTION_CAPTURES_PER_PATTERN, INSCRIPTION_CAPTURE_MAX_LEN, INSCRIPTION_KEYWORD_HITS,
    MAX_INSCRIPTIONS,
};
use sherd_core::taxonomy::{Category, KeywordSet};

use crate::attributes::{dedup_keep_order, phrase_captures};
use crate::matcher::{CompiledTaxonomy, KeywordMatcher};

/// Vocabulary of marking terms, in reporting order.
pub const INSCRIPTION_TERMS: &[&str] = &[
    "mark",
    "marked",
    "inscription",
    "inscribed",
    "character",
    "seal",
    "signature",
    "signed",
    "reign mark",
    "nianzhi",
    "nianzhao",
    "tang",
    "zhi",
    "zao",
    "six character",
    "four character",
    "seal mark",
    "reign title",
    "base mark",
];

static INSCRIPTION_MATCHER: Lazy<KeywordMatcher> = Lazy::new(|| {
    let pairs: Vec<(&str, &[&str])> = INSCRIPTION_TERMS
        .iter()
        .map(|term| (*term, std::slice::from_ref(term)))
        .collect();
    KeywordMatcher::new(&KeywordSet::from_pairs(&pairs))
});

static INSCRIPTION_PHRASES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\bmark(?:ed)?\s+(?:of|with|reading)\s+([\w\s]+?)(?:\.|,|;)", "mark"),
        (r"\binscription\s+(?:of|reading)\s+([\w\s]+?)(?:\.|,|;)", "inscription"),
        (
            r"\b(?:six|four|two)\s+character\s+mark\s+(?:of|reading)?\s*([\w\s]+?)(?:\.|,|;)",
            "character mark",
        ),
        (r"\breign\s+mark\s+of\s+([\w\s]+?)(?:\.|,|;)", "reign mark"),
        (r"\bsigned\s+([\w\s]+?)(?:\.|,|;)", "signature"),
    ]
    .into_iter()
    .filter_map(|(pattern, tag)| Regex::new(pattern).ok().map(|re| (re, tag)))
    .collect()
});

/// Inscription descriptors found in lower-cased free text.
///
/// Up to three marking terms, then `tag:capture` phrases, then a
/// `period mark:<key>` entry for each period named alongside the word "mark".
pub fn extract_inscriptions(compiled: &CompiledTaxonomy, text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let terms = INSCRIPTION_MATCHER.found_keys(&text);
    let has_mark = terms.contains(&"mark");
    let mut out: Vec<String> = terms
        .into_iter()
        .take(INSCRIPTION_KEYWORD_HITS)
        .map(str::to_string)
        .collect();

    out.extend(phrase_captures(
        &INSCRIPTION_PHRASES,
        &text,
        INSCRIPTION_CAPTURES_PER_PATTERN,
        INSCRIPTION_CAPTURE_MAX_LEN,
    ));

    if has_mark {
        for key in compiled.matcher(Category::Period).found_keys(&text) {
            out.push(format!("period mark:{}", key));
        }
    }

    let mut out = dedup_keep_order(out);
    out.truncate(MAX_INSCRIPTIONS);
    out
}
