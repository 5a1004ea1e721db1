//! Period, year, and dynasty extraction.
//!
//! Candidates come from the record's period fields, or from the free text
//! when those are empty. Each candidate is scanned for four-digit years,
//! century expressions in several languages, and period keywords. Years are
//! then mapped onto dynasties through the taxonomy's range table.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use sherd_core::chronology::{century_label, century_label_for, century_midpoint};
use sherd_core::defaults::{
    MAX_CENTURY, MAX_PERIODS, MAX_YEAR, MAX_YEARS, MIN_YEAR, PERIOD_LABEL_MAX_LEN,
};
use sherd_core::models::PeriodSummary;
use sherd_core::record::RawItem;
use sherd_core::taxonomy::Category;
use sherd_core::UNKNOWN_DYNASTY;
use tracing::trace;

use crate::matcher::CompiledTaxonomy;

/// Nested management field holding curated periods.
pub const PERIOD_PATH: &[&str] = &["Metadata_for_Management", "Period"];

/// Fallback field holding a timespan label.
pub const TIMESPAN_FIELD: &str = "edmTimespanLabel";

static YEAR_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"\b(1[0-9]{3}|20[0-2][0-9])\b").ok());

/// Century expressions. Capture group 1 holds the century number, read by
/// the rule's converter.
static CENTURY_RULES: Lazy<Vec<CenturyRule>> = Lazy::new(|| {
    let rules: [(&'static str, &str, fn(&str) -> Option<u32>); 9] = [
        ("en", r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\s+century\b", parse_arabic),
        ("fr", r"(?i)\b(\d{1,2})\s*(?:er|re|ème|eme|e)\s+si[èe]cle\b", parse_arabic),
        ("fr", r"(?i)\b([ivxl]+)\s*(?:er|re|ème|eme|e)\s+si[èe]cle\b", parse_roman),
        ("de", r"(?i)\b(\d{1,2})\.\s*jahrhundert", parse_arabic),
        ("pt", r"(?i)\b(\d{1,2})\s*[º°]\s*século\b", parse_arabic),
        ("ru", r"(?i)\b(\d{1,2})(?:-?й)?\s+век", parse_arabic),
        ("fi", r"(?i)\b(\d{1,2})-luku\b", parse_arabic),
        ("lv", r"(?i)\b(\d{1,2})\.\s*gadsimt", parse_arabic),
        ("lt", r"(?i)\b(\d{1,2})\s+amžius\b", parse_arabic),
    ];
    rules
        .into_iter()
        .filter_map(|(language, pattern, convert)| {
            Regex::new(pattern).ok().map(|pattern| CenturyRule {
                language,
                pattern,
                convert,
            })
        })
        .collect()
});

struct CenturyRule {
    language: &'static str,
    pattern: Regex,
    convert: fn(&str) -> Option<u32>,
}

fn parse_arabic(digits: &str) -> Option<u32> {
    digits.parse().ok()
}

/// Roman numeral up to `L`, e.g. `"xvii"` -> 17.
fn parse_roman(numeral: &str) -> Option<u32> {
    let values = numeral
        .chars()
        .map(|c| match c.to_ascii_lowercase() {
            'i' => Some(1),
            'v' => Some(5),
            'x' => Some(10),
            'l' => Some(50),
            _ => None,
        })
        .collect::<Option<Vec<u32>>>()?;

    let mut total = 0;
    for (idx, value) in values.iter().enumerate() {
        match values.get(idx + 1) {
            Some(next) if next > value => total -= *value as i64,
            _ => total += *value as i64,
        }
    }
    u32::try_from(total).ok().filter(|n| *n > 0)
}

/// Output of [`extract_period_info`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodInfo {
    /// Period labels in discovery order.
    pub periods: Vec<String>,
    /// Years in discovery order.
    pub years: Vec<i32>,
    pub summary: PeriodSummary,
}

/// Collect periods, years, and their dynasty summary for `item`.
pub fn extract_period_info(compiled: &CompiledTaxonomy, item: &RawItem, text: &str) -> PeriodInfo {
    let taxonomy = compiled.taxonomy();
    let mut periods: Vec<String> = Vec::new();
    let mut years: Vec<i32> = Vec::new();

    for candidate in period_candidates(item, text) {
        let lowered = candidate.to_lowercase();

        years.extend(scan_years(&lowered));

        for (century, language) in scan_centuries(&lowered) {
            trace!(
                subsystem = "extract",
                component = "period",
                century,
                language,
                "Matched century expression"
            );
            years.push(century_midpoint(century));
            periods.push(century_label_for(century));
        }

        for key in compiled.matcher(Category::Period).found_keys(&lowered) {
            periods.push(display_name(key));
        }
    }

    let years = dedup_years(years);

    let mut sorted_years = years.clone();
    sorted_years.sort_unstable();

    let century = sorted_years.first().map(|y| century_label(*y));
    let date_range = match (sorted_years.first(), sorted_years.last()) {
        (Some(first), Some(last)) if first == last => Some(first.to_string()),
        (Some(first), Some(last)) => Some(format!("{}-{}", first, last)),
        _ => None,
    };
    sorted_years.truncate(MAX_YEARS);

    let mut dynasty_mapping = BTreeMap::new();
    for year in &years {
        let dynasty = taxonomy.dynasty_for_year(*year);
        if dynasty == UNKNOWN_DYNASTY {
            continue;
        }
        if sorted_years.binary_search(year).is_ok() {
            dynasty_mapping.insert(*year, dynasty.to_string());
        }
        periods.push(dynasty.to_string());
    }

    let mut periods = dedup_periods(periods);
    periods.truncate(MAX_PERIODS);

    let mut capped_years = years;
    capped_years.truncate(MAX_YEARS);

    PeriodInfo {
        summary: PeriodSummary {
            periods: periods.clone(),
            years: sorted_years,
            dynasty_mapping,
            century,
            date_range,
        },
        periods,
        years: capped_years,
    }
}

/// Period strings to scan: the curated field, else the timespan label, else
/// the free text itself. Link values are skipped.
fn period_candidates(item: &RawItem, text: &str) -> Vec<String> {
    let from_fields = |values: Vec<String>| -> Vec<String> {
        values
            .into_iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty() && !is_link(v))
            .collect()
    };

    let curated = from_fields(item.nested(PERIOD_PATH).flatten());
    if !curated.is_empty() {
        return curated;
    }
    let timespan = from_fields(item.strings(TIMESPAN_FIELD));
    if !timespan.is_empty() {
        return timespan;
    }
    let text = text.trim();
    if text.is_empty() {
        Vec::new()
    } else {
        vec![text.to_string()]
    }
}

fn is_link(value: &str) -> bool {
    value.to_ascii_lowercase().starts_with("http")
}

/// Four-digit years between the supported bounds.
pub fn scan_years(text: &str) -> Vec<i32> {
    let Some(pattern) = YEAR_PATTERN.as_ref() else {
        return Vec::new();
    };
    pattern
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .collect()
}

/// Century numbers with the language of the matching rule.
pub fn scan_centuries(text: &str) -> Vec<(i32, &'static str)> {
    let mut out = Vec::new();
    for rule in CENTURY_RULES.iter() {
        for captures in rule.pattern.captures_iter(text) {
            let Some(century) = captures.get(1).and_then(|m| (rule.convert)(m.as_str())) else {
                continue;
            };
            if (1..=MAX_CENTURY).contains(&century) {
                out.push((century as i32, rule.language));
            }
        }
    }
    out
}

/// `"delft_golden_age"` -> `"Delft Golden Age"`.
pub fn display_name(key: &str) -> String {
    key.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn dedup_years(years: Vec<i32>) -> Vec<i32> {
    let mut out = Vec::with_capacity(years.len());
    for year in years {
        if !out.contains(&year) {
            out.push(year);
        }
    }
    out
}

fn dedup_periods(periods: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for period in periods {
        let period = period.trim().to_string();
        if period.is_empty() || period.chars().count() >= PERIOD_LABEL_MAX_LEN {
            continue;
        }
        let folded = period.to_lowercase();
        if !seen.contains(&folded) {
            seen.push(folded);
            out.push(period);
        }
    }
    out
}
