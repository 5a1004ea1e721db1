//! Year, century, and dynasty arithmetic.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Label returned when no dynasty range contains a year.
pub const UNKNOWN_DYNASTY: &str = "Unknown";

/// A closed year interval mapped to a named historical period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynastyRange {
    pub start: i32,
    pub end: i32,
    pub name: String,
}

impl DynastyRange {
    pub fn new(start: i32, end: i32, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            name: name.into(),
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

/// Ordered dynasty ranges.
///
/// Bounds are inclusive. Where two ranges share a boundary year the range
/// declared later owns it, so 1644 is Qing rather than Ming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynastyTable {
    ranges: Vec<DynastyRange>,
}

impl Default for DynastyTable {
    fn default() -> Self {
        Self {
            ranges: vec![
                DynastyRange::new(618, 907, "Tang"),
                DynastyRange::new(960, 1279, "Song"),
                DynastyRange::new(1279, 1368, "Yuan"),
                DynastyRange::new(1368, 1644, "Ming"),
                DynastyRange::new(1644, 1911, "Qing"),
                DynastyRange::new(1912, 1949, "Republic"),
                DynastyRange::new(1950, i32::MAX, "Modern"),
            ],
        }
    }
}

impl DynastyTable {
    /// Validate and wrap a list of ranges.
    pub fn try_new(ranges: Vec<DynastyRange>) -> Result<Self> {
        for range in &ranges {
            if range.start > range.end {
                return Err(Error::Config(format!(
                    "dynasty range '{}' starts after it ends ({} > {})",
                    range.name, range.start, range.end
                )));
            }
            if range.name.trim().is_empty() {
                return Err(Error::Config("dynasty range without a name".to_string()));
            }
        }
        Ok(Self { ranges })
    }

    pub fn ranges(&self) -> &[DynastyRange] {
        &self.ranges
    }

    /// Name of the dynasty containing `year`, or [`UNKNOWN_DYNASTY`].
    pub fn dynasty_for_year(&self, year: i32) -> &str {
        self.ranges
            .iter()
            .rev()
            .find(|r| r.contains(year))
            .map(|r| r.name.as_str())
            .unwrap_or(UNKNOWN_DYNASTY)
    }
}

/// Century number of a year: `floor((year - 1) / 100) + 1`.
pub fn century_of(year: i32) -> i32 {
    (year - 1).div_euclid(100) + 1
}

/// English ordinal for a positive number: 1st, 2nd, 3rd, 4th, 11th, 21st.
pub fn ordinal(n: i32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Century label for a year, e.g. 1650 -> `"17th century"`.
pub fn century_label(year: i32) -> String {
    century_label_for(century_of(year))
}

/// Label for a century number, e.g. 18 -> `"18th century"`.
pub fn century_label_for(century: i32) -> String {
    format!("{} century", ordinal(century))
}

/// Representative year for a century: its midpoint, `(century - 1) * 100 + 50`.
pub fn century_midpoint(century: i32) -> i32 {
    (century - 1) * 100 + 50
}
