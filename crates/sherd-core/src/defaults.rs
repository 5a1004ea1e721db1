//! Centralized default constants for sherd.
//!
//! Every output cap and length limit used by the extractors lives here so the
//! bounds on `ExtractionResult` lists can be read in one place.

// =============================================================================
// OUTPUT CAPS
// =============================================================================

/// Maximum entries in `Decorations`.
pub const MAX_DECORATIONS: usize = 15;

/// Maximum entries in `Shape`.
pub const MAX_SHAPES: usize = 5;

/// Maximum entries in `Glaze`.
pub const MAX_GLAZES: usize = 5;

/// Maximum entries in `ProductionPlace`.
pub const MAX_PLACES: usize = 10;

/// Maximum entries in `Inscriptions`.
pub const MAX_INSCRIPTIONS: usize = 5;

/// Maximum entries in `Period`.
pub const MAX_PERIODS: usize = 5;

/// Maximum entries in `Years`.
pub const MAX_YEARS: usize = 10;

/// Maximum entries in `Descriptions`.
pub const MAX_DESCRIPTIONS: usize = 3;

// =============================================================================
// PER-PATTERN LIMITS
// =============================================================================

/// Keyword hits kept per decoration theme (`theme:keyword` pairs).
pub const DECORATION_HITS_PER_THEME: usize = 3;

/// Captures kept per decoration phrase pattern.
pub const DECORATION_CAPTURES_PER_PATTERN: usize = 2;

/// Decoration phrase captures must be shorter than this (chars).
pub const DECORATION_CAPTURE_MAX_LEN: usize = 50;

/// Inscription vocabulary hits kept.
pub const INSCRIPTION_KEYWORD_HITS: usize = 3;

/// Captures kept per inscription phrase pattern.
pub const INSCRIPTION_CAPTURES_PER_PATTERN: usize = 2;

/// Inscription phrase captures must be shorter than this (chars).
pub const INSCRIPTION_CAPTURE_MAX_LEN: usize = 30;

/// Period labels must be shorter than this (chars).
pub const PERIOD_LABEL_MAX_LEN: usize = 50;

// =============================================================================
// PLACES AND YEARS
// =============================================================================

/// Unresolved place strings longer than this (chars) are discarded.
pub const PLACE_MAX_LEN: usize = 50;

/// Earliest bare four-digit year accepted.
pub const MIN_YEAR: i32 = 1000;

/// Latest bare four-digit year accepted.
pub const MAX_YEAR: i32 = 2025;

/// Highest century number accepted from century notations.
pub const MAX_CENTURY: u32 = 21;

// =============================================================================
// TEXT AND QUALITY
// =============================================================================

/// Maximum characters of assembled free text.
pub const MAX_TEXT_CHARS: usize = 2000;

/// Quality score above which a record counts as high quality.
pub const HIGH_QUALITY_THRESHOLD: f64 = 0.5;

/// Default number of items processed concurrently in a batch.
pub const BATCH_CONCURRENCY: usize = 8;

/// Environment variable naming a taxonomy override file.
pub const TAXONOMY_PATH_ENV: &str = "SHERD_TAXONOMY_PATH";
