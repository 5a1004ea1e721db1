//! Structured logging field name constants for sherd.
//!
//! Both crates use these constants for structured `tracing` fields so that
//! batch logs can be filtered by the same names everywhere.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Item degraded, configuration fallback applied |
//! | INFO  | Batch start/finish, taxonomy configuration loaded |
//! | DEBUG | Decision points (category replaced, place discarded) |
//! | TRACE | Per-item extraction counts |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "taxonomy", "extract"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "store", "config", "mapper", "batch"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "replace_category", "process_item", "process_batch"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Identifier of the catalogue record being processed.
pub const ITEM_ID: &str = "item_id";

/// Taxonomy category affected.
pub const CATEGORY: &str = "category";

/// Monotonic version of the taxonomy snapshot in use.
pub const TAXONOMY_VERSION: &str = "taxonomy_version";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of results produced.
pub const RESULT_COUNT: &str = "result_count";

/// Number of items in a batch.
pub const ITEM_COUNT: &str = "item_count";

/// Item quality score.
pub const QUALITY_SCORE: &str = "quality_score";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
