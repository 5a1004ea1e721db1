//! # sherd-core
//!
//! Taxonomy store and shared types for sherd, the ceramic catalogue
//! attribute extractor.
//!
//! This crate holds the domain vocabulary (keyword categories, place-name
//! variants, dynasty ranges), the accessor for heterogeneous raw records, and
//! the output bundle types consumed by reporting.

pub mod chronology;
pub mod config;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod places;
pub mod record;
pub mod taxonomy;

// Re-export commonly used types at crate root
pub use chronology::{
    century_label, century_midpoint, DynastyRange, DynastyTable, UNKNOWN_DYNASTY,
};
pub use config::TaxonomyConfig;
pub use error::{Error, Result};
pub use models::*;
pub use places::PlaceNormalizationTable;
pub use record::{FieldValue, RawItem};
pub use taxonomy::{Category, KeywordEntry, KeywordSet, KeywordTaxonomy, TaxonomyStore};
