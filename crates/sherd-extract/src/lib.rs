//! # sherd-extract
//!
//! Keyword-driven attribute extraction for ceramic catalogue records.
//!
//! A [`MetadataMapper`] binds one frozen taxonomy snapshot, compiles its
//! keyword matchers once, and turns each raw record plus its assembled free
//! text into an [`ExtractionResult`](sherd_core::ExtractionResult).
//! [`process_batch`] runs many records concurrently against the same
//! snapshot.
//!
//! ```
//! use sherd_core::RawItem;
//! use sherd_extract::MetadataMapper;
//!
//! let mapper = MetadataMapper::default();
//! let item = RawItem::from_json_str(r#"{"id": "obj-1"}"#).unwrap();
//! let result = mapper.process_item(&item, Some("A blue and white Ming vase"), None);
//! assert!(!result.is_degraded());
//! ```

pub mod attributes;
pub mod batch;
pub mod inscription;
pub mod mapper;
pub mod matcher;
pub mod period;
pub mod place;
pub mod quality;

pub use batch::{process_batch, BatchItem, BatchReport};
pub use mapper::{MapperConfig, MetadataMapper};
pub use matcher::{CompiledTaxonomy, KeywordMatcher};
pub use period::PeriodInfo;
