//! Per-item bundle construction.
//!
//! [`MetadataMapper`] holds one frozen taxonomy snapshot with its compiled
//! matchers and turns a raw record plus free text into an
//! [`ExtractionResult`]. Construction runs through a fallible path; any error
//! or panic becomes a degraded result for that item only.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value as JsonValue};
use sherd_core::defaults::{BATCH_CONCURRENCY, MAX_DESCRIPTIONS, MAX_TEXT_CHARS};
use sherd_core::models::{
    DescriptiveMetadata, Digitalization, ExtendedMetadata, ExtractionResult, ManagementMetadata,
    OriginalData, PreservationRecords, ProcessingMetadata, TopicLabel,
};
use sherd_core::record::{FieldValue, RawItem};
use sherd_core::taxonomy::{KeywordTaxonomy, TaxonomyStore};
use sherd_core::{Error, Result};
use tracing::{debug, trace, warn};

use crate::attributes::{self, dedup_keep_order};
use crate::inscription;
use crate::matcher::CompiledTaxonomy;
use crate::period::{self, PeriodInfo};
use crate::place;
use crate::quality;

/// Tunables for the mapper and batch runner.
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Character cap when the mapper assembles free text itself.
    pub max_text_chars: usize,
    /// Maximum items extracted at once by the batch runner.
    pub concurrency: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            max_text_chars: MAX_TEXT_CHARS,
            concurrency: BATCH_CONCURRENCY,
        }
    }
}

impl MapperConfig {
    /// Create config from environment variables (with defaults).
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `SHERD_MAX_TEXT_CHARS` | `2000` | Cap on assembled free text |
    /// | `SHERD_BATCH_CONCURRENCY` | `8` | Max items in flight per batch |
    pub fn from_env() -> Self {
        let max_text_chars = std::env::var("SHERD_MAX_TEXT_CHARS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(MAX_TEXT_CHARS);

        let concurrency = std::env::var("SHERD_BATCH_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(BATCH_CONCURRENCY)
            .max(1);

        Self {
            max_text_chars,
            concurrency,
        }
    }

    pub fn with_max_text_chars(mut self, max: usize) -> Self {
        self.max_text_chars = max;
        self
    }

    /// Set batch concurrency (at least 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

/// Attribute extractor bound to one taxonomy snapshot.
#[derive(Debug)]
pub struct MetadataMapper {
    compiled: CompiledTaxonomy,
    config: MapperConfig,
}

impl Default for MetadataMapper {
    fn default() -> Self {
        Self::new(Arc::new(KeywordTaxonomy::default()))
    }
}

impl MetadataMapper {
    pub fn new(taxonomy: Arc<KeywordTaxonomy>) -> Self {
        Self::with_config(taxonomy, MapperConfig::default())
    }

    pub fn with_config(taxonomy: Arc<KeywordTaxonomy>, config: MapperConfig) -> Self {
        Self {
            compiled: CompiledTaxonomy::new(taxonomy),
            config,
        }
    }

    /// Mapper over the store's current snapshot. Later store updates do not
    /// affect it.
    pub fn from_store(store: &TaxonomyStore) -> Self {
        Self::new(store.snapshot())
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn taxonomy(&self) -> &KeywordTaxonomy {
        self.compiled.taxonomy()
    }

    pub fn taxonomy_version(&self) -> u64 {
        self.taxonomy().version()
    }

    // =========================================================================
    // Sub-extractors
    // =========================================================================

    pub fn extract_colored_drawing(&self, text: &str) -> Vec<String> {
        attributes::extract_colored_drawing(&self.compiled, text)
    }

    pub fn extract_decorations(&self, text: &str) -> Vec<String> {
        attributes::extract_decorations(&self.compiled, text)
    }

    pub fn extract_shape(&self, text: &str) -> Vec<String> {
        attributes::extract_shape(&self.compiled, text)
    }

    pub fn extract_function(&self, text: &str) -> Vec<String> {
        attributes::extract_function(&self.compiled, text)
    }

    pub fn extract_material(&self, text: &str) -> Vec<String> {
        attributes::extract_material(&self.compiled, text)
    }

    pub fn extract_glaze(&self, text: &str) -> Vec<String> {
        attributes::extract_glaze(&self.compiled, text)
    }

    pub fn extract_production_place(&self, item: &RawItem, text: &str) -> Vec<String> {
        place::extract_production_place(&self.compiled, item, text)
    }

    pub fn extract_period_info(&self, item: &RawItem, text: &str) -> PeriodInfo {
        period::extract_period_info(&self.compiled, item, text)
    }

    pub fn extract_inscriptions(&self, text: &str) -> Vec<String> {
        inscription::extract_inscriptions(&self.compiled, text)
    }

    // =========================================================================
    // Sections
    // =========================================================================

    /// Descriptive section with quality indicators.
    pub fn descriptive_metadata(
        &self,
        item: &RawItem,
        text: &str,
        topics: Option<&[TopicLabel]>,
    ) -> DescriptiveMetadata {
        let text = text.to_lowercase();
        let material = self.extract_material(&text);
        let places = self.extract_production_place(item, &text);

        let mut descriptive = DescriptiveMetadata {
            descriptions: descriptions(item),
            colored_drawing: self.extract_colored_drawing(&text),
            decorations: self.extract_decorations(&text),
            shape: self.extract_shape(&text),
            function: self.extract_function(&text),
            paste: material.clone(),
            paste_material: material,
            glaze: self.extract_glaze(&text),
            production_place: places.clone(),
            production_place_location: places,
            inscriptions: self.extract_inscriptions(&text),
            lda_topics: usable_topics(item, topics),
            ..Default::default()
        };
        descriptive.extraction_quality = quality::assess(&descriptive);
        descriptive.quality_score = descriptive.extraction_quality.score();
        descriptive
    }

    /// Management section: titles, identifier, dating, and provenance.
    pub fn management_metadata(&self, item: &RawItem, text: &str) -> ManagementMetadata {
        let info = self.extract_period_info(item, text);

        let mut title = item.strings("title");
        if title.is_empty() {
            title = item.strings("dcTitle");
        }
        let mut used_titles = item.strings("dcTitle");
        used_titles.extend(item.strings("title"));

        ManagementMetadata {
            title,
            used_titles: dedup_keep_order(used_titles),
            identifier: item.id(),
            period: info.periods,
            years: info.years,
            period_summary: info.summary,
            completeness_level: first_present(item, &["europeanaCompleteness", "completeness"])
                .unwrap_or_else(|| json!(0)),
            providing_institution: passthrough(item, "dataProvider"),
            providing_institution_country: passthrough(item, "country"),
            date_of_storage: passthrough(item, "timestamp_created"),
            preservation_records: PreservationRecords {
                rights: passthrough(item, "rights"),
                timestamp_created: passthrough(item, "timestamp_created"),
                timestamp_updated: passthrough(item, "timestamp_update"),
                quality_score: description_quality(item),
            },
        }
    }

    /// Extended section: people, collections, and digitisation links.
    pub fn extended_metadata(&self, item: &RawItem) -> ExtendedMetadata {
        ExtendedMetadata {
            related_people: item.strings("dcCreator"),
            related_collections: item.strings("europeanaCollectionName"),
            digitalization: Digitalization {
                edm_is_shown_at: passthrough(item, "edmIsShownAt"),
                edm_is_shown_by: passthrough(item, "edmIsShownBy"),
                edm_preview: passthrough(item, "edmPreview"),
            },
            documentations_api: passthrough(item, "link"),
            original_data: OriginalData {
                guid: passthrough(item, "guid"),
                europeana_collection_name: passthrough(item, "europeanaCollectionName"),
                provider: passthrough(item, "provider"),
                kind: passthrough(item, "type"),
                language: first_present(item, &["language"]).unwrap_or_else(|| json!([])),
            },
        }
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Build the full bundle for one record.
    ///
    /// `text` is the assembled free text; when `None` the mapper assembles it
    /// from the record. Never fails: errors and panics produce a degraded
    /// result that keeps the record identifier.
    pub fn process_item(
        &self,
        item: &RawItem,
        text: Option<&str>,
        topics: Option<&[TopicLabel]>,
    ) -> ExtractionResult {
        let outcome = catch_unwind(AssertUnwindSafe(|| self.try_process(item, text, topics)));
        match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => self.degrade(item.id(), e),
            Err(panic) => self.degrade(item.id(), Error::Internal(panic_message(panic.as_ref()))),
        }
    }

    /// [`MetadataMapper::process_item`] for an unchecked JSON value.
    pub fn process_value(
        &self,
        value: JsonValue,
        text: Option<&str>,
        topics: Option<&[TopicLabel]>,
    ) -> ExtractionResult {
        let id = record_id(&value);
        match RawItem::from_value(value) {
            Ok(item) => self.process_item(&item, text, topics),
            Err(e) => self.degrade(id, e),
        }
    }

    fn try_process(
        &self,
        item: &RawItem,
        text: Option<&str>,
        topics: Option<&[TopicLabel]>,
    ) -> Result<ExtractionResult> {
        let text = match text {
            Some(text) => text.to_string(),
            None => item.assemble_text_with_limit(self.config.max_text_chars),
        };

        let descriptive = self.descriptive_metadata(item, &text, topics);
        let management = self.management_metadata(item, &text);
        let extended = self.extended_metadata(item);

        trace!(
            subsystem = "extract",
            component = "mapper",
            op = "process_item",
            item_id = %management.identifier,
            colors = descriptive.colored_drawing.len(),
            decorations = descriptive.decorations.len(),
            places = descriptive.production_place.len(),
            periods = management.period.len(),
            quality_score = descriptive.quality_score,
            "Extracted item"
        );

        Ok(ExtractionResult {
            id: item.id(),
            descriptive: Some(descriptive),
            management: Some(management),
            extended: Some(extended),
            processing: ProcessingMetadata::Completed {
                processed_date: processed_date(),
                preprocessing_metadata: first_present(item, &["preprocessing_metadata"])
                    .unwrap_or_else(|| json!({})),
            },
        })
    }

    fn degrade(&self, id: String, error: Error) -> ExtractionResult {
        warn!(
            subsystem = "extract",
            component = "mapper",
            op = "process_item",
            item_id = %id,
            error = %error,
            "Item degraded"
        );
        ExtractionResult::degraded(id, processed_date(), error)
    }
}

/// Identifier of a raw JSON record, or `""`.
pub(crate) fn record_id(value: &JsonValue) -> String {
    value
        .get("id")
        .map(|id| FieldValue::from_json(id).flatten())
        .and_then(|ids| ids.into_iter().next())
        .unwrap_or_default()
}

/// Current time in RFC 3339.
pub(crate) fn processed_date() -> String {
    Utc::now().to_rfc3339()
}

/// Topics with a finite probability in [0, 1], or `None` when none remain.
fn usable_topics(item: &RawItem, topics: Option<&[TopicLabel]>) -> Option<Vec<TopicLabel>> {
    let topics = topics?;
    let usable: Vec<TopicLabel> = topics
        .iter()
        .filter(|t| t.probability.is_finite() && (0.0..=1.0).contains(&t.probability))
        .cloned()
        .collect();
    if usable.len() < topics.len() {
        debug!(
            subsystem = "extract",
            component = "mapper",
            item_id = %item.id(),
            dropped = topics.len() - usable.len(),
            "Dropped topics with probability outside [0, 1]"
        );
    }
    (!usable.is_empty()).then_some(usable)
}

fn descriptions(item: &RawItem) -> Vec<String> {
    let mut values = item.strings("dcDescription");
    if values.is_empty() {
        values = item.strings("description");
    }
    values.truncate(MAX_DESCRIPTIONS);
    values
}

fn description_quality(item: &RawItem) -> f64 {
    item.raw("description_quality")
        .and_then(|q| q.get("score"))
        .and_then(JsonValue::as_f64)
        .unwrap_or(0.0)
}

/// First non-null value among `names`.
fn first_present(item: &RawItem, names: &[&str]) -> Option<JsonValue> {
    names
        .iter()
        .filter_map(|name| item.raw(name))
        .find(|value| !value.is_null())
        .cloned()
}

/// Raw value of `name`, or `""` when missing.
fn passthrough(item: &RawItem, name: &str) -> JsonValue {
    first_present(item, &[name]).unwrap_or_else(|| json!(""))
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("extraction panicked: {}", s)
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("extraction panicked: {}", s)
    } else {
        "extraction panicked".to_string()
    }
}
