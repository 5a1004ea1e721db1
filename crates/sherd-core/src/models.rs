//! Output bundle types.
//!
//! Field names and nesting are fixed by the reporting consumer, which reads
//! the serialized JSON; the serde attributes here are the contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// =============================================================================
// DESCRIPTIVE METADATA
// =============================================================================

/// One topic assignment supplied by the topic-model collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicLabel {
    pub topic_id: usize,
    pub probability: f64,
}

/// Presence indicators behind the quality score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionQuality {
    pub has_color: bool,
    pub has_decoration: bool,
    pub has_shape: bool,
    pub has_function: bool,
    pub has_material: bool,
    pub has_glaze: bool,
    pub has_place: bool,
    pub has_inscription: bool,
}

impl ExtractionQuality {
    /// Number of indicators.
    pub const INDICATORS: usize = 8;

    fn flags(&self) -> [bool; Self::INDICATORS] {
        [
            self.has_color,
            self.has_decoration,
            self.has_shape,
            self.has_function,
            self.has_material,
            self.has_glaze,
            self.has_place,
            self.has_inscription,
        ]
    }

    /// Fraction of indicators that are true, in `[0.0, 1.0]`.
    pub fn score(&self) -> f64 {
        let satisfied = self.flags().iter().filter(|f| **f).count();
        satisfied as f64 / Self::INDICATORS as f64
    }
}

/// Extracted physical and decorative attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescriptiveMetadata {
    pub descriptions: Vec<String>,
    pub colored_drawing: Vec<String>,
    pub decorations: Vec<String>,
    pub shape: Vec<String>,
    pub function: Vec<String>,
    pub paste: Vec<String>,
    pub paste_material: Vec<String>,
    pub glaze: Vec<String>,
    pub production_place: Vec<String>,
    pub production_place_location: Vec<String>,
    pub inscriptions: Vec<String>,
    #[serde(
        rename = "lda_topics",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub lda_topics: Option<Vec<TopicLabel>>,
    #[serde(rename = "extraction_quality")]
    pub extraction_quality: ExtractionQuality,
    #[serde(rename = "quality_score")]
    pub quality_score: f64,
}

// =============================================================================
// MANAGEMENT METADATA
// =============================================================================

/// Consolidated period information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub periods: Vec<String>,
    pub years: Vec<i32>,
    pub dynasty_mapping: BTreeMap<i32, String>,
    pub century: Option<String>,
    pub date_range: Option<String>,
}

/// Rights and timestamps copied from the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreservationRecords {
    pub rights: JsonValue,
    pub timestamp_created: JsonValue,
    pub timestamp_updated: JsonValue,
    pub quality_score: f64,
}

/// Identification, dating, and provenance of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagementMetadata {
    pub title: Vec<String>,
    #[serde(rename = "Used_Titles")]
    pub used_titles: Vec<String>,
    pub identifier: String,
    pub period: Vec<String>,
    pub years: Vec<i32>,
    pub period_summary: PeriodSummary,
    pub completeness_level: JsonValue,
    pub providing_institution: JsonValue,
    pub providing_institution_country: JsonValue,
    #[serde(rename = "DateofStorage")]
    pub date_of_storage: JsonValue,
    pub preservation_records: PreservationRecords,
}

// =============================================================================
// EXTENDED METADATA
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Digitalization {
    pub edm_is_shown_at: JsonValue,
    pub edm_is_shown_by: JsonValue,
    pub edm_preview: JsonValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalData {
    pub guid: JsonValue,
    pub europeana_collection_name: JsonValue,
    pub provider: JsonValue,
    #[serde(rename = "type")]
    pub kind: JsonValue,
    pub language: JsonValue,
}

/// People, collections, and digitisation links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtendedMetadata {
    pub related_people: Vec<String>,
    pub related_collections: Vec<String>,
    pub digitalization: Digitalization,
    #[serde(rename = "DocumentationsAPI")]
    pub documentations_api: JsonValue,
    pub original_data: OriginalData,
}

// =============================================================================
// RESULT
// =============================================================================

/// Processing trailer: either the preprocessing metadata or the error that
/// degraded the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessingMetadata {
    Completed {
        processed_date: String,
        preprocessing_metadata: JsonValue,
    },
    Failed {
        processed_date: String,
        error: String,
    },
}

impl ProcessingMetadata {
    pub fn processed_date(&self) -> &str {
        match self {
            Self::Completed { processed_date, .. } | Self::Failed { processed_date, .. } => {
                processed_date
            }
        }
    }
}

/// Per-item output bundle.
///
/// A degraded result keeps the identifier, serializes each metadata section
/// as `{}`, and carries the error in `ProcessingMetadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub id: String,
    #[serde(rename = "DescriptiveMetadata", with = "section")]
    pub descriptive: Option<DescriptiveMetadata>,
    #[serde(rename = "Metadata_for_Management", with = "section")]
    pub management: Option<ManagementMetadata>,
    #[serde(rename = "ExtendedMetadata", with = "section")]
    pub extended: Option<ExtendedMetadata>,
    #[serde(rename = "ProcessingMetadata")]
    pub processing: ProcessingMetadata,
}

impl ExtractionResult {
    /// Result for an item whose bundle construction failed.
    pub fn degraded(id: impl Into<String>, processed_date: String, error: impl ToString) -> Self {
        Self {
            id: id.into(),
            descriptive: None,
            management: None,
            extended: None,
            processing: ProcessingMetadata::Failed {
                processed_date,
                error: error.to_string(),
            },
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.processing, ProcessingMetadata::Failed { .. })
    }

    /// Error that degraded the item, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.processing {
            ProcessingMetadata::Failed { error, .. } => Some(error),
            ProcessingMetadata::Completed { .. } => None,
        }
    }

    pub fn quality_score(&self) -> Option<f64> {
        self.descriptive.as_ref().map(|d| d.quality_score)
    }
}

/// Serde adapter writing `None` as an empty object and reading `{}` back as `None`.
mod section {
    use serde::de::DeserializeOwned;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value as JsonValue;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        match &value {
            JsonValue::Null => Ok(None),
            JsonValue::Object(map) if map.is_empty() => Ok(None),
            _ => serde_json::from_value(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
