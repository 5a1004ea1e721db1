//! Concurrent batch extraction.
//!
//! Items run on the blocking pool with at most `concurrency` in flight. All
//! items share one mapper, so the whole batch sees a single taxonomy
//! snapshot. Results come back in input order.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sherd_core::defaults::HIGH_QUALITY_THRESHOLD;
use sherd_core::models::{ExtractionResult, TopicLabel};
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::mapper::{processed_date, record_id, MetadataMapper};

/// One record queued for extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    pub record: JsonValue,
    /// Assembled free text; the mapper assembles it when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<TopicLabel>>,
}

impl BatchItem {
    pub fn new(record: JsonValue) -> Self {
        Self {
            record,
            text: None,
            topics: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_topics(mut self, topics: Vec<TopicLabel>) -> Self {
        self.topics = Some(topics);
        self
    }
}

impl From<JsonValue> for BatchItem {
    fn from(record: JsonValue) -> Self {
        Self::new(record)
    }
}

/// Results of one batch with summary counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// One result per input item, in input order.
    pub results: Vec<ExtractionResult>,
    pub processed: usize,
    pub degraded: usize,
    /// Items with a quality score above 0.5.
    pub high_quality: usize,
    pub duration_ms: u64,
}

impl BatchReport {
    fn new(results: Vec<ExtractionResult>, duration_ms: u64) -> Self {
        let degraded = results.iter().filter(|r| r.is_degraded()).count();
        let high_quality = results
            .iter()
            .filter_map(ExtractionResult::quality_score)
            .filter(|score| *score > HIGH_QUALITY_THRESHOLD)
            .count();
        Self {
            processed: results.len(),
            degraded,
            high_quality,
            duration_ms,
            results,
        }
    }
}

/// Extract every item, at most `mapper.config().concurrency` at a time.
pub async fn process_batch(mapper: Arc<MetadataMapper>, items: Vec<BatchItem>) -> BatchReport {
    let start = Instant::now();
    let total = items.len();
    let concurrency = mapper.config().concurrency.max(1);

    info!(
        subsystem = "extract",
        component = "batch",
        op = "process_batch",
        item_count = total,
        concurrency,
        taxonomy_version = mapper.taxonomy_version(),
        "Starting batch"
    );

    let ids: Vec<String> = items.iter().map(|item| record_id(&item.record)).collect();
    let mut slots: Vec<Option<ExtractionResult>> = (0..total).map(|_| None).collect();
    let mut pending = items.into_iter().enumerate();
    let mut tasks = JoinSet::new();

    loop {
        while tasks.len() < concurrency {
            let Some((idx, item)) = pending.next() else {
                break;
            };
            let mapper = Arc::clone(&mapper);
            tasks.spawn_blocking(move || {
                let result =
                    mapper.process_value(item.record, item.text.as_deref(), item.topics.as_deref());
                (idx, result)
            });
        }

        match tasks.join_next().await {
            Some(Ok((idx, result))) => slots[idx] = Some(result),
            Some(Err(e)) => {
                error!(
                    subsystem = "extract",
                    component = "batch",
                    error = ?e,
                    "Extraction task panicked"
                );
            }
            None => break,
        }
    }

    let results: Vec<ExtractionResult> = slots
        .into_iter()
        .zip(ids)
        .map(|(slot, id)| {
            slot.unwrap_or_else(|| {
                ExtractionResult::degraded(id, processed_date(), "extraction task did not complete")
            })
        })
        .collect();

    let report = BatchReport::new(results, start.elapsed().as_millis() as u64);

    info!(
        subsystem = "extract",
        component = "batch",
        op = "process_batch",
        result_count = report.processed,
        degraded = report.degraded,
        high_quality = report.high_quality,
        duration_ms = report.duration_ms,
        "Batch complete"
    );

    report
}
