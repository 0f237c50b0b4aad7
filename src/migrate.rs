//! Legacy record migration
//!
//! Items saved by older clients may lack `category` and any of the counters.
//! They are upgraded here: missing counters default to zero, the category is
//! inferred from the term, and the result is sanitized.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::category::infer_category;
use crate::config::SchedulerConfig;
use crate::error::SrsResult;
use crate::sanitize::sanitize_item;
use crate::types::{Category, LearningItem};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyLearningItem {
    pub id: String,
    pub term: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub mastery_level: u8,
    #[serde(default)]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_review_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub know_count: u32,
    #[serde(default)]
    pub know_streak: u32,
    #[serde(default)]
    pub lapses: u32,
    #[serde(default)]
    pub category: Option<Category>,
}

pub fn migrate_item(legacy: LegacyLearningItem, config: &SchedulerConfig) -> LearningItem {
    let category = legacy
        .category
        .unwrap_or_else(|| infer_category(&legacy.term));

    let mut item = LearningItem {
        id: legacy.id,
        term: legacy.term,
        translation: legacy.translation,
        mastery_level: legacy.mastery_level,
        last_reviewed_at: legacy.last_reviewed_at,
        next_review_at: legacy.next_review_at,
        know_count: legacy.know_count,
        know_streak: legacy.know_streak,
        lapses: legacy.lapses,
        is_mastered: false,
        category,
    };
    sanitize_item(&mut item, config);
    item
}

/// Parse a persisted JSON array of items and upgrade each one.
pub fn migrate_json(json: &str, config: &SchedulerConfig) -> SrsResult<Vec<LearningItem>> {
    let legacy: Vec<LegacyLearningItem> = serde_json::from_str(json)?;
    let total = legacy.len();
    let items: Vec<LearningItem> = legacy
        .into_iter()
        .map(|item| migrate_item(item, config))
        .collect();
    tracing::info!(total, "migrated legacy learning items");
    Ok(items)
}
