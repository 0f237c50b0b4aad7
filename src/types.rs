//! Common Types and Constants
//!
//! Shared data structures used across the scheduling modules.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SrsError;

// ==================== Constants ====================

/// Review interval ladder in seconds: 1h, 8h, 1d, 3d, 1w, 2w.
///
/// A `know` verdict that lands on level `n > 0` schedules the next review
/// `REVIEW_INTERVALS_SECS[n - 1]` seconds later.
pub const REVIEW_INTERVALS_SECS: [i64; 6] = [
    60 * 60,
    8 * 60 * 60,
    24 * 60 * 60,
    3 * 24 * 60 * 60,
    7 * 24 * 60 * 60,
    14 * 24 * 60 * 60,
];

/// Highest mastery level, one rung per review interval
pub const MAX_LEVEL: u8 = REVIEW_INTERVALS_SECS.len() as u8;

/// Retry interval after a failure (or a `know` that stays on level 0)
pub const RETRY_INTERVAL_SECS: i64 = 5 * 60;

/// Lapses at which an item counts as a leech
pub const LEECH_THRESHOLD: u32 = 5;

/// Levels dropped on `forgot`
pub const FORGOT_PENALTY: u8 = 2;

/// Levels dropped on `dont_know`
pub const DONT_KNOW_PENALTY: u8 = 1;

/// Closed-class categories mastered after a single correct recall
pub const FOUNDATIONAL_CATEGORIES: [Category; 5] = [
    Category::Interrogative,
    Category::PersonalPronoun,
    Category::Number,
    Category::Time,
    Category::Currency,
];

// ==================== Category ====================

/// Content category of a learning item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Open-ended vocabulary, needs the full interval ladder
    #[default]
    Vocabulary,
    Interrogative,
    PersonalPronoun,
    Number,
    Time,
    Currency,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vocabulary => "vocabulary",
            Category::Interrogative => "interrogative",
            Category::PersonalPronoun => "personal_pronoun",
            Category::Number => "number",
            Category::Time => "time",
            Category::Currency => "currency",
        }
    }

    /// Closed grammatical classes follow the "known once" mastery rule.
    pub fn is_foundational(&self) -> bool {
        FOUNDATIONAL_CATEGORIES.contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vocabulary" => Ok(Category::Vocabulary),
            "interrogative" => Ok(Category::Interrogative),
            "personal_pronoun" => Ok(Category::PersonalPronoun),
            "number" => Ok(Category::Number),
            "time" => Ok(Category::Time),
            "currency" => Ok(Category::Currency),
            _ => Err(SrsError::UnknownCategory(s.to_string())),
        }
    }
}

// ==================== Verdict ====================

/// Self-reported recall outcome for a shown card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Know,
    Forgot,
    DontKnow,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Know => "know",
            Verdict::Forgot => "forgot",
            Verdict::DontKnow => "dont_know",
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Verdict::Know)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = SrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "know" => Ok(Verdict::Know),
            "forgot" => Ok(Verdict::Forgot),
            "dont_know" | "dont-know" | "don't know" | "dont know" => Ok(Verdict::DontKnow),
            _ => Err(SrsError::UnknownVerdict(s.to_string())),
        }
    }
}

// ==================== Learning Item ====================

/// A scheduled flashcard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningItem {
    /// Opaque identifier, never changed by the engine
    pub id: String,
    /// Word or phrase being learned
    pub term: String,
    /// Gloss shown on the back of the card
    #[serde(default)]
    pub translation: String,
    /// Rung on the interval ladder, `0..=MAX_LEVEL`
    pub mastery_level: u8,
    /// `None` until the first verdict
    pub last_reviewed_at: Option<DateTime<Utc>>,
    /// Only meaningful once `last_reviewed_at` is set
    pub next_review_at: Option<DateTime<Utc>>,
    pub know_count: u32,
    pub know_streak: u32,
    /// Failures recorded above level 0, reset by `know`
    pub lapses: u32,
    /// Cached mastery predicate, overwritten on every transition
    pub is_mastered: bool,
    pub category: Category,
}

impl LearningItem {
    /// Fresh item in the zeroed initial state
    pub fn new(id: impl Into<String>, term: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            term: term.into(),
            translation: String::new(),
            mastery_level: 0,
            last_reviewed_at: None,
            next_review_at: None,
            know_count: 0,
            know_streak: 0,
            lapses: 0,
            is_mastered: false,
            category,
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn is_new(&self) -> bool {
        self.last_reviewed_at.is_none()
    }

    /// Reviewed before and scheduled at or before `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match (self.last_reviewed_at, self.next_review_at) {
            (Some(_), Some(next)) => next <= now,
            _ => false,
        }
    }
}
