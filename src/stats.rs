//! Pool statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::mastery::{is_leech_with, is_mastered_with};
use crate::types::LearningItem;

/// Summary of a practice pool at a point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStats {
    pub total: usize,
    /// Never reviewed
    pub new: usize,
    /// Reviewed and due now
    pub due: usize,
    /// Reviewed, not mastered
    pub learning: usize,
    pub mastered: usize,
    pub leeches: usize,
    /// Earliest review still in the future
    pub next_upcoming_at: Option<DateTime<Utc>>,
}

impl PoolStats {
    pub fn collect(pool: &[LearningItem], now: DateTime<Utc>, config: &SchedulerConfig) -> Self {
        let mut stats = PoolStats {
            total: pool.len(),
            ..Default::default()
        };

        for item in pool {
            // mastery is recomputed, the cached flag may be stale
            let mastered = is_mastered_with(item, config);
            if mastered {
                stats.mastered += 1;
            }
            if is_leech_with(item, config) {
                stats.leeches += 1;
            }

            if item.is_new() {
                stats.new += 1;
                continue;
            }
            if !mastered {
                stats.learning += 1;
            }
            if item.is_due(now) {
                stats.due += 1;
            } else if let Some(next) = item.next_review_at {
                stats.next_upcoming_at = Some(match stats.next_upcoming_at {
                    Some(current) => current.min(next),
                    None => next,
                });
            }
        }

        stats
    }
}
