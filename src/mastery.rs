//! Mastery Ladder
//!
//! State transition applied after each verdict, plus the mastery and leech
//! predicates.
//!
//! | verdict     | level          | knowCount | knowStreak | lapses               |
//! |-------------|----------------|-----------|------------|----------------------|
//! | `know`      | `+1`, capped   | `+1`      | `+1`       | reset                |
//! | `forgot`    | `-2`, floor 0  | -         | reset      | `+1` if level was >0 |
//! | `dont_know` | `-1`, floor 0  | -         | reset      | `+1` if level was >0 |
//!
//! Every function here is pure: items come in by reference and a new value
//! goes out.

use chrono::{DateTime, Utc};

use crate::config::SchedulerConfig;
use crate::types::{LearningItem, Verdict};

// ==================== Predicates ====================

/// Mastery under the reference configuration
pub fn is_mastered(item: &LearningItem) -> bool {
    is_mastered_with(item, SchedulerConfig::reference())
}

/// Foundational items are mastered once known; everything else must climb
/// the whole ladder.
pub fn is_mastered_with(item: &LearningItem, config: &SchedulerConfig) -> bool {
    if item.category.is_foundational() {
        item.know_count >= 1
    } else {
        item.mastery_level >= config.max_level()
    }
}

/// Leech check under the reference configuration
pub fn is_leech(item: &LearningItem) -> bool {
    is_leech_with(item, SchedulerConfig::reference())
}

pub fn is_leech_with(item: &LearningItem, config: &SchedulerConfig) -> bool {
    item.lapses >= config.leech_threshold
}

/// All leeches in a pool, in pool order
pub fn leeches<'a>(pool: &'a [LearningItem], config: &SchedulerConfig) -> Vec<&'a LearningItem> {
    pool.iter().filter(|item| is_leech_with(item, config)).collect()
}

// ==================== Transition ====================

/// Apply a verdict under the reference configuration
pub fn apply_verdict(item: &LearningItem, verdict: Verdict, now: DateTime<Utc>) -> LearningItem {
    apply_verdict_with(item, verdict, now, SchedulerConfig::reference())
}

pub fn apply_verdict_with(
    item: &LearningItem,
    verdict: Verdict,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> LearningItem {
    let max_level = config.max_level();
    // persisted records may carry an out-of-range level
    let prior_level = item.mastery_level.min(max_level);
    let mut next = item.clone();

    match verdict {
        Verdict::Know => {
            next.mastery_level = prior_level.saturating_add(1).min(max_level);
            next.know_count = item.know_count.saturating_add(1);
            next.know_streak = item.know_streak.saturating_add(1);
            next.lapses = 0;
        }
        Verdict::Forgot | Verdict::DontKnow => {
            let penalty = if verdict == Verdict::Forgot {
                config.forgot_penalty
            } else {
                config.dont_know_penalty
            };
            next.mastery_level = prior_level.saturating_sub(penalty);
            next.know_streak = 0;
            if prior_level > 0 {
                next.lapses = item.lapses.saturating_add(1);
            }
        }
    }

    let interval = if verdict.is_failure() || next.mastery_level == 0 {
        config.retry_interval()
    } else {
        config.interval_for_level(next.mastery_level)
    };

    next.last_reviewed_at = Some(now);
    next.next_review_at = Some(
        now.checked_add_signed(interval)
            .unwrap_or(DateTime::<Utc>::MAX_UTC),
    );
    next.is_mastered = is_mastered_with(&next, config);

    tracing::debug!(
        item_id = %item.id,
        verdict = %verdict,
        from_level = prior_level,
        to_level = next.mastery_level,
        lapses = next.lapses,
        "verdict applied"
    );

    if next.is_mastered && !item.is_mastered {
        tracing::info!(item_id = %item.id, category = %item.category, "item mastered");
    }
    if is_leech_with(&next, config) && !is_leech_with(item, config) {
        tracing::warn!(item_id = %item.id, lapses = next.lapses, "item became a leech");
    }

    next
}
