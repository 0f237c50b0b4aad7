//! Next-Card Selection
//!
//! Candidates are grouped into tiers, the first non-empty tier wins:
//!
//! 1. **Due** - reviewed and `nextReviewAt <= now`, weakest level first
//! 2. **New** - never reviewed, uniform random
//! 3. **Upcoming** - reviewed but not yet due, soonest first
//! 4. **Fallback** - uniform random over whatever is left
//!
//! The just-answered item is excluded whenever an alternative exists, and a
//! non-empty pool always yields an item.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::LearningItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTier {
    Due,
    New,
    Upcoming,
    Fallback,
}

/// Tier an item belongs to at `now`.
///
/// Returns `None` for inconsistent records (reviewed but never scheduled);
/// those can only be picked by the fallback tier.
pub fn classify(item: &LearningItem, now: DateTime<Utc>) -> Option<SelectionTier> {
    match (item.last_reviewed_at, item.next_review_at) {
        (None, _) => Some(SelectionTier::New),
        (Some(_), Some(next)) if next <= now => Some(SelectionTier::Due),
        (Some(_), Some(_)) => Some(SelectionTier::Upcoming),
        (Some(_), None) => None,
    }
}

/// Pick the next card to show, skipping `exclude_id` when possible.
pub fn select_next<'a, R>(
    pool: &'a [LearningItem],
    exclude_id: Option<&str>,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<&'a LearningItem>
where
    R: Rng + ?Sized,
{
    select_next_with_tier(pool, exclude_id, now, rng).map(|(item, _)| item)
}

/// Same as [`select_next`], also reporting which tier produced the pick.
pub fn select_next_with_tier<'a, R>(
    pool: &'a [LearningItem],
    exclude_id: Option<&str>,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<(&'a LearningItem, SelectionTier)>
where
    R: Rng + ?Sized,
{
    match pool {
        [] => return None,
        [only] => {
            let tier = classify(only, now).unwrap_or(SelectionTier::Fallback);
            return Some((only, tier));
        }
        _ => {}
    }

    let candidates: Vec<&LearningItem> = match exclude_id {
        Some(id) => pool.iter().filter(|item| item.id != id).collect(),
        None => pool.iter().collect(),
    };

    if candidates.is_empty() {
        // every entry carries the excluded id; repeating beats showing nothing
        tracing::warn!(
            pool_size = pool.len(),
            "all candidates excluded, repeating an item"
        );
        return pool
            .choose(rng)
            .map(|item| (item, classify(item, now).unwrap_or(SelectionTier::Fallback)));
    }

    let (item, tier) = pick_from_tiers(&candidates, now, rng)?;
    tracing::debug!(
        item_id = %item.id,
        tier = ?tier,
        candidates = candidates.len(),
        "next item selected"
    );
    Some((item, tier))
}

fn pick_from_tiers<'a, R>(
    candidates: &[&'a LearningItem],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<(&'a LearningItem, SelectionTier)>
where
    R: Rng + ?Sized,
{
    // min_by_key keeps the first of equal keys, so ties follow pool order
    let due = candidates
        .iter()
        .copied()
        .filter(|item| classify(item, now) == Some(SelectionTier::Due))
        .min_by_key(|item| item.mastery_level);
    if let Some(item) = due {
        return Some((item, SelectionTier::Due));
    }

    let fresh: Vec<&LearningItem> = candidates
        .iter()
        .copied()
        .filter(|item| item.is_new())
        .collect();
    if let Some(item) = fresh.choose(rng) {
        return Some((*item, SelectionTier::New));
    }

    let upcoming = candidates
        .iter()
        .copied()
        .filter_map(|item| {
            (classify(item, now) == Some(SelectionTier::Upcoming))
                .then_some(item)
                .zip(item.next_review_at)
        })
        .min_by_key(|(_, next)| *next);
    if let Some((item, _)) = upcoming {
        return Some((item, SelectionTier::Upcoming));
    }

    let item = candidates.choose(rng)?;
    tracing::warn!(
        item_id = %item.id,
        "no schedulable candidate, falling back to random pick"
    );
    Some((*item, SelectionTier::Fallback))
}
