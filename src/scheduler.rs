//! Scheduler Facade
//!
//! Bundles a [`SchedulerConfig`] with a seedable random source so a practice
//! UI can drive the select → show → verdict → update loop through one value.
//!
//! The scheduler never owns the item collection; the host keeps the
//! authoritative pool and swaps in each returned item.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SchedulerConfig;
use crate::error::SrsResult;
use crate::mastery::{apply_verdict_with, is_leech_with, is_mastered_with, leeches};
use crate::selection::{select_next_with_tier, SelectionTier};
use crate::stats::PoolStats;
use crate::types::{LearningItem, Verdict};

pub struct Scheduler {
    config: SchedulerConfig,
    /// Tie-break source for the new and fallback tiers
    rng: ChaCha8Rng,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Reference configuration, seeded from the system clock
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
            rng: ChaCha8Rng::seed_from_u64(time_seed()),
        }
    }

    /// Custom configuration, validated before use
    pub fn with_config(config: SchedulerConfig) -> SrsResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(time_seed()),
        })
    }

    /// Reference configuration with a fixed seed (for testing)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: SchedulerConfig::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Set random seed (for testing)
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn select_next<'a>(
        &mut self,
        pool: &'a [LearningItem],
        exclude_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Option<&'a LearningItem> {
        self.select_next_with_tier(pool, exclude_id, now)
            .map(|(item, _)| item)
    }

    pub fn select_next_with_tier<'a>(
        &mut self,
        pool: &'a [LearningItem],
        exclude_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Option<(&'a LearningItem, SelectionTier)> {
        select_next_with_tier(pool, exclude_id, now, &mut self.rng)
    }

    pub fn apply_verdict(
        &self,
        item: &LearningItem,
        verdict: Verdict,
        now: DateTime<Utc>,
    ) -> LearningItem {
        apply_verdict_with(item, verdict, now, &self.config)
    }

    pub fn is_mastered(&self, item: &LearningItem) -> bool {
        is_mastered_with(item, &self.config)
    }

    pub fn is_leech(&self, item: &LearningItem) -> bool {
        is_leech_with(item, &self.config)
    }

    pub fn leeches<'a>(&self, pool: &'a [LearningItem]) -> Vec<&'a LearningItem> {
        leeches(pool, &self.config)
    }

    pub fn stats(&self, pool: &[LearningItem], now: DateTime<Utc>) -> PoolStats {
        PoolStats::collect(pool, now, &self.config)
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SrsError;
    use crate::types::Category;
    use chrono::TimeZone;

    fn pool() -> Vec<LearningItem> {
        (0..10)
            .map(|i| LearningItem::new(format!("w{i}"), format!("Wort {i}"), Category::Vocabulary))
            .collect()
    }

    #[test]
    fn test_seed_reproducibility() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let items = pool();
        let mut a = Scheduler::with_seed(42);
        let mut b = Scheduler::with_seed(42);
        for _ in 0..10 {
            assert_eq!(
                a.select_next(&items, None, now).map(|i| &i.id),
                b.select_next(&items, None, now).map(|i| &i.id)
            );
        }
    }

    #[test]
    fn test_set_seed_restarts_sequence() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let items = pool();
        let mut scheduler = Scheduler::with_seed(9);
        let first: Vec<String> = (0..5)
            .filter_map(|_| scheduler.select_next(&items, None, now).map(|i| i.id.clone()))
            .collect();
        scheduler.set_seed(9);
        let second: Vec<String> = (0..5)
            .filter_map(|_| scheduler.select_next(&items, None, now).map(|i| i.id.clone()))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_with_config_validates() {
        let bad = SchedulerConfig {
            review_intervals_secs: vec![],
            ..Default::default()
        };
        assert!(matches!(
            Scheduler::with_config(bad),
            Err(SrsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_uses_own_config() {
        let config = SchedulerConfig {
            review_intervals_secs: vec![60],
            leech_threshold: 1,
            ..Default::default()
        };
        let scheduler = Scheduler::with_config(config).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let item = LearningItem::new("a", "Haus", Category::Vocabulary);

        let known = scheduler.apply_verdict(&item, Verdict::Know, now);
        assert!(scheduler.is_mastered(&known));

        let lapsed = scheduler.apply_verdict(&known, Verdict::Forgot, now);
        assert!(scheduler.is_leech(&lapsed));
        assert_eq!(scheduler.leeches(std::slice::from_ref(&lapsed)).len(), 1);
    }
}
