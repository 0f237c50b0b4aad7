//! Scheduler configuration
//!
//! The reference behaviour uses the constants in [`crate::types`]; hosts that
//! want to tune the ladder can build a [`SchedulerConfig`] by hand, from JSON,
//! or from environment overrides.

use std::sync::OnceLock;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{SrsError, SrsResult};
use crate::types::{
    DONT_KNOW_PENALTY, FORGOT_PENALTY, LEECH_THRESHOLD, REVIEW_INTERVALS_SECS,
    RETRY_INTERVAL_SECS,
};

/// Longest interval a config may schedule: ten years
pub const MAX_INTERVAL_SECS: i64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerConfig {
    /// Increasing interval ladder in seconds; its length is the max level
    pub review_intervals_secs: Vec<i64>,
    pub retry_interval_secs: i64,
    pub leech_threshold: u32,
    pub forgot_penalty: u8,
    pub dont_know_penalty: u8,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            review_intervals_secs: REVIEW_INTERVALS_SECS.to_vec(),
            retry_interval_secs: RETRY_INTERVAL_SECS,
            leech_threshold: LEECH_THRESHOLD,
            forgot_penalty: FORGOT_PENALTY,
            dont_know_penalty: DONT_KNOW_PENALTY,
        }
    }
}

impl SchedulerConfig {
    /// Shared reference configuration used by the free functions.
    pub fn reference() -> &'static SchedulerConfig {
        static REFERENCE: OnceLock<SchedulerConfig> = OnceLock::new();
        REFERENCE.get_or_init(SchedulerConfig::default)
    }

    pub fn from_env() -> SrsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; absent or unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> SrsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(intervals) = lookup("SRS_REVIEW_INTERVALS").and_then(|v| parse_intervals(&v)) {
            config.review_intervals_secs = intervals;
        }

        config.retry_interval_secs = lookup("SRS_RETRY_INTERVAL_SECS")
            .and_then(|value| value.trim().parse::<i64>().ok())
            .unwrap_or(config.retry_interval_secs);

        config.leech_threshold = lookup("SRS_LEECH_THRESHOLD")
            .and_then(|value| value.trim().parse::<u32>().ok())
            .unwrap_or(config.leech_threshold);

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SrsResult<()> {
        if self.review_intervals_secs.is_empty() {
            return Err(SrsError::InvalidConfig(
                "review interval ladder is empty".to_string(),
            ));
        }
        if self.review_intervals_secs.len() > u8::MAX as usize {
            return Err(SrsError::InvalidConfig(format!(
                "review interval ladder has {} rungs, at most {} allowed",
                self.review_intervals_secs.len(),
                u8::MAX
            )));
        }
        if let Some(bad) = self.review_intervals_secs.iter().find(|&&secs| secs <= 0) {
            return Err(SrsError::InvalidConfig(format!(
                "review intervals must be positive, got {bad}"
            )));
        }
        if let Some(bad) = self
            .review_intervals_secs
            .iter()
            .find(|&&secs| secs > MAX_INTERVAL_SECS)
        {
            return Err(SrsError::InvalidConfig(format!(
                "review intervals must not exceed {MAX_INTERVAL_SECS}s, got {bad}"
            )));
        }
        if self.review_intervals_secs.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SrsError::InvalidConfig(
                "review intervals must be strictly increasing".to_string(),
            ));
        }
        if self.retry_interval_secs <= 0 || self.retry_interval_secs > MAX_INTERVAL_SECS {
            return Err(SrsError::InvalidConfig(format!(
                "retry interval must be within 1..={MAX_INTERVAL_SECS}s, got {}",
                self.retry_interval_secs
            )));
        }
        if self.leech_threshold == 0 {
            return Err(SrsError::InvalidConfig(
                "leech threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn max_level(&self) -> u8 {
        self.review_intervals_secs.len().min(u8::MAX as usize) as u8
    }

    pub fn retry_interval(&self) -> Duration {
        bounded_seconds(self.retry_interval_secs)
    }

    /// Interval for an item that just reached `level` on a `know`.
    ///
    /// Level 0 gets the retry interval; levels past the ladder reuse its last rung.
    pub fn interval_for_level(&self, level: u8) -> Duration {
        if level == 0 {
            return self.retry_interval();
        }
        let last = self.review_intervals_secs.len().saturating_sub(1);
        let idx = (level as usize - 1).min(last);
        self.review_intervals_secs
            .get(idx)
            .map(|&secs| bounded_seconds(secs))
            .unwrap_or_else(|| self.retry_interval())
    }
}

/// Clamped into `0..=MAX_INTERVAL_SECS`; public fields can bypass `validate`.
fn bounded_seconds(secs: i64) -> Duration {
    Duration::try_seconds(secs.clamp(0, MAX_INTERVAL_SECS)).unwrap_or_else(Duration::zero)
}

fn parse_intervals(raw: &str) -> Option<Vec<i64>> {
    raw.split(',')
        .map(|part| part.trim().parse::<i64>().ok())
        .collect()
}
