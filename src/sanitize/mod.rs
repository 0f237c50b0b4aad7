//! Record Sanitization
//!
//! Repairs persisted items before they reach the scheduler.
//!
//! Functions:
//! - Mastery level clamping
//! - Review timestamp consistency
//! - Cached mastery flag recomputation

use crate::config::SchedulerConfig;
use crate::mastery::is_mastered_with;
use crate::types::LearningItem;

/// 检查记录是否违反不变量
pub fn has_invalid_state(item: &LearningItem, config: &SchedulerConfig) -> bool {
    item.mastery_level > config.max_level()
        || (item.last_reviewed_at.is_none() && item.next_review_at.is_some())
        || (item.last_reviewed_at.is_some() && item.next_review_at.is_none())
        || item.is_mastered != is_mastered_with(item, config)
}

/// 修复记录，返回是否有改动
pub fn sanitize_item(item: &mut LearningItem, config: &SchedulerConfig) -> bool {
    if !has_invalid_state(item, config) {
        return false;
    }

    let original_level = item.mastery_level;
    item.mastery_level = item.mastery_level.min(config.max_level());

    // 从未复习过的条目不应有排期；复习过但缺排期的条目立即到期
    match item.last_reviewed_at {
        None => item.next_review_at = None,
        Some(reviewed) => {
            item.next_review_at.get_or_insert(reviewed);
        }
    }

    item.is_mastered = is_mastered_with(item, config);

    tracing::warn!(
        item_id = %item.id,
        original_level,
        level = item.mastery_level,
        "repaired inconsistent learning item"
    );
    true
}

/// 批量修复，返回被修复的条目数
pub fn sanitize_pool(pool: &mut [LearningItem], config: &SchedulerConfig) -> usize {
    pool.iter_mut()
        .map(|item| sanitize_item(item, config))
        .filter(|&changed| changed)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{classify, SelectionTier};
    use crate::types::{Category, MAX_LEVEL};
    use chrono::{TimeZone, Utc};

    fn config() -> &'static SchedulerConfig {
        SchedulerConfig::reference()
    }

    // ==================== has_invalid_state 测试 ====================

    #[test]
    fn test_fresh_item_is_valid() {
        let item = LearningItem::new("a", "Tisch", Category::Vocabulary);
        assert!(!has_invalid_state(&item, config()));
    }

    #[test]
    fn test_detects_stale_mastery_flag() {
        let mut item = LearningItem::new("a", "Tisch", Category::Vocabulary);
        item.is_mastered = true;
        assert!(has_invalid_state(&item, config()));
    }

    // ==================== sanitize_item 测试 ====================

    #[test]
    fn test_clamps_level_and_recomputes_flag() {
        let mut item = LearningItem::new("a", "Tisch", Category::Vocabulary);
        item.mastery_level = 9;
        item.last_reviewed_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert!(sanitize_item(&mut item, config()));
        assert_eq!(item.mastery_level, MAX_LEVEL);
        assert!(item.is_mastered);
    }

    #[test]
    fn test_clears_schedule_of_unreviewed_item() {
        let mut item = LearningItem::new("a", "Tisch", Category::Vocabulary);
        item.next_review_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert!(sanitize_item(&mut item, config()));
        assert!(item.next_review_at.is_none());
    }

    #[test]
    fn test_reviewed_item_without_schedule_becomes_due() {
        let reviewed = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut item = LearningItem::new("a", "Tisch", Category::Vocabulary);
        item.mastery_level = 2;
        item.last_reviewed_at = Some(reviewed);
        assert!(has_invalid_state(&item, config()));
        assert_eq!(classify(&item, reviewed), None);

        assert!(sanitize_item(&mut item, config()));
        assert_eq!(item.next_review_at, Some(reviewed));
        assert_eq!(classify(&item, reviewed), Some(SelectionTier::Due));
        assert!(!has_invalid_state(&item, config()));
    }

    #[test]
    fn test_valid_item_untouched() {
        let mut item = LearningItem::new("a", "Tisch", Category::Vocabulary);
        let before = item.clone();
        assert!(!sanitize_item(&mut item, config()));
        assert_eq!(item, before);
    }

    #[test]
    fn test_sanitize_pool_counts_repairs() {
        let mut broken = LearningItem::new("b", "drei", Category::Number);
        broken.know_count = 1;
        let mut pool = vec![LearningItem::new("a", "Tisch", Category::Vocabulary), broken];
        assert_eq!(sanitize_pool(&mut pool, config()), 1);
        assert!(pool[1].is_mastered);
    }
}
