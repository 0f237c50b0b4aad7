//! # flashcard-srs - 词汇卡片间隔重复调度引擎
//!
//! 本 crate 提供纯 Rust 实现的复习调度逻辑:
//!
//! - **Next-card selection** - 到期 / 新词 / 即将到期 三级优先选择
//! - **Mastery ladder** - 根据 know / forgot / dont_know 更新掌握等级与复习时间
//! - **Leech detection** - 识别反复遗忘的"顽固词"
//! - **Category inference** - 为旧数据补全词类标签
//!
//! ## 设计理念
//!
//! - **纯函数** - 所有操作接收完整输入并返回新值，不做 I/O
//! - **可注入** - 时钟 (`now`) 与随机源均由调用方传入，测试可完全确定
//! - **总是有结果** - 非空词池必定返回一个条目，数值字段总是被钳制在合法范围
//!
//! ## 模块结构
//!
//! - [`types`] - 公共类型和常量
//! - [`config`] - 调度参数 (间隔阶梯、顽固词阈值、重试间隔)
//! - [`mastery`] - 掌握判定与状态转移
//! - [`selection`] - 下一张卡片的选择
//! - [`category`] - 词类推断
//! - [`sanitize`] - 持久化记录修复
//! - [`migrate`] - 旧版记录迁移
//! - [`stats`] - 词池统计
//! - [`scheduler`] - 带随机源的调度器封装
//!
//! ## 使用示例
//!
//! ```rust
//! use chrono::Utc;
//! use flashcard_srs::{Category, LearningItem, Scheduler, Verdict};
//!
//! let mut scheduler = Scheduler::with_seed(42);
//! let mut pool = vec![
//!     LearningItem::new("w1", "Haus", Category::Vocabulary),
//!     LearningItem::new("w2", "wer", Category::Interrogative),
//! ];
//!
//! let now = Utc::now();
//! let picked = scheduler.select_next(&pool, None, now).unwrap().clone();
//! let updated = scheduler.apply_verdict(&picked, Verdict::Know, now);
//! if let Some(slot) = pool.iter_mut().find(|item| item.id == updated.id) {
//!     *slot = updated;
//! }
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod category;
pub mod config;
pub mod error;
pub mod mastery;
pub mod migrate;
pub mod sanitize;
pub mod scheduler;
pub mod selection;
pub mod stats;
pub mod types;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

pub use category::infer_category;
pub use config::SchedulerConfig;
pub use error::{SrsError, SrsResult};
pub use mastery::{
    apply_verdict, apply_verdict_with, is_leech, is_leech_with, is_mastered, is_mastered_with,
    leeches,
};
pub use migrate::{migrate_item, migrate_json, LegacyLearningItem};
pub use sanitize::{sanitize_item, sanitize_pool};
pub use scheduler::Scheduler;
pub use selection::{classify, select_next, select_next_with_tier, SelectionTier};
pub use stats::PoolStats;
