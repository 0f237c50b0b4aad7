//! Benchmark suite for flashcard-srs
//!
//! Run with: cargo bench

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use flashcard_srs::{apply_verdict, select_next, Category, LearningItem, Verdict};

fn build_pool(size: usize) -> Vec<LearningItem> {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..size)
        .map(|i| {
            let mut item =
                LearningItem::new(format!("w{i}"), format!("Wort {i}"), Category::Vocabulary);
            if i % 3 != 0 {
                item.mastery_level = (i % 6) as u8;
                item.last_reviewed_at = Some(now - Duration::days(1));
                item.next_review_at = Some(now + Duration::minutes(i as i64 - size as i64 / 2));
            }
            item
        })
        .collect()
}

fn bench_select_next(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let pool = build_pool(1_000);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    c.bench_function("select_next/1000", |b| {
        b.iter(|| select_next(black_box(&pool), Some("w1"), now, &mut rng))
    });
}

fn bench_apply_verdict(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let item = build_pool(2)
        .pop()
        .unwrap_or_else(|| LearningItem::new("w", "Wort", Category::Vocabulary));
    c.bench_function("apply_verdict", |b| {
        b.iter(|| apply_verdict(black_box(&item), Verdict::Know, now))
    });
}

criterion_group!(benches, bench_select_next, bench_apply_verdict);
criterion_main!(benches);
