//! 单词集合性能基准测试

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hash_word_set::{normalize, tuning::evaluate_weights, HashWeights, WeightedPolyHasher, WordSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// 基准测试配置
const SEED: u64 = 42;
const WORD_COUNTS: [usize; 3] = [1_000, 10_000, 100_000];

/// 生成随机单词
fn generate_words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

/// 插入操作基准测试
fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("Add");

    for &count in WORD_COUNTS.iter() {
        let words = generate_words(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &words, |b, words| {
            b.iter_batched(
                WordSet::new,
                |mut set| {
                    for word in words {
                        set.add(word);
                    }
                    set
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

/// 成员判断基准测试
fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("Contains");

    for &count in WORD_COUNTS.iter() {
        let words = generate_words(count);
        let mut set = WordSet::new();
        set.add_all(&words);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &words, |b, words| {
            b.iter(|| words.iter().filter(|w| set.contains(w)).count());
        });
    }
    group.finish();
}

/// 规范化与哈希基准测试
fn bench_hash(c: &mut Criterion) {
    let words = generate_words(10_000);
    let hasher = WeightedPolyHasher::default();

    let mut group = c.benchmark_group("Hash");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("normalize", |b| {
        b.iter(|| words.iter().map(|w| normalize(w).len()).sum::<usize>())
    });
    group.bench_function("weighted_poly", |b| {
        b.iter(|| words.iter().map(|w| hasher.hash(w)).sum::<usize>())
    });
    group.finish();
}

/// 统计报告基准测试
fn bench_report(c: &mut Criterion) {
    let words = generate_words(100_000);
    let mut set = WordSet::new();
    set.add_all(&words);

    c.bench_function("report", |b| b.iter(|| set.report()));
    c.bench_function("evaluate_weights", |b| {
        b.iter(|| evaluate_weights(HashWeights::default(), &words[..10_000]))
    });
}

criterion_group!(benches, bench_add, bench_contains, bench_hash, bench_report);
criterion_main!(benches);
