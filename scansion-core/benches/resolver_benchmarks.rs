//! Performance benchmarks for StressResolver
//!
//! Run with: cargo bench --bench resolver_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scansion_core::{PosDisambiguator, PosLabel, StressResolver, StressRules};
use std::hint::black_box;

const LINES: [&str; 4] = [
    "Shall I compare thee to a summer's day?",
    "I will record the meeting",
    "the record shows the present is here",
    "hello asdkfjhasd world",
];

/// Generate a poem of roughly `count` lines
fn generate_poem(count: usize) -> Vec<String> {
    LINES
        .iter()
        .cycle()
        .take(count)
        .map(|line| line.to_string())
        .collect()
}

/// Single-word lookups along each resolution path
fn bench_word_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_paths");
    let resolver = StressResolver::english().unwrap();

    group.bench_function("dictionary", |b| {
        b.iter(|| resolver.resolve_word(black_box("hello"), black_box(""), None))
    });
    group.bench_function("hint", |b| {
        b.iter(|| {
            resolver.resolve_word(
                black_box("record"),
                black_box("the record shows"),
                Some(PosLabel::Verb),
            )
        })
    });
    group.bench_function("context", |b| {
        b.iter(|| {
            resolver.resolve_word(
                black_box("record"),
                black_box("I will record the meeting"),
                None,
            )
        })
    });
    group.bench_function("miss", |b| {
        b.iter(|| resolver.resolve_word(black_box("asdkfjhasd"), black_box(""), None))
    });

    group.finish();
}

/// Whole-poem resolution at different sizes
fn bench_poem_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("poem_sizes");
    let resolver = StressResolver::english().unwrap();

    for count in [14, 100, 1_000] {
        let poem = generate_poem(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("resolve_line", count), &poem, |b, poem| {
            b.iter(|| {
                for line in poem {
                    black_box(resolver.resolve_line(black_box(line)));
                }
            });
        });
    }

    group.finish();
}

/// Precompiled matchers against compiling per call
fn bench_pos_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("pos_detection");
    let rules = StressRules::english().unwrap();
    let disambiguator: &PosDisambiguator = rules.disambiguator();
    let matcher = disambiguator.matcher_for("record").unwrap();
    let context = "the record shows";

    group.bench_function("precompiled", |b| {
        b.iter(|| matcher.detect(black_box(context)))
    });
    group.bench_function("compile_per_call", |b| {
        b.iter(|| disambiguator.detect(black_box("record"), black_box(context)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_word_paths,
    bench_poem_sizes,
    bench_pos_detection
);
criterion_main!(benches);
