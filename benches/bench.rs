//! Criterion benchmarks for the Plume content engine.
//!
//! Covers the token pipeline, each analyzer on its own, and the full
//! engine over single posts and batches.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use plume::analysis::analyzer::{Analyzer, SentenceAnalyzer, TermAnalyzer};
use plume::engine::{ContentEngine, FixedCtaSelector};
use rayon::prelude::*;

/// Generate test posts for benchmarking.
fn generate_test_posts(count: usize) -> Vec<String> {
    let words = [
        "launch", "team", "great", "release", "today", "users", "amazing", "feedback", "slow",
        "build", "ship", "product", "community", "love", "broken", "features", "design",
        "roadmap", "happy", "growth", "bug", "fast", "sprint", "customers",
    ];

    let mut posts = Vec::with_capacity(count);
    for i in 0..count {
        let post_length = 20 + (i % 120);
        let mut post = String::new();
        for j in 0..post_length {
            let word_idx = (i * 7 + j * 13) % words.len();
            post.push_str(words[word_idx]);
            // Vary the sentence shape
            post.push_str(match (i + j) % 11 {
                0 => ". ",
                5 if i % 3 == 0 => "? ",
                _ => " ",
            });
        }
        posts.push(post);
    }

    posts
}

/// Benchmark the token pipeline.
fn bench_token_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_pipeline");

    let terms = TermAnalyzer::new().unwrap();
    let sentences = SentenceAnalyzer::new().unwrap();
    let posts = generate_test_posts(100);

    group.bench_function("term_analyzer", |b| {
        b.iter(|| black_box(terms.analyze(black_box(&posts[50])).count()))
    });

    group.bench_function("sentence_segmentation", |b| {
        b.iter(|| black_box(sentences.sentences(black_box(&posts[50]))))
    });

    group.finish();
}

/// Benchmark each analyzer in isolation.
fn bench_analyzers(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzers");

    let engine = ContentEngine::default();
    let posts = generate_test_posts(100);
    let post = &posts[75];

    group.bench_function("sentiment", |b| {
        b.iter(|| black_box(engine.analyze_sentiment(black_box(post))))
    });

    group.bench_function("readability", |b| {
        b.iter(|| black_box(engine.analyze_readability(black_box(post))))
    });

    group.bench_function("hashtags", |b| {
        b.iter(|| black_box(engine.extract_hashtags(black_box(post), 5)))
    });

    group.finish();
}

/// Benchmark full analysis, sequential and parallel.
fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_analysis");

    let engine = ContentEngine::default().with_cta_selector(Arc::new(FixedCtaSelector(0)));
    let posts = generate_test_posts(1000);

    group.bench_function("analyze_single_post", |b| {
        b.iter(|| black_box(engine.analyze(black_box(&posts[0]))))
    });

    group.throughput(Throughput::Elements(1000));
    group.bench_function("analyze_batch_sequential", |b| {
        b.iter(|| {
            for post in &posts {
                black_box(engine.analyze(black_box(post)));
            }
        })
    });

    group.throughput(Throughput::Elements(1000));
    group.bench_function("analyze_batch_parallel", |b| {
        b.iter(|| {
            let results: Vec<_> = posts.par_iter().map(|post| engine.analyze(post)).collect();
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_token_pipeline,
    bench_analyzers,
    bench_full_analysis
);
criterion_main!(benches);
