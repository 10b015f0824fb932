//! Benchmarks for batch scoring and aggregation.

use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use risk_tools::pipeline::{assess_population, score_population, CancellationToken};
use risk_tools::{calculate_risk_score, EngineConfig, FactorVector};

fn population(n: usize) -> Vec<(String, FactorVector)> {
    (0..n)
        .map(|i| {
            let v = i as f64 / n as f64;
            (format!("entity-{i}"), FactorVector::new(v, 1.0 - v / 2.0, 0.3))
        })
        .collect()
}

fn benchmark_single_score(c: &mut Criterion) {
    let factors = FactorVector::new(0.75, 0.85, 0.60);
    c.bench_function("single_risk_score", |b| {
        b.iter(|| {
            let score = calculate_risk_score("entity", black_box(&factors)).unwrap();
            black_box(score);
        })
    });
}

fn benchmark_batch_10k(c: &mut Criterion) {
    let entities = population(10_000);
    let token = CancellationToken::new();
    c.bench_function("score_population_10k", |b| {
        b.iter(|| {
            let scores = score_population(black_box(&entities), Utc::now(), &token).unwrap();
            black_box(scores);
        })
    });
}

fn benchmark_assessment_10k(c: &mut Criterion) {
    let entities = population(10_000);
    let scores = score_population(&entities, Utc::now(), &CancellationToken::new()).unwrap();
    let config = EngineConfig::default();
    c.bench_function("assess_population_10k", |b| {
        b.iter(|| {
            let assessment = assess_population(black_box(scores.clone()), &config).unwrap();
            black_box(assessment);
        })
    });
}

criterion_group!(
    benches,
    benchmark_single_score,
    benchmark_batch_10k,
    benchmark_assessment_10k
);
criterion_main!(benches);
