use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scoutrank_similarity::{rank, rank_with_mode, MetricKind, TruncationMode};

fn generate_roster(count: usize, dimension: usize) -> Vec<Vec<f64>> {
    let mut vectors = Vec::with_capacity(count);
    for i in 0..count {
        let mut data = Vec::with_capacity(dimension);
        for j in 0..dimension {
            let value = (i as f64 * 0.1 + j as f64 * 0.01).sin() * 0.5 + 0.5;
            data.push(value);
        }
        vectors.push(data);
    }
    vectors
}

fn bench_rank(c: &mut Criterion) {
    let dimension = 16;
    let roster = generate_roster(600, dimension);
    let query = roster[42].clone();
    let weights = vec![1.0; dimension];

    let mut group = c.benchmark_group("rank");

    for metric in [MetricKind::CosineSimilarity, MetricKind::WeightedEuclideanDistance] {
        group.bench_function(metric.name(), |b| {
            b.iter(|| {
                rank(
                    black_box(&query),
                    black_box(&roster),
                    metric,
                    Some(black_box(weights.as_slice())),
                    5,
                )
                .unwrap()
            })
        });
    }

    group.bench_function("weighted_euclidean_include_self", |b| {
        b.iter(|| {
            rank_with_mode(
                black_box(&query),
                black_box(&roster),
                MetricKind::WeightedEuclideanDistance,
                Some(black_box(weights.as_slice())),
                5,
                TruncationMode::IncludeSelf,
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
