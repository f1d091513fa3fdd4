use criterion::{black_box, criterion_group, criterion_main, Criterion};

use geocity_core::evaluator::{classify, evaluate};
use geocity_core::model::Relationship;

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    group.bench_function("parallel_hit", |b| {
        b.iter(|| evaluate(black_box(1.5), black_box(Relationship::Parallel)))
    });

    group.bench_function("perpendicular_miss", |b| {
        b.iter(|| evaluate(black_box(87.9), black_box(Relationship::Perpendicular)))
    });

    group.bench_function("slider_sweep", |b| {
        b.iter(|| {
            (0..=180)
                .filter(|&deg| evaluate(f64::from(deg), Relationship::Perpendicular).matched)
                .count()
        })
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| b.iter(|| classify(black_box(37.0))));
}

criterion_group!(benches, bench_evaluate, bench_classify);
criterion_main!(benches);
