//! Criterion benchmarks for the parametrization engine.
//! One frame is what a view recomputes per pointer move; the sweep mirrors the CLI.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lineviz::param::{evaluate, ParamKind, Parametrization};
use lineviz::prelude::{NormalizedParam, Viewport};
use lineviz::sample::{grid, random_params, ReplayToken};

fn bench_engine(c: &mut Criterion) {
    let vp = Viewport::new(640.0, 480.0).unwrap();
    let params = random_params(ReplayToken { seed: 43, index: 0 }, 1024);

    let mut group = c.benchmark_group("engine");
    for kind in ParamKind::ALL {
        group.bench_with_input(BenchmarkId::new("endpoints", kind), &kind, |b, &kind| {
            b.iter(|| {
                params
                    .iter()
                    .filter(|p| kind.endpoints(**p, &vp).is_some())
                    .count()
            })
        });
        group.bench_with_input(BenchmarkId::new("evaluate", kind), &kind, |b, &kind| {
            b.iter(|| evaluate(kind, NormalizedParam::CENTER, vp))
        });
        group.bench_with_input(BenchmarkId::new("grid_64", kind), &kind, |b, &kind| {
            b.iter(|| grid(64).map(|p| evaluate(kind, p, vp)).count())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
