//! Criterion benchmarks for the step-observable gift-wrap.
//! Focus sizes: n in {10, 50, 100, 500}.
//! Results: by default under target/criterion.

use std::time::Duration;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullstep::scatter::{draw_points, ScatterCfg};
use hullstep::tracer::{HullTracer, Recorder, RunCfg};
use hullstep::PointSet;

fn cloud(n: usize, seed: u64) -> PointSet {
    let cfg = ScatterCfg {
        count: n,
        ..ScatterCfg::default()
    };
    let pts = draw_points(&cfg, seed).expect("valid scatter cfg");
    PointSet::build(&pts).expect("non-empty")
}

fn bench_giftwrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("giftwrap");
    for &n in &[10usize, 50, 100, 500] {
        group.bench_with_input(BenchmarkId::new("run_to_completion", n), &n, |b, &n| {
            let set = cloud(n, 43);
            b.iter(|| {
                let mut t = HullTracer::new(&set);
                t.run_to_completion(Duration::ZERO)
            })
        });

        group.bench_with_input(BenchmarkId::new("recorded", n), &n, |b, &n| {
            let set = cloud(n, 44);
            b.iter_batched(
                Recorder::default,
                |mut rec| {
                    let mut t = HullTracer::new(&set);
                    t.run_with_observer(&RunCfg::default(), &mut rec);
                    rec.snapshots.len()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_giftwrap);
criterion_main!(benches);
