//! Criterion benchmarks for u-localsearch runners.
//!
//! Uses synthetic objectives (a bowl on the grid, a bumpy line) to measure
//! pure loop overhead: expansion, scoring and acceptance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use u_localsearch::hill::HillClimbRunner;
use u_localsearch::node::{GridNode, GridSpace, LineNode, LineSpace};
use u_localsearch::sa::{CoolingSchedule, SaConfig, SaRunner};

// ===========================================================================
// Bowl on the grid: maximize -(x^2 + y^2)
// ===========================================================================

fn bowl() -> Arc<GridSpace> {
    Arc::new(GridSpace::new().with_scorer(|&[x, y]: &[i64; 2]| -((x * x + y * y) as f64)))
}

// ===========================================================================
// Bumpy line: many local maxima inside [-500, 500]
// ===========================================================================

fn bumpy() -> Arc<LineSpace<i64>> {
    Arc::new(
        LineSpace::new([-3, -1, 1, 3])
            .with_bounds(-500, 500)
            .with_scorer(|&x: &i64| {
                let x = x as f64;
                10.0 * (x / 7.0).sin() - 0.001 * x * x
            }),
    )
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_hill_bowl(c: &mut Criterion) {
    let mut group = c.benchmark_group("hill_bowl");
    group.sample_size(10);

    let space = bowl();
    for &radius in &[10i64, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &r| {
            b.iter(|| {
                let root = GridNode::root_in([r, -r], Arc::clone(&space));
                let result = HillClimbRunner::run(black_box(root));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_sa_bumpy(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_bumpy");
    group.sample_size(10);

    let space = bumpy();
    let schedule = CoolingSchedule::Geometric {
        initial: 50.0,
        alpha: 0.999,
    };
    for &iters in &[1_000usize, 10_000, 50_000] {
        let config = SaConfig::default().with_max_iterations(iters).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(iters), &config, |b, config| {
            b.iter(|| {
                let root = LineNode::root_in(0, Arc::clone(&space));
                let result = SaRunner::run(black_box(root), &schedule, black_box(config));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hill_bowl, bench_sa_bumpy);
criterion_main!(benches);
