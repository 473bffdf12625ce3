//! Criterion micro-benchmarks for planning and prediction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kestrel_core::Coord;
use kestrel_grid::GridMap;
use kestrel_plan::{advance, predict};

/// Benchmark: neighbours() on all 400 cells of a 20x20 map.
fn bench_neighbours_20x20(c: &mut Criterion) {
    let map = GridMap::new(20, 20).unwrap();

    c.bench_function("neighbours_20x20", |b| {
        b.iter(|| {
            for y in 0..20i32 {
                for x in 0..20i32 {
                    let n = map.neighbours(Coord::new(x, y));
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: one joint advancement step mid-mission.
fn bench_advance(c: &mut Criterion) {
    let map = GridMap::new(20, 20).unwrap();
    let pursuer = Coord::new(4, 12);
    let evader = Coord::new(2, 3);
    let goal = Coord::new(10, 19);

    c.bench_function("advance_single_step", |b| {
        b.iter(|| {
            let step = advance(&map, black_box(pursuer), black_box(evader), goal).unwrap();
            black_box(step);
        });
    });
}

/// Benchmark: lookahead projection at the default and a deep horizon.
fn bench_predict(c: &mut Criterion) {
    let map = GridMap::new(20, 20).unwrap();
    let pursuer = Coord::new(1, 10);
    let evader = Coord::new(1, 1);
    let goal = Coord::new(10, 19);

    c.bench_function("predict_horizon_4", |b| {
        b.iter(|| {
            let signals = predict(&map, pursuer, evader, goal, black_box(4)).unwrap();
            black_box(signals);
        });
    });

    c.bench_function("predict_horizon_16", |b| {
        b.iter(|| {
            let signals = predict(&map, pursuer, evader, goal, black_box(16)).unwrap();
            black_box(signals);
        });
    });
}

criterion_group!(benches, bench_neighbours_20x20, bench_advance, bench_predict);
criterion_main!(benches);
