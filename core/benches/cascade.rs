use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minegrid_core::*;

fn placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for (name, size, mines) in [("beginner", 9, 10), ("expert", 30, 180), ("dense", 30, 800)] {
        let config = GameConfig::new(size, mines).unwrap();
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(Board::initialize(config, seed))
            })
        });
    }
    group.finish();
}

fn cascade(c: &mut Criterion) {
    let config = GameConfig::new(Coord::MAX, 0).unwrap();
    let board = Board::initialize(config, 0);
    c.bench_function("cascade_full_board", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| black_box(board.reveal((0, 0))),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, placement, cascade);
criterion_main!(benches);
