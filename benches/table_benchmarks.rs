//! Benchmarks for table construction and lookup.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_tables::{targets, Color, Piece, ScoreTables, Square};

fn bench_score_table_build(c: &mut Criterion) {
    c.bench_function("score_tables/build", |b| {
        b.iter(|| black_box(ScoreTables::build()))
    });
}

fn bench_target_lookup(c: &mut Criterion) {
    // Force lazy construction outside the measured loop.
    chess_tables::init();

    let mut group = c.benchmark_group("targets");

    let d4: Square = "d4".parse().unwrap();
    group.bench_function("queen_d4", |b| {
        b.iter(|| black_box(targets(Piece::Queen, Color::White, black_box(d4))))
    });

    group.bench_function("full_board_sweep", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for piece in Piece::ALL {
                for square in Square::all() {
                    total += targets(piece, Color::White, black_box(square)).len();
                }
            }
            black_box(total)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_score_table_build, bench_target_lookup);
criterion_main!(benches);
