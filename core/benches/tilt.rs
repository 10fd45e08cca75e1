use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use twenty48_core::{GameConfig, GameEngine, GameSession, RandomTileSpawner, Side};

fn tilt_full_board(c: &mut Criterion) {
    let engine = GameEngine::from_rows(
        &[
            [2, 2, 4, 4],
            [8, 8, 16, 16],
            [2, 4, 2, 4],
            [1024, 1024, 512, 512],
        ],
        0,
        0,
    )
    .unwrap();

    let mut group = c.benchmark_group("tilt_full_board");
    for side in Side::ALL {
        group.bench_function(format!("{side:?}"), |b| {
            b.iter(|| {
                let mut engine = engine.clone();
                black_box(engine.tilt(black_box(side)).unwrap())
            })
        });
    }
    group.finish();
}

fn play_random_round(c: &mut Criterion) {
    c.bench_function("play_random_round", |b| {
        b.iter(|| {
            let mut session = GameSession::new(
                GameConfig::classic(),
                RandomTileSpawner::new(black_box(42)),
                |_, _| {},
            );
            session.start_round().unwrap();
            let mut turn = 0;
            while !session.engine().game_over() {
                session.play(Side::ALL[turn % 4]).unwrap();
                turn += 1;
            }
            black_box(session.engine().score())
        })
    });
}

criterion_group!(benches, tilt_full_board, play_random_round);
criterion_main!(benches);
