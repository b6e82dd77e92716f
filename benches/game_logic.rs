use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rhythm_master::core::{Game, GameConfig, GameSnapshot};
use rhythm_master::term::{FrameBuffer, GameView, Viewport};
use rhythm_master::types::Key;

/// A game in full swing: several symbols on the field.
fn busy_game() -> Game {
    let config = GameConfig {
        total_spawns: u32::MAX,
        spawn_interval_ms: 60,
        ..GameConfig::default()
    }
    .with_seed(12345);
    let mut game = Game::new(config);
    game.handle_input(Key::Start);
    for _ in 0..200 {
        game.update();
    }
    game
}

fn bench_update(c: &mut Criterion) {
    let mut game = busy_game();

    c.bench_function("game_update_30ms", |b| {
        b.iter(|| {
            game.update();
            black_box(game.symbols().len());
        })
    });
}

fn bench_judge_press(c: &mut Criterion) {
    let game = busy_game();

    c.bench_function("judge_press", |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| {
                g.handle_input(black_box(Key::Char('W')));
                g
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = busy_game();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            black_box(snap.symbols.len());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = busy_game().snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_judge_press,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
