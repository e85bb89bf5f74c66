use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{transform, Board, GameState, Piece};
use blockfall::types::{Cell, Color, GameAction, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let state = GameState::new(12345);

    c.bench_function("game_tick", |b| b.iter(|| black_box(&state).tick()));
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for col in 0..10 {
                    board.set(Cell::new(col, row), Some(Color::Cyan));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let board = Board::new();
    let piece = Piece::spawn(ShapeKind::I);

    c.bench_function("drop_distance", |b| {
        b.iter(|| transform::drop_distance(black_box(&piece), black_box(&board)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let state = GameState::new(12345).apply(GameAction::MoveDown).apply(GameAction::MoveDown);

    c.bench_function("rotate", |b| {
        b.iter(|| black_box(&state).apply(GameAction::Rotate))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_rotate
);
criterion_main!(benches);
