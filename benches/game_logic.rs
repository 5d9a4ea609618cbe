use criterion::{black_box, criterion_group, criterion_main, Criterion};

use termtris::core::{Board, BoardQuery, Game, Piece};
use termtris::types::{InputEvent, PieceKind, NCOLS};

fn bench_update(c: &mut Criterion) {
    let mut game = Game::new(12345);
    c.bench_function("engine_update_16ms", |b| {
        b.iter(|| {
            game.update(black_box(1.0 / 60.0));
        })
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..NCOLS as i32 {
                    board.set(x, y, 5);
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_fits(c: &mut Criterion) {
    let board = Board::new();
    let piece = Piece::new(PieceKind::Elbow, 4.0, 10.0);
    c.bench_function("board_fits", |b| {
        b.iter(|| board.fits(black_box(piece.x), black_box(piece.y), piece.shape()))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop_and_lock", |b| {
        b.iter(|| {
            let mut game = Game::new(black_box(777));
            game.handle_input(InputEvent::HardDrop);
            game.update(1.0);
            game.score()
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_clear_four_rows,
    bench_fits,
    bench_hard_drop
);
criterion_main!(benches);
