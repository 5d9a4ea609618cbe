//! Board collision and row-clear behavior.

use termtris::core::{Board, BoardQuery, Piece};
use termtris::types::{PieceKind, ALL_KINDS, NCOLS, NLINES};

/// `fits` must reject exactly the offsets where a filled cell leaves the grid
/// or lands on an occupied cell, for every kind across the whole offset grid.
#[test]
fn fits_matches_cellwise_check_everywhere() {
    let mut board = Board::new();
    board.set(4, 10, 3);
    board.set(0, 19, 3);

    for kind in ALL_KINDS {
        let piece = Piece::new(kind, 0.0, 0.0);
        let shape = piece.shape();

        for y in -4..NLINES as i32 + 2 {
            for x in -4..NCOLS as i32 + 2 {
                let mut expected = true;
                for (row, cols) in shape.iter().enumerate() {
                    for (col, &cell) in cols.iter().enumerate() {
                        if cell == 0 {
                            continue;
                        }
                        let (cx, cy) = (x + col as i32, y + row as i32);
                        match board.get(cx, cy) {
                            Some(0) => {}
                            _ => expected = false,
                        }
                    }
                }
                assert_eq!(
                    board.fits(x as f32, y as f32, shape),
                    expected,
                    "{} at ({x}, {y})",
                    kind.name()
                );
            }
        }
    }
}

#[test]
fn commit_then_clear_leaves_incomplete_row_alone() {
    let mut board = Board::new();
    // Bottom row filled except column 9, using a square in the corner.
    for x in 0..NCOLS as i32 - 1 {
        board.set(x, 19, 2);
    }

    assert_eq!(board.clear_full_rows(), 0);
    for x in 0..NCOLS as i32 - 1 {
        assert_eq!(board.get(x, 19), Some(2));
    }
    assert_eq!(board.get(9, 19), Some(0));
}

#[test]
fn full_row_clears_and_everything_shifts_down() {
    let mut board = Board::new();
    for x in 0..NCOLS as i32 {
        board.set(x, 19, 4);
    }
    // Scatter above the full row.
    board.set(3, 17, 6);
    board.set(7, 18, 5);

    assert_eq!(board.clear_full_rows(), 1);

    assert_eq!(board.get(3, 18), Some(6));
    assert_eq!(board.get(7, 19), Some(5));
    for x in 0..NCOLS as i32 {
        assert_eq!(board.get(x, 0), Some(0), "top row must be empty");
    }
    // The cleared color is gone entirely.
    for y in 0..NLINES as i32 {
        for x in 0..NCOLS as i32 {
            assert_ne!(board.get(x, y), Some(4));
        }
    }
}

#[test]
fn four_full_rows_clear_in_one_pass() {
    let mut board = Board::new();
    for y in 16..20 {
        for x in 0..NCOLS as i32 {
            board.set(x, y, 5);
        }
    }
    board.set(2, 15, 8);

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.get(2, 19), Some(8));
    assert_eq!(board.get(2, 15), Some(0));
}

#[test]
fn commit_writes_each_kinds_color() {
    for kind in ALL_KINDS {
        let mut board = Board::new();
        let mut piece = Piece::new(kind, 3.0, 5.0);
        while piece.try_move(&board, 0.0, 1.0) {}
        board.commit(&piece);

        for (x, y) in piece.cells() {
            assert_eq!(board.get(x, y), Some(piece.color()), "{}", kind.name());
        }
        assert_eq!(piece.cells().count(), 4);
    }
}
