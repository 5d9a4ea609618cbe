//! A positioned, rotatable piece instance.
//!
//! Pieces only see the board through [`BoardQuery`], so this module has no
//! dependency on the engine or the concrete board type.

use crate::core::shapes::{color_of, rotate_cw, shape_of, ShapeGrid};
use crate::types::{ColorId, PieceKind};

/// Collision capability a piece needs from its playfield.
pub trait BoardQuery {
    /// True iff the floored cell coordinate lies on the grid.
    fn in_bounds(&self, x: f32, y: f32) -> bool;

    /// True iff every filled cell of `shape`, offset by `(x, y)`, lands on an
    /// in-bounds empty cell.
    fn fits(&self, x: f32, y: f32, shape: &ShapeGrid) -> bool;
}

/// A falling piece. `y` advances fractionally under gravity; cell positions
/// are derived by flooring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    shape: ShapeGrid,
    pub x: f32,
    pub y: f32,
    color: ColorId,
    ghost: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            shape: *shape_of(kind),
            x,
            y,
            color: color_of(kind),
            ghost: false,
        }
    }

    pub fn shape(&self) -> &ShapeGrid {
        &self.shape
    }

    /// Color identity used when committing and rendering. Ghost copies render
    /// neutral (0).
    pub fn color(&self) -> ColorId {
        if self.ghost {
            0
        } else {
            self.color
        }
    }

    pub fn is_ghost(&self) -> bool {
        self.ghost
    }

    /// Attempt to translate by `(dx, dy)`. `dy` may be fractional. Returns
    /// false and leaves the position untouched when the target is illegal.
    pub fn try_move<Q: BoardQuery>(&mut self, board: &Q, dx: f32, dy: f32) -> bool {
        if board.fits(self.x + dx, self.y + dy, &self.shape) {
            self.x += dx;
            self.y += dy;
            return true;
        }
        false
    }

    /// Attempt a clockwise rotation in place. No kick attempts: if the rotated
    /// matrix does not fit at the current position this is a silent no-op.
    pub fn try_rotate<Q: BoardQuery>(&mut self, board: &Q) -> bool {
        let rotated = rotate_cw(&self.shape);
        if board.fits(self.x, self.y, &rotated) {
            self.shape = rotated;
            return true;
        }
        false
    }

    /// All grid cells currently occupied by filled shape cells.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let base_x = self.x.floor() as i32;
        let base_y = self.y.floor() as i32;
        self.shape.iter().enumerate().flat_map(move |(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, &cell)| cell != 0)
                .map(move |(col, _)| (base_x + col as i32, base_y + row as i32))
        })
    }

    /// Ghost copy dropped to its maximal legal row, for landing preview.
    pub fn dropped<Q: BoardQuery>(&self, board: &Q) -> Piece {
        let mut ghost = *self;
        ghost.ghost = true;
        while ghost.try_move(board, 0.0, 1.0) {}
        ghost
    }
}
