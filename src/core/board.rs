//! The occupancy grid: collision predicate, piece commit, row clearing.
//!
//! The board is `NLINES` rows by `NCOLS` columns stored as a flat row-major
//! array. Each cell holds 0 (empty) or the color identity (1..=8) of the piece
//! that settled there.

use arrayvec::ArrayVec;
use tracing::warn;

use crate::core::piece::{BoardQuery, Piece};
use crate::core::shapes::ShapeGrid;
use crate::types::{ColorId, NCOLS, NLINES};

const NCELLS: usize = NCOLS * NLINES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [ColorId; NCELLS],
}

impl Board {
    pub fn new() -> Self {
        Self { cells: [0; NCELLS] }
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= NCOLS as i32 || y < 0 || y >= NLINES as i32 {
            return None;
        }
        Some(y as usize * NCOLS + x as usize)
    }

    pub fn width(&self) -> usize {
        NCOLS
    }

    pub fn height(&self) -> usize {
        NLINES
    }

    /// Cell color at integer coordinates; `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<ColorId> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Directly set a cell. Returns false when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, color: ColorId) -> bool {
        match Self::index(x, y) {
            Some(i) => {
                self.cells[i] = color;
                true
            }
            None => false,
        }
    }

    /// Lock a piece's filled cells into the grid.
    ///
    /// Cells that fall outside the grid are skipped. The engine locks before a
    /// piece can overflow, so a skip here means a caller broke that invariant;
    /// it is surfaced to the diagnostic sink rather than failing the game.
    pub fn commit(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            match Self::index(x, y) {
                Some(i) => self.cells[i] = piece.color(),
                None => warn!(
                    kind = piece.kind.name(),
                    x, y, "commit skipped out-of-bounds cell"
                ),
            }
        }
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= NLINES {
            return false;
        }
        let start = y * NCOLS;
        self.cells[start..start + NCOLS].iter().all(|&c| c != 0)
    }

    /// Remove every full row, top to bottom. Rows above a removed row shift
    /// down one and an empty row enters at index 0. Returns the number of rows
    /// removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let full: ArrayVec<usize, NLINES> = (0..NLINES).filter(|&y| self.is_row_full(y)).collect();

        // Compacting above a full row never disturbs full rows below it, so
        // the collected indices stay valid top to bottom.
        for &y in &full {
            for row in (1..=y).rev() {
                let src = (row - 1) * NCOLS;
                let dst = row * NCOLS;
                self.cells.copy_within(src..src + NCOLS, dst);
            }
            self.cells[..NCOLS].fill(0);
        }
        full.len()
    }
}

impl BoardQuery for Board {
    fn in_bounds(&self, x: f32, y: f32) -> bool {
        Self::index(x.floor() as i32, y.floor() as i32).is_some()
    }

    fn fits(&self, x: f32, y: f32, shape: &ShapeGrid) -> bool {
        for (row, cols) in shape.iter().enumerate() {
            for (col, &cell) in cols.iter().enumerate() {
                if cell == 0 {
                    continue;
                }
                let cx = (x + col as f32).floor() as i32;
                let cy = (y + row as f32).floor() as i32;
                match self.get(cx, cy) {
                    Some(0) => {}
                    // Occupied or out of bounds: illegal either way.
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
