//! Projects game state onto the render surface.
//!
//! Pure (no I/O), so the whole layout is unit-testable. The screen mirrors
//! the original curses layout: bordered playfield on the left, the three
//! upcoming pieces in a column beside it, stats below those.

use crate::core::{Game, Piece};
use crate::term::fb::Surface;
use crate::types::{NCOLS, NLINES, NUM_NEXT_PIECES};

/// Each board cell is drawn as this run of characters.
pub const CELL_STR: &str = "[x]";

const CELL_W: u16 = CELL_STR.len() as u16;

/// Playfield interior origin (inside its border).
const BOARD_X: u16 = 1;
const BOARD_Y: u16 = 1;

const BOARD_W: u16 = CELL_W * NCOLS as u16 + 2;
const BOARD_H: u16 = NLINES as u16;

/// Upnext column sits to the right of the playfield.
const UPNEXT_X: u16 = BOARD_X + BOARD_W + 3;
const UPNEXT_Y: u16 = 1;
const UPNEXT_W: u16 = CELL_W * 4 + 2;
const UPNEXT_H: u16 = 4 * NUM_NEXT_PIECES as u16;

const STATS_X: u16 = UPNEXT_X;
const STATS_Y: u16 = UPNEXT_Y + UPNEXT_H + 3;
const STATS_H: u16 = BOARD_H - UPNEXT_H - 2;

/// Minimum terminal size able to hold the full layout.
pub fn min_viewport() -> (u16, u16) {
    (UPNEXT_X + UPNEXT_W + 2, BOARD_Y + BOARD_H + 2)
}

#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Redraw the whole frame into `surface`.
    pub fn render(&self, game: &Game, surface: &mut Surface) {
        surface.clear();

        self.draw_playfield(game, surface);
        self.draw_upnext(game, surface);
        self.draw_stats(game, surface);

        if game.game_over() {
            self.draw_center_text(surface, "GAME OVER");
        }
    }

    fn draw_playfield(&self, game: &Game, surface: &mut Surface) {
        surface.draw_border(BOARD_X - 1, BOARD_Y - 1, BOARD_W + 2, BOARD_H + 2);

        // Settled cells.
        for y in 0..NLINES as i32 {
            for x in 0..NCOLS as i32 {
                if let Some(color) = game.board().get(x, y) {
                    if color != 0 {
                        self.draw_cell(surface, x, y, color);
                    }
                }
            }
        }

        // Ghost first so the active piece paints over it when they overlap.
        self.draw_piece(surface, &game.ghost());
        self.draw_piece(surface, game.active());
    }

    fn draw_piece(&self, surface: &mut Surface, piece: &Piece) {
        for (x, y) in piece.cells() {
            if (0..NCOLS as i32).contains(&x) && (0..NLINES as i32).contains(&y) {
                self.draw_cell(surface, x, y, piece.color());
            }
        }
    }

    fn draw_cell(&self, surface: &mut Surface, x: i32, y: i32, color: u8) {
        let sx = BOARD_X + 1 + x as u16 * CELL_W;
        let sy = BOARD_Y + y as u16;
        surface.put_str(sx, sy, CELL_STR, color);
    }

    fn draw_upnext(&self, game: &Game, surface: &mut Surface) {
        surface.draw_border(UPNEXT_X - 1, UPNEXT_Y - 1, UPNEXT_W + 2, UPNEXT_H + 2);
        surface.clear_region(UPNEXT_X, UPNEXT_Y, UPNEXT_W, UPNEXT_H);

        // Each upcoming piece gets a fixed 4-row slot.
        for (slot, piece) in game.upnext().enumerate() {
            let base_y = UPNEXT_Y + 4 * slot as u16;
            for (row, cols) in piece.shape().iter().enumerate() {
                for (col, &cell) in cols.iter().enumerate() {
                    if cell != 0 {
                        let sx = UPNEXT_X + 1 + col as u16 * CELL_W;
                        surface.put_str(sx, base_y + row as u16, CELL_STR, piece.color());
                    }
                }
            }
        }
    }

    fn draw_stats(&self, game: &Game, surface: &mut Surface) {
        surface.draw_border(STATS_X - 1, STATS_Y - 1, UPNEXT_W + 2, STATS_H + 2);

        surface.put_str(STATS_X + 1, STATS_Y, &format!("Score: {}", game.score()), 0);
        surface.put_str(
            STATS_X + 1,
            STATS_Y + 2,
            &format!("Lines: {}", game.lines()),
            0,
        );
        surface.put_str(
            STATS_X + 1,
            STATS_Y + 4,
            &format!("Level: {}", game.level()),
            0,
        );
    }

    fn draw_center_text(&self, surface: &mut Surface, text: &str) {
        let x = (BOARD_X + 1 + BOARD_W / 2).saturating_sub(text.len() as u16 / 2);
        let y = BOARD_Y + BOARD_H / 2;
        surface.put_str(x, y, text, 0);
    }
}
