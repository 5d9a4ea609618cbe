//! Game engine: owns the board, the active piece, the lookahead queue, and
//! the score/level/speed state machine.
//!
//! One update processes at most one lock event: a failed gravity move commits
//! the active piece, advances the queue, then clears rows and applies scoring.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::core::board::Board;
use crate::core::piece::{BoardQuery, Piece};
use crate::core::rng::SimpleRng;
use crate::types::{
    InputEvent, BASE_LEVEL, BASE_SPEED, NCOLS, NUM_NEXT_PIECES, SCORE_SYSTEM, SPEED_STEP,
};

/// Spawn column: horizontal center of the 4-wide shape matrix.
const SPAWN_X: f32 = NCOLS as f32 / 2.0 - 2.0;

pub struct Game {
    board: Board,
    active: Piece,
    /// Upcoming pieces, front is next. Always length `NUM_NEXT_PIECES`.
    upnext: VecDeque<Piece>,
    rng: SimpleRng,
    score: u32,
    level: f32,
    lines: u32,
    speed: f32,
    /// Set by a hard drop so the driver ticks without waiting out the interval.
    force: bool,
    game_over: bool,
}

impl Game {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Piece::new(rng.next_kind(), SPAWN_X, 0.0);
        let upnext = (0..NUM_NEXT_PIECES)
            .map(|_| Piece::new(rng.next_kind(), 0.0, 0.0))
            .collect();

        Self {
            board: Board::new(),
            active,
            upnext,
            rng,
            score: 0,
            level: BASE_LEVEL,
            lines: 0,
            speed: BASE_SPEED,
            force: false,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Landing preview for the active piece.
    pub fn ghost(&self) -> Piece {
        self.active.dropped(&self.board)
    }

    /// Upcoming pieces, next first.
    pub fn upnext(&self) -> impl Iterator<Item = &Piece> {
        self.upnext.iter()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Integer part of the fractional level counter.
    pub fn level(&self) -> u32 {
        self.level as u32
    }

    /// Current pace in updates per second.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Seconds between scheduled updates at the current pace.
    pub fn interval(&self) -> f32 {
        1.0 / self.speed
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Consume the hard-drop force flag.
    pub fn take_force(&mut self) -> bool {
        std::mem::take(&mut self.force)
    }

    /// Apply one polled input event. Illegal moves and rotations are silent
    /// no-ops, never errors.
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.game_over {
            return;
        }
        match event {
            InputEvent::Rotate => {
                self.active.try_rotate(&self.board);
            }
            InputEvent::MoveLeft => {
                self.active.try_move(&self.board, -1.0, 0.0);
            }
            InputEvent::MoveRight => {
                self.active.try_move(&self.board, 1.0, 0.0);
            }
            InputEvent::SoftDrop => {
                self.active.try_move(&self.board, 0.0, 1.0);
            }
            InputEvent::HardDrop => {
                while self.active.try_move(&self.board, 0.0, 1.0) {}
                self.force = true;
            }
        }
    }

    /// Advance gravity by `dt` cells. A failed descent means the piece has
    /// landed: lock it, bring up the next piece, then score any full rows.
    pub fn update(&mut self, dt: f32) {
        if self.game_over {
            return;
        }

        if !self.active.try_move(&self.board, 0.0, dt) {
            self.lock_active();
            let cleared = self.board.clear_full_rows();
            if cleared > 0 {
                self.apply_clear(cleared);
            }
        }
    }

    /// Commit the active piece and rotate the lookahead queue.
    fn lock_active(&mut self) {
        self.board.commit(&self.active);
        debug!(
            kind = self.active.kind.name(),
            y = self.active.y,
            "piece locked"
        );

        // Queue invariant: pop one, push one, length stays fixed.
        let mut next = self
            .upnext
            .pop_front()
            .unwrap_or_else(|| Piece::new(self.rng.next_kind(), 0.0, 0.0));
        next.x = SPAWN_X;
        self.upnext
            .push_back(Piece::new(self.rng.next_kind(), 0.0, 0.0));

        if !self.board.fits(next.x, next.y, next.shape()) {
            info!(score = self.score, lines = self.lines, "board topped out");
            self.game_over = true;
        }
        self.active = next;
    }

    /// Score a batch of `cleared` rows and advance level and speed.
    fn apply_clear(&mut self, cleared: usize) {
        let n = cleared.min(SCORE_SYSTEM.len());
        self.score += SCORE_SYSTEM[n - 1];
        self.lines += cleared as u32;

        // Speed steps up when the integer level is about to change.
        let next_level = self.level + cleared as f32 / 10.0;
        if next_level as u32 != self.level as u32 {
            self.speed += SPEED_STEP;
        }
        self.level = next_level;

        info!(
            cleared,
            score = self.score,
            level = self.level,
            speed = self.speed,
            "rows cleared"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, NLINES};

    fn game_with_active(kind: PieceKind, x: f32) -> Game {
        let mut game = Game::new(42);
        game.active = Piece::new(kind, x, 0.0);
        game
    }

    #[test]
    fn new_game_has_full_lookahead_and_centered_piece() {
        let game = Game::new(1);
        assert_eq!(game.upnext().count(), NUM_NEXT_PIECES);
        assert_eq!(game.active().x, 3.0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 1);
        assert_eq!(game.speed(), BASE_SPEED);
    }

    #[test]
    fn seeded_games_agree() {
        let a = Game::new(99);
        let b = Game::new(99);
        assert_eq!(a.active().kind, b.active().kind);
        let kinds_a: Vec<_> = a.upnext().map(|p| p.kind).collect();
        let kinds_b: Vec<_> = b.upnext().map(|p| p.kind).collect();
        assert_eq!(kinds_a, kinds_b);
    }

    #[test]
    fn gravity_accumulates_fractionally() {
        let mut game = game_with_active(PieceKind::Dash, 3.0);
        let y0 = game.active().y;
        game.update(1.0 / 60.0);
        assert!(game.active().y > y0);
        assert!(game.active().y < 1.0);
    }

    #[test]
    fn soft_drop_moves_one_row() {
        let mut game = game_with_active(PieceKind::Dash, 3.0);
        game.handle_input(InputEvent::SoftDrop);
        assert_eq!(game.active().y, 1.0);
    }

    #[test]
    fn hard_drop_reaches_floor_and_sets_force() {
        let mut game = game_with_active(PieceKind::Dash, 3.0);
        game.handle_input(InputEvent::HardDrop);

        // Dash occupies matrix row 1: rests at y = 18 on an empty board.
        assert_eq!(game.active().y, (NLINES - 2) as f32);
        assert!(game.take_force());
        assert!(!game.take_force());

        // Next gravity step fails and locks the piece.
        game.update(1.0);
        assert_eq!(game.board().get(3, 19), Some(5));
        assert_eq!(game.board().get(6, 19), Some(5));
    }

    #[test]
    fn lock_recenters_next_piece_and_refills_queue() {
        let mut game = game_with_active(PieceKind::Square, 0.0);
        let expected_kind = game.upnext().next().unwrap().kind;

        game.handle_input(InputEvent::HardDrop);
        game.update(1.0);

        assert_eq!(game.active().kind, expected_kind);
        assert_eq!(game.active().x, 3.0);
        assert_eq!(game.upnext().count(), NUM_NEXT_PIECES);
    }

    #[test]
    fn single_row_clear_scores_forty() {
        let mut game = game_with_active(PieceKind::Square, 0.0);
        // Fill the bottom two rows except the square's landing columns 1..=2.
        for y in [18, 19] {
            for x in 0..NCOLS as i32 {
                if !(1..=2).contains(&x) {
                    game.board_mut().set(x, y, 7);
                }
            }
        }
        // Leave a gap in row 18 so only row 19 completes.
        game.board_mut().set(9, 18, 0);

        game.handle_input(InputEvent::HardDrop);
        game.update(1.0);

        assert_eq!(game.score(), SCORE_SYSTEM[0]);
        assert_eq!(game.lines(), 1);
        // Row 18 leftovers compacted into row 19.
        assert_eq!(game.board().get(0, 19), Some(7));
    }

    #[test]
    fn quadruple_clear_scores_twelve_hundred() {
        let mut game = game_with_active(PieceKind::Dash, 3.0);
        for y in 16..20 {
            for x in 0..NCOLS as i32 {
                game.board_mut().set(x, y, 2);
            }
        }
        // Drop onto the stack, then the failed descent locks and scans.
        game.handle_input(InputEvent::HardDrop);
        game.update(1.0);

        assert_eq!(game.score(), SCORE_SYSTEM[3]);
        assert_eq!(game.lines(), 4);
    }

    #[test]
    fn speed_steps_on_integer_level_crossing() {
        let mut game = Game::new(1);
        let base = game.speed();

        // 1.0 -> 1.4: no crossing.
        game.apply_clear(4);
        assert_eq!(game.speed(), base);
        assert_eq!(game.level(), 1);

        // 1.4 -> 1.8 -> 2.2: one crossing, one step.
        game.apply_clear(4);
        assert_eq!(game.speed(), base);
        game.apply_clear(4);
        assert_eq!(game.speed(), base + SPEED_STEP);
        assert_eq!(game.level(), 2);
    }

    #[test]
    fn blocked_spawn_ends_the_game() {
        let mut game = game_with_active(PieceKind::Square, 0.0);
        // Wall off the spawn area so the dequeued piece cannot fit.
        for y in 0..4 {
            for x in 3..7 {
                game.board_mut().set(x, y, 8);
            }
        }
        // An oversized step fails immediately and locks in place.
        game.update(25.0);

        assert!(game.game_over());
        let y = game.active().y;
        game.update(1.0);
        assert_eq!(game.active().y, y, "updates stop after top-out");
    }

    #[test]
    fn input_ignored_after_game_over() {
        let mut game = Game::new(5);
        game.game_over = true;
        let x = game.active().x;
        game.handle_input(InputEvent::MoveLeft);
        assert_eq!(game.active().x, x);
    }

    #[test]
    fn ghost_matches_hard_drop_row() {
        let mut game = game_with_active(PieceKind::Elbow, 4.0);
        game.board_mut().set(5, 12, 3);

        let ghost_y = game.ghost().y;
        game.handle_input(InputEvent::HardDrop);
        assert_eq!(game.active().y, ghost_y);
    }
}
