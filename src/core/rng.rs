//! Piece randomization.
//!
//! A small seedable LCG drives a uniform, independent draw over the seven
//! kinds. There is deliberately no bag fairness: repeats are possible, exactly
//! as in the original game.

use crate::types::{PieceKind, ALL_KINDS};

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would collapse the low bits early on.
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    pub fn next_range(&mut self, max: u32) -> u32 {
        // The multiplier's low bits are weak; fold the high half in first.
        let v = self.next_u32();
        (v ^ (v >> 16)) % max
    }

    /// Uniform draw over the seven piece kinds.
    pub fn next_kind(&mut self) -> PieceKind {
        ALL_KINDS[self.next_range(ALL_KINDS.len() as u32) as usize]
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}
