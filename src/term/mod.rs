//! Terminal render surface.
//!
//! `fb` is the grid-addressable surface, `game_view` the pure projection of
//! game state onto it, `renderer` the crossterm flush layer. Only `renderer`
//! performs I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, Surface};
pub use game_view::{min_viewport, GameView};
pub use renderer::TerminalRenderer;
