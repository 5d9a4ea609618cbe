//! Pure game logic: shapes, pieces, board, engine, randomization.
//!
//! Nothing in here touches the terminal or any other I/O; everything is
//! deterministic given a seed and testable in isolation.

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod shapes;

pub use board::Board;
pub use engine::Game;
pub use piece::{BoardQuery, Piece};
pub use rng::SimpleRng;
pub use shapes::{color_of, rotate_cw, shape_of, ShapeGrid};
