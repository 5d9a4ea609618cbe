//! Core types shared across the crate.
//! Pure data with no external dependencies.

/// Board dimensions (rows x columns).
pub const NLINES: usize = 20;
pub const NCOLS: usize = 10;

/// Number of upcoming pieces kept in the lookahead queue.
pub const NUM_NEXT_PIECES: usize = 3;

/// Starting pace in updates per second.
pub const BASE_SPEED: f32 = 60.0;

/// Added to the pace each time the integer level increases.
pub const SPEED_STEP: f32 = 10.0;

/// Level counter starts at 1 and gains 1/10 per cleared line.
pub const BASE_LEVEL: f32 = 1.0;

/// Points awarded for clearing 1..=4 rows in one lock.
pub const SCORE_SYSTEM: [u32; 4] = [40, 100, 300, 1200];

/// Color identity stored in board cells. 0 is empty/neutral, 1..=8 are the
/// color pairs registered by the render surface.
pub type ColorId = u8;

/// The seven piece kinds, named as in the original game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// O
    Square,
    /// J
    LeftGun,
    /// L
    RightGun,
    /// I
    Dash,
    /// T
    Elbow,
    /// S
    LeftSnake,
    /// Z
    RightSnake,
}

/// All kinds, in draw-table order.
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::Square,
    PieceKind::LeftGun,
    PieceKind::RightGun,
    PieceKind::Dash,
    PieceKind::Elbow,
    PieceKind::LeftSnake,
    PieceKind::RightSnake,
];

impl PieceKind {
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Square => "square",
            PieceKind::LeftGun => "leftgun",
            PieceKind::RightGun => "rightgun",
            PieceKind::Dash => "dash",
            PieceKind::Elbow => "elbow",
            PieceKind::LeftSnake => "leftsnake",
            PieceKind::RightSnake => "rightsnake",
        }
    }
}

/// A discrete input event delivered to the engine, at most one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Rotate,
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
}
