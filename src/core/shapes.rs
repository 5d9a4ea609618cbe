//! Shape geometry: the seven piece matrices and the rotation transform.
//!
//! Each kind is a fixed 4x4 binary matrix. Rotation produces a new matrix
//! outright; there is no separate rotation state and no wall kicks, so four
//! rotations always return to the original orientation.

use crate::types::{ColorId, PieceKind};

/// 4x4 binary matrix, `shape[row][col]` (1 = filled).
pub type ShapeGrid = [[u8; 4]; 4];

const SQUARE: ShapeGrid = [
    [0, 0, 0, 0],
    [0, 1, 1, 0],
    [0, 1, 1, 0],
    [0, 0, 0, 0],
];

const LEFT_GUN: ShapeGrid = [
    [0, 0, 1, 0],
    [0, 0, 1, 0],
    [0, 1, 1, 0],
    [0, 0, 0, 0],
];

const RIGHT_GUN: ShapeGrid = [
    [0, 1, 0, 0],
    [0, 1, 0, 0],
    [0, 1, 1, 0],
    [0, 0, 0, 0],
];

const DASH: ShapeGrid = [
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

const ELBOW: ShapeGrid = [
    [0, 1, 0, 0],
    [0, 1, 1, 0],
    [0, 1, 0, 0],
    [0, 0, 0, 0],
];

const LEFT_SNAKE: ShapeGrid = [
    [0, 0, 0, 0],
    [1, 1, 0, 0],
    [0, 1, 1, 0],
    [0, 0, 0, 0],
];

const RIGHT_SNAKE: ShapeGrid = [
    [0, 0, 0, 0],
    [0, 1, 1, 0],
    [1, 1, 0, 0],
    [0, 0, 0, 0],
];

/// Spawn-orientation matrix for a kind.
pub fn shape_of(kind: PieceKind) -> &'static ShapeGrid {
    match kind {
        PieceKind::Square => &SQUARE,
        PieceKind::LeftGun => &LEFT_GUN,
        PieceKind::RightGun => &RIGHT_GUN,
        PieceKind::Dash => &DASH,
        PieceKind::Elbow => &ELBOW,
        PieceKind::LeftSnake => &LEFT_SNAKE,
        PieceKind::RightSnake => &RIGHT_SNAKE,
    }
}

/// Color identity for a kind. 1 is registered by the surface but unassigned;
/// 0 means empty.
pub fn color_of(kind: PieceKind) -> ColorId {
    match kind {
        PieceKind::Square => 2,
        PieceKind::LeftGun => 3,
        PieceKind::RightGun => 4,
        PieceKind::Dash => 5,
        PieceKind::Elbow => 6,
        PieceKind::LeftSnake => 7,
        PieceKind::RightSnake => 8,
    }
}

/// 90-degree clockwise rotation: `new[c][3-r] = old[r][c]`.
pub fn rotate_cw(shape: &ShapeGrid) -> ShapeGrid {
    let mut out = [[0u8; 4]; 4];
    for (r, row) in shape.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            out[c][3 - r] = cell;
        }
    }
    out
}
