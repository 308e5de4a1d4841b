//! Shape catalog - the seven tetromino geometries and their rotation states
//!
//! Each kind carries a static, ordered list of rotation states; a rotation
//! state is the set of four cell offsets inside the piece's bounding box.
//! Rotation-state counts are geometric facts, not tuning: the O tiling is
//! symmetric under 90-degree turns (1 state), I/S/Z repeat after a half turn
//! (2 states), and T/J/L need the full cycle (4 states).

use blockfall_types::PieceKind;

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// One rotation state - four occupied cells inside the bounding box
pub type PieceShape = [CellOffset; 4];

/// I states: horizontal bar on row 1, vertical bar on column 2 (4x4 box)
const I_STATES: [PieceShape; 2] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
];

/// O state: 2x2 block centered in the 4-wide box
const O_STATES: [PieceShape; 1] = [[(1, 0), (2, 0), (1, 1), (2, 1)]];

/// T states, clockwise from spawn (3x3 box)
const T_STATES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

/// S states (3x3 box)
const S_STATES: [PieceShape; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

/// Z states (3x3 box)
const Z_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

/// J states, clockwise from spawn (3x3 box)
const J_STATES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

/// L states, clockwise from spawn (3x3 box)
const L_STATES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

/// Get the ordered rotation states for a piece kind
pub fn shapes(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Number of distinct rotation states for a piece kind
pub fn rotation_count(kind: PieceKind) -> u8 {
    shapes(kind).len() as u8
}

/// Get the shape for a rotation index (taken modulo the state count)
pub fn shape(kind: PieceKind, rot: u8) -> PieceShape {
    let states = shapes(kind);
    states[rot as usize % states.len()]
}

/// Width of the bounding box the rotation states are defined in
pub fn box_width(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::I | PieceKind::O => 4,
        _ => 3,
    }
}

/// Canonical spawn anchor: bounding box horizontally centered, top at row 0
pub fn spawn_anchor(kind: PieceKind, board_width: u8) -> (i8, i8) {
    let x = board_width.saturating_sub(box_width(kind)) / 2;
    (x as i8, 0)
}
