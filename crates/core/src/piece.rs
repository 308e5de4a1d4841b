//! Piece module - a live, positioned, rotatable tetromino instance
//!
//! Movement and rotation never mutate in place: [`Piece::translated`] and
//! [`Piece::rotated`] build candidate states, and the session commits a
//! candidate only when [`Piece::fits`] accepts it. A rejected candidate is
//! dropped, leaving the prior position and rotation untouched.

use blockfall_types::PieceKind;

use crate::board::Board;
use crate::pieces::{self, PieceShape};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Rotation-state index, interpreted modulo the kind's state count
    pub rot: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the canonical spawn anchor for the given board width
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let (x, y) = pieces::spawn_anchor(kind, board_width);
        Self { kind, rot: 0, x, y }
    }

    /// Get the cell offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        pieces::shape(self.kind, self.rot)
    }

    /// Absolute board coordinates of the four occupied cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut cells = self.shape();
        for cell in &mut cells {
            cell.0 += self.x;
            cell.1 += self.y;
        }
        cells
    }

    /// Candidate state translated by one step
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate state advanced one rotation step clockwise
    pub fn rotated(&self) -> Self {
        Self {
            rot: (self.rot + 1) % pieces::rotation_count(self.kind),
            ..*self
        }
    }

    /// Validity check: all four cells in-bounds and unoccupied
    ///
    /// Columns must lie in [0, width) and rows below height. Rows above the
    /// visible top (y < 0) have no board cell to collide with, so they are
    /// excluded from the occupancy check but still column-checked. All four
    /// cells must pass; there is no partial placement.
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| {
            if x < 0 || x >= board.width() as i8 || y >= board.height() as i8 {
                return false;
            }
            y < 0 || !board.is_occupied(x, y)
        })
    }
}
