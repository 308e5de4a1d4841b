//! Snapshot module - the frozen per-frame view of a session
//!
//! The engine is single-writer: a render or control loop running off-thread
//! must copy one [`GameSnapshot`] per frame and read from the copy, never
//! from live state. Snapshots serialize with serde so out-of-process
//! consumers (viewers, score persistence) can take the same view as JSON.
//!
//! Kinds and phases cross the boundary as lowercase wire enums rather than
//! exposing the internal types to the serialized format.

use serde::{Deserialize, Serialize};

use blockfall_types::{Phase, PieceKind};

use crate::piece::Piece;

/// Lowercase wire form of [`PieceKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceName {
    #[serde(rename = "i")]
    I,
    #[serde(rename = "o")]
    O,
    #[serde(rename = "t")]
    T,
    #[serde(rename = "s")]
    S,
    #[serde(rename = "z")]
    Z,
    #[serde(rename = "j")]
    J,
    #[serde(rename = "l")]
    L,
}

impl From<PieceKind> for PieceName {
    fn from(value: PieceKind) -> Self {
        match value {
            PieceKind::I => Self::I,
            PieceKind::O => Self::O,
            PieceKind::T => Self::T,
            PieceKind::S => Self::S,
            PieceKind::Z => Self::Z,
            PieceKind::J => Self::J,
            PieceKind::L => Self::L,
        }
    }
}

impl From<PieceName> for PieceKind {
    fn from(value: PieceName) -> Self {
        match value {
            PieceName::I => Self::I,
            PieceName::O => Self::O,
            PieceName::T => Self::T,
            PieceName::S => Self::S,
            PieceName::Z => Self::Z,
            PieceName::J => Self::J,
            PieceName::L => Self::L,
        }
    }
}

/// Wire form of [`Phase`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseName {
    #[serde(rename = "spawning")]
    Spawning,
    #[serde(rename = "falling")]
    Falling,
    #[serde(rename = "locking")]
    Locking,
    #[serde(rename = "clearing")]
    Clearing,
    #[serde(rename = "game_over")]
    GameOver,
}

impl From<Phase> for PhaseName {
    fn from(value: Phase) -> Self {
        match value {
            Phase::Spawning => Self::Spawning,
            Phase::Falling => Self::Falling,
            Phase::Locking => Self::Locking,
            Phase::Clearing => Self::Clearing,
            Phase::GameOver => Self::GameOver,
        }
    }
}

impl From<PhaseName> for Phase {
    fn from(value: PhaseName) -> Self {
        match value {
            PhaseName::Spawning => Self::Spawning,
            PhaseName::Falling => Self::Falling,
            PhaseName::Locking => Self::Locking,
            PhaseName::Clearing => Self::Clearing,
            PhaseName::GameOver => Self::GameOver,
        }
    }
}

/// Frozen view of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceName,
    pub rot: u8,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind.into(),
            rot: value.rot,
            x: value.x,
            y: value.y,
        }
    }
}

/// Frozen view of a whole session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major grid; 0 = empty, 1-7 = settled piece identity
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: PieceName,
    pub phase: PhaseName,
    pub paused: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub seed: u32,
}

impl GameSnapshot {
    /// Whether the session still accepts piece commands
    pub fn playable(&self) -> bool {
        !self.paused && self.phase != PhaseName::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            ghost_y: None,
            next: PieceName::I,
            phase: PhaseName::Spawning,
            paused: false,
            score: 0,
            level: 1,
            lines: 0,
            seed: 0,
        }
    }
}
