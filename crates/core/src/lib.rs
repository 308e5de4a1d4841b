//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block simulation: game rules, state
//! machine, and scoring. It has **zero dependencies** on UI, networking, or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed and command sequence produce identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`board`]: The settled-cell grid with line clearing
//! - [`pieces`]: Shape catalog - the seven tetromino geometries and rotations
//! - [`piece`]: A live, positioned piece and the placement validity check
//! - [`rng`]: Seeded uniform piece selection
//! - [`scoring`]: Line-clear points, leveling, and the gravity curve
//! - [`session`]: The session state machine driven by ticks and commands
//! - [`snapshot`]: Frozen per-frame view for render/control loops
//!
//! # Game Rules
//!
//! - **Grid**: configurable dimensions, 10x20 by default
//! - **Rotation**: reject-on-invalid with no wall kicks; a rejected rotation
//!   leaves the piece exactly as it was
//! - **Locking**: a piece settles when gravity cannot move it down
//! - **Scoring**: 100/300/500/800 points times the current level for 1-4
//!   cleared rows; level rises every 10 lines and shortens the fall interval
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::{Command, EngineConfig, Phase};
//!
//! let mut game = GameSession::new(EngineConfig::default(), 12345);
//!
//! // The first tick spawns a piece; commands steer it between ticks.
//! game.tick(16);
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.apply(Command::HardDrop);
//!
//! // The piece settled and the session is ready to spawn the next one.
//! assert_eq!(game.phase(), Phase::Spawning);
//! assert!(game.board().cells().iter().any(|cell| cell.is_some()));
//! ```
//!
//! # Timing
//!
//! The engine owns no clock. Call [`GameSession::tick`] from the surrounding
//! loop with elapsed milliseconds; gravity fires whenever the accumulated
//! time crosses the current fall interval.

pub mod board;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockOutcome};
pub use piece::Piece;
pub use pieces::{shape, shapes, PieceShape};
pub use rng::{PieceSource, SimpleRng};
pub use session::GameSession;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
