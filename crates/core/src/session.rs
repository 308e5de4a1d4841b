//! Game session - the engine state machine
//!
//! Orchestrates spawn -> timer-driven descent -> lock -> clear -> next spawn,
//! consuming external elapsed-time ticks and discrete commands. The session
//! owns the board exclusively; the surrounding loop reads state through the
//! query surface or a [`GameSnapshot`].
//!
//! Each `tick` call advances at most one phase step. `Falling` is
//! additionally gated by the accumulated fall timer; `Locking`, `Clearing`
//! and `Spawning` resolve on the next tick regardless of elapsed time.
//! Movement and rotation commands apply synchronously between ticks and never
//! transition phases themselves.

use blockfall_types::{Cell, Command, EngineConfig, Phase, PieceKind};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PieceSource;
use crate::scoring;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};

/// Complete simulation state for one game
#[derive(Debug, Clone)]
pub struct GameSession {
    config: EngineConfig,
    board: Board,
    current: Option<Piece>,
    next_kind: PieceKind,
    source: PieceSource,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    /// Fall interval currently in effect (derived from level)
    fall_interval_ms: u32,
    /// Time accumulated toward the next automatic descent
    fall_acc_ms: u32,
    paused: bool,
    seed: u32,
}

impl GameSession {
    /// Create a new session in the `Spawning` phase
    pub fn new(config: EngineConfig, seed: u32) -> Self {
        assert!(
            config.is_playable(),
            "engine configuration is not playable: {:?}",
            config
        );

        let mut source = PieceSource::new(seed);
        let next_kind = source.draw();

        Self {
            config,
            board: Board::new(config.width, config.height),
            current: None,
            next_kind,
            source,
            phase: Phase::Spawning,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: scoring::fall_interval_ms(1, &config),
            fall_acc_ms: 0,
            paused: false,
            seed,
        }
    }

    /// Advance the state machine by one elapsed-time notification
    ///
    /// Returns true when the call changed game state. Zero elapsed time has
    /// no interpretation in this model and is ignored, as are ticks while
    /// paused or after game over.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.phase.is_terminal() || elapsed_ms == 0 {
            return false;
        }

        match self.phase {
            Phase::Spawning => {
                self.spawn_step();
                true
            }
            Phase::Falling => self.fall_step(elapsed_ms),
            Phase::Locking => {
                self.lock_step();
                true
            }
            Phase::Clearing => {
                self.clear_step();
                true
            }
            Phase::GameOver => false,
        }
    }

    /// Apply a driver command
    ///
    /// Returns true if the command changed state; a rejected move/rotation
    /// is a normal outcome, not a fault, and leaves state untouched.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Reset => {
                self.reset();
                true
            }
            Command::TogglePause => {
                if self.phase.is_terminal() {
                    false
                } else {
                    self.paused = !self.paused;
                    true
                }
            }
            Command::MoveLeft => self.accepting_piece_commands() && self.try_move(-1, 0),
            Command::MoveRight => self.accepting_piece_commands() && self.try_move(1, 0),
            Command::Rotate => self.accepting_piece_commands() && self.try_rotate(),
            Command::SoftDrop => self.accepting_piece_commands() && self.soft_drop(),
            Command::HardDrop => self.accepting_piece_commands() && self.hard_drop(),
        }
    }

    /// Re-initialize to a fresh `Spawning` state
    ///
    /// Board, score, level and lines are cleared; the piece stream continues
    /// from the live RNG state.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = None;
        self.next_kind = self.source.draw();
        self.phase = Phase::Spawning;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval_ms = scoring::fall_interval_ms(1, &self.config);
        self.fall_acc_ms = 0;
        self.paused = false;
    }

    // ----- phase steps -----

    /// Promote the queued kind to the current piece at the spawn anchor
    fn spawn_step(&mut self) {
        let kind = self.next_kind;
        self.next_kind = self.source.draw();

        let piece = Piece::spawn(kind, self.config.width);
        if piece.fits(&self.board) {
            self.current = Some(piece);
            self.fall_acc_ms = 0;
            self.phase = Phase::Falling;
        } else {
            // Spawn cell already occupied: the stack reached the top
            self.phase = Phase::GameOver;
        }
    }

    /// Accumulate fall time; on expiry attempt one descent
    fn fall_step(&mut self, elapsed_ms: u32) -> bool {
        self.fall_acc_ms = self.fall_acc_ms.saturating_add(elapsed_ms);
        if self.fall_acc_ms < self.fall_interval_ms {
            return false;
        }

        self.fall_acc_ms = 0;
        if !self.try_move(0, 1) {
            self.phase = Phase::Locking;
        }
        true
    }

    /// Commit the current piece's cells into the board
    fn lock_step(&mut self) {
        let Some(piece) = self.current.take() else {
            self.phase = Phase::Spawning;
            return;
        };

        let outcome = self.board.lock_cells(&piece.cells(), piece.kind);
        self.phase = if outcome.above_top {
            // Settled above the visible top
            Phase::GameOver
        } else {
            Phase::Clearing
        };
    }

    /// Remove full rows and feed the count to scoring/leveling
    fn clear_step(&mut self) {
        let cleared = self.board.clear_full_rows().len();
        if cleared > 0 {
            self.score = self
                .score
                .saturating_add(scoring::line_clear_score(cleared, self.level));
            self.lines += cleared as u32;
            self.level = scoring::level_for_lines(self.lines, self.config.lines_per_level);
            self.fall_interval_ms = scoring::fall_interval_ms(self.level, &self.config);
        }
        self.phase = Phase::Spawning;
    }

    // ----- piece commands -----

    /// Piece commands are live only while a piece is falling
    fn accepting_piece_commands(&self) -> bool {
        !self.paused && self.phase == Phase::Falling
    }

    /// Try to move the current piece; reject-and-revert on collision
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        let candidate = current.translated(dx, dy);
        if candidate.fits(&self.board) {
            self.current = Some(candidate);
            return true;
        }
        false
    }

    /// Try to advance the rotation index; reject-and-revert on collision
    ///
    /// No wall-kick search: if the naive rotated placement collides the
    /// rotation fails and the piece keeps its prior state entirely.
    fn try_rotate(&mut self) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        let candidate = current.rotated();
        if candidate.fits(&self.board) {
            self.current = Some(candidate);
            return true;
        }
        false
    }

    /// One immediate descent; restarts the fall timer on success
    fn soft_drop(&mut self) -> bool {
        let moved = self.try_move(0, 1);
        if moved {
            self.fall_acc_ms = 0;
        }
        moved
    }

    /// Descend until rejected, then lock and clear synchronously
    ///
    /// Composite of the descent and locking primitives; ends in `Spawning`
    /// (or `GameOver` when the piece settled above the top).
    fn hard_drop(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }

        while self.try_move(0, 1) {}

        self.phase = Phase::Locking;
        self.lock_step();
        if self.phase == Phase::Clearing {
            self.clear_step();
        }
        true
    }

    // ----- query surface -----

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell content at (x, y); None if out of bounds
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        self.board.get(x, y)
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    /// Absolute cells of the current piece (for rendering)
    pub fn current_cells(&self) -> Option<[(i8, i8); 4]> {
        self.current.map(|piece| piece.cells())
    }

    /// Row at which the current piece would settle
    pub fn ghost_y(&self) -> Option<i8> {
        let mut ghost = self.current?;
        while ghost.translated(0, 1).fits(&self.board) {
            ghost = ghost.translated(0, 1);
        }
        Some(ghost.y)
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Fall interval currently in effect (ms per one-cell descent)
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Write a frozen view of the session into `out`
    ///
    /// The surrounding loop takes one snapshot per frame and renders from the
    /// copy, never from live state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.config.width;
        out.height = self.config.height;
        self.board.write_u8_grid(&mut out.board);
        out.active = self.current.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next_kind.into();
        out.phase = self.phase.into();
        out.paused = self.paused;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }

    // ----- test scaffolding -----

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn force_current(&mut self, piece: Piece) {
        self.current = Some(piece);
        self.phase = Phase::Falling;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(EngineConfig::default(), 1)
    }
}
