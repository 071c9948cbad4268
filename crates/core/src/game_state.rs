//! Game state module - the engine that owns and drives everything else
//!
//! `GameState` owns the board, the bag randomizer, the active piece controller and the
//! score. All mutation goes through its methods, and each one runs to completion before
//! the next begins, so a gravity tick and a player command never interleave.
//!
//! The engine is unaware of real time: the host calls [`GameState::tick`] every
//! `gravity_interval_ms` while the status is `Running`.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::Board;
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::piece::{ActivePiece, Descent, PieceController};
use crate::rng::BagRandomizer;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameCommand, GameEvent, GameStatus};

/// Events held for the host before the oldest is discarded
pub const MAX_PENDING_EVENTS: usize = 16;

#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    catalog: Catalog,
    board: Board,
    bag: BagRandomizer,
    controller: PieceController,
    score: u32,
    /// Rows cleared since the game started
    lines: u32,
    status: GameStatus,
    events: ArrayVec<GameEvent, MAX_PENDING_EVENTS>,
}

impl GameState {
    /// Build an engine, rejecting a bad configuration or catalog up front
    pub fn new(config: EngineConfig, catalog: Catalog) -> Result<Self, ConfigError> {
        config.validate(&catalog)?;
        Ok(Self::build(config, catalog))
    }

    /// Standard 10x20 engine with the seven tetrominoes and a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::build(EngineConfig::default().with_seed(seed), Catalog::standard())
    }

    fn build(config: EngineConfig, catalog: Catalog) -> Self {
        let bag = BagRandomizer::new(catalog.len(), config.seed);
        Self {
            board: Board::new(config.rows, config.cols),
            bag,
            controller: PieceController::new(),
            score: 0,
            lines: 0,
            status: GameStatus::NotStarted,
            events: ArrayVec::new(),
            config,
            catalog,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.controller.active()
    }

    pub fn bag(&self) -> &BagRandomizer {
        &self.bag
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Row the active piece would come to rest on
    pub fn ghost_row(&self) -> Option<i32> {
        self.controller.resting_row(&self.board)
    }

    /// Start a new game
    ///
    /// No-op while a game is running. Otherwise clears the board, deals a fresh bag,
    /// spawns the first piece and zeroes the score.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }

        self.board.clear();
        self.bag.reset();
        self.score = 0;
        self.lines = 0;
        self.status = GameStatus::Running;
        info!(rows = self.config.rows, cols = self.config.cols, "game started");
        self.spawn_next();
        true
    }

    /// Clear everything and return to `NotStarted`
    pub fn reset(&mut self) {
        self.board.clear();
        self.bag.reset();
        self.controller.clear();
        self.score = 0;
        self.lines = 0;
        self.status = GameStatus::NotStarted;
        info!("game reset");
    }

    /// One gravity step
    ///
    /// Returns false when nothing happened (not running).
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.controller.descend_one_step(&self.board) {
            Some(Descent::Moved) => true,
            Some(Descent::Landed) => {
                self.settle(0);
                true
            }
            None => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.is_running() && self.controller.try_move(&self.board, 0, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.is_running() && self.controller.try_move(&self.board, 0, 1)
    }

    pub fn rotate(&mut self) -> bool {
        self.is_running() && self.controller.try_rotate(&self.board)
    }

    /// Manual one-row descent
    ///
    /// A descent that moves scores `soft_drop_points`; one that lands locks the piece
    /// like a gravity tick and scores nothing extra.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.controller.descend_one_step(&self.board) {
            Some(Descent::Moved) => {
                self.score += self.config.soft_drop_points;
                true
            }
            Some(Descent::Landed) => {
                self.settle(0);
                true
            }
            None => false,
        }
    }

    /// Drop to the resting row, lock, and award the hard-drop bonus
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(distance) = self.controller.drop_to_rest(&self.board) else {
            return false;
        };
        debug!(distance, "hard drop");
        self.settle(self.config.hard_drop_bonus);
        true
    }

    /// Apply a host command; returns whether the state changed
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Start => self.start(),
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::Rotate => self.rotate(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Take every event raised since the last call
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, MAX_PENDING_EVENTS> {
        std::mem::take(&mut self.events)
    }

    /// Lock the active piece where it is, clear rows, score, and spawn the next piece
    fn settle(&mut self, bonus: u32) {
        let Some(piece) = self.controller.active() else {
            return;
        };
        self.board.lock(piece);

        let rows_cleared = self.board.clear_full_rows() as u32;
        let points = rows_cleared * self.config.line_clear_points + bonus;
        self.score += points;
        self.lines += rows_cleared;
        debug!(rows_cleared, points, score = self.score, "piece locked");
        self.push_event(GameEvent::PieceLocked {
            rows_cleared,
            points,
        });

        self.spawn_next();
    }

    /// Deal the next piece; a spawn that collides ends the game
    fn spawn_next(&mut self) {
        let index = self.bag.next();
        let Some(def) = self.catalog.get(index) else {
            return;
        };
        let piece = self.controller.spawn(index, def, self.board.cols());
        debug!(index, row = piece.row, col = piece.col, "spawned piece");

        if self.controller.collides(&self.board) {
            self.status = GameStatus::GameOver;
            info!(final_score = self.score, "game over");
            self.push_event(GameEvent::GameOver {
                final_score: self.score,
            });
        }
    }

    /// Queue an event; when full, the oldest `PieceLocked` makes room so game-over
    /// notifications survive an undrained queue
    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            let victim = self
                .events
                .iter()
                .position(|e| matches!(e, GameEvent::PieceLocked { .. }))
                .unwrap_or(0);
            self.events.remove(victim);
        }
        self.events.push(event);
    }

    /// Fill `out` with the current state, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.controller.active().map(ActiveSnapshot::from);
        out.ghost_row = self.ghost_row();
        out.score = self.score;
        out.lines = self.lines;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::build(EngineConfig::default(), Catalog::standard())
    }
}
