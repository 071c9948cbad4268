//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules and state machine. It has no dependencies
//! on terminals, timers or I/O: a host feeds it commands and gravity ticks and reads back
//! snapshots and events.
//!
//! # Module Structure
//!
//! - [`catalog`]: the piece shapes and colors pieces are dealt from
//! - [`shape`]: 0/1 shape matrices and clockwise rotation
//! - [`rng`]: bag randomizer with repeat avoidance
//! - [`board`]: the grid, collision queries, locking and line clearing
//! - [`piece`]: the active piece and its tentative moves
//! - [`game_state`]: the engine tying everything together, plus scoring
//! - [`config`]: board size, timing and scoring parameters
//!
//! # Game Rules
//!
//! - The first seven pieces of a game are one shuffled bag; afterwards pieces are drawn
//!   uniformly, never repeating the previous piece
//! - Moves and rotations that would collide are rejected outright (no wall kicks)
//! - A row cleared scores 100, a hard drop 30, a manual descent that does not land 1
//! - A piece that collides as soon as it spawns ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{GameCommand, GameStatus};
//!
//! let mut game = GameState::with_seed(12345);
//! game.apply(GameCommand::Start);
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::Rotate);
//! game.apply(GameCommand::HardDrop);
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! assert!(game.score() >= 30);
//! ```
//!
//! # Timing
//!
//! The engine never looks at a clock. Call [`GameState::tick`](game_state::GameState::tick)
//! once per gravity interval (`EngineConfig::gravity_interval_ms`, 350ms by default) while
//! the game is running.

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{standard_shape, Catalog, PieceDef};
pub use config::{EngineConfig, MAX_BOARD_SIDE};
pub use error::ConfigError;
pub use game_state::GameState;
pub use piece::{ActivePiece, Descent, PieceController};
pub use rng::BagRandomizer;
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
