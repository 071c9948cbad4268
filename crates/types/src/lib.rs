//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no behavior beyond parsing and naming, so it can be
//! shared by the engine, the terminal host and any other front end.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: row 0, column `BOARD_WIDTH / 2 - 2`
//!
//! # Timing and Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 350 | Interval between gravity ticks |
//! | `INPUT_DEBOUNCE_MS` | 10 | Minimum spacing between accepted key presses |
//! | `LINE_CLEAR_POINTS` | 100 | Points per row cleared |
//! | `HARD_DROP_BONUS` | 30 | Flat bonus per hard drop |
//! | `SOFT_DROP_POINTS` | 1 | Points per manual descent that does not lock |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, GameCommand, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.index(), 2);
//! assert_eq!(piece.color(), Color::Purple);
//!
//! assert_eq!(GameCommand::from_str("hardDrop"), Some(GameCommand::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Row at which new pieces spawn (top of the shape matrix)
pub const SPAWN_ROW: i32 = 0;

/// Gravity step interval in milliseconds
pub const GRAVITY_INTERVAL_MS: u32 = 350;

/// Key presses closer together than this are dropped by the host
pub const INPUT_DEBOUNCE_MS: u32 = 10;

/// Points per row removed by a single lock
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Flat bonus for every hard drop
pub const HARD_DROP_BONUS: u32 = 30;

/// Points for a manual descent that does not itself lock the piece
pub const SOFT_DROP_POINTS: u32 = 1;

/// Number of pieces in the standard catalog
pub const PIECE_COUNT: usize = 7;

/// Spawn column for a board `cols` wide (center-biased)
pub fn spawn_col(cols: usize) -> i32 {
    (cols / 2) as i32 - 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_defaults() {
        assert_eq!(LINE_CLEAR_POINTS, 100);
        assert_eq!(HARD_DROP_BONUS, 30);
        assert_eq!(SOFT_DROP_POINTS, 1);
    }

    #[test]
    fn test_spawn_col_is_center_biased() {
        assert_eq!(spawn_col(BOARD_WIDTH), 3);
        assert_eq!(spawn_col(4), 0);
    }

    #[test]
    fn test_piece_index_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(PieceKind::from_index(PIECE_COUNT), None);
    }

    #[test]
    fn test_command_names_parse_back() {
        for cmd in GameCommand::ALL {
            assert_eq!(GameCommand::from_str(cmd.as_str()), Some(cmd));
        }
    }
}

/// The seven tetromino piece kinds, in catalog order
///
/// The discriminant order is the catalog index: I=0, O=1, T=2, L=3, J=4, S=5, Z=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Catalog index of this kind
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Color token associated with this kind
    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::SkyBlue,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Purple,
            PieceKind::L => Color::Orange,
            PieceKind::J => Color::Blue,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Red,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Color token written into board cells when a piece locks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    SkyBlue,
    Yellow,
    Purple,
    Orange,
    Blue,
    Green,
    Red,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::SkyBlue => "skyblue",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(Color)`: occupied by a locked piece of that color
pub type Cell = Option<Color>;

/// Commands a host can send to the engine
///
/// Commands that do not apply in the current status are ignored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameCommand {
    /// Begin a new game (ignored while one is running)
    Start,
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down, scoring a point if it did not land
    SoftDrop,
    /// Rotate piece a quarter turn (transpose, then reverse rows)
    Rotate,
    /// Drop piece to its resting row and lock it
    HardDrop,
    /// Clear everything and return to the not-started state
    Reset,
}

impl GameCommand {
    pub const ALL: [GameCommand; 7] = [
        GameCommand::Start,
        GameCommand::MoveLeft,
        GameCommand::MoveRight,
        GameCommand::SoftDrop,
        GameCommand::Rotate,
        GameCommand::HardDrop,
        GameCommand::Reset,
    ];

    /// Parse command from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameCommand::Start),
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "rotate" => Some(GameCommand::Rotate),
            "harddrop" => Some(GameCommand::HardDrop),
            "reset" => Some(GameCommand::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::Start => "start",
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::Rotate => "rotate",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::Reset => "reset",
        }
    }
}

/// Lifecycle of a game
///
/// `NotStarted -> Running` on start, `Running -> GameOver` when a freshly spawned piece
/// collides, and any status returns to `NotStarted` on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "not_started",
            GameStatus::Running => "running",
            GameStatus::GameOver => "game_over",
        }
    }
}

/// Notification emitted by the engine, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A piece locked; `points` covers line clears plus any hard-drop bonus
    PieceLocked { rows_cleared: u32, points: u32 },
    /// A freshly spawned piece collided; the game is over
    GameOver { final_score: u32 },
}
