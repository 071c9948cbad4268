use serde::Serialize;

use crate::piece::ActivePiece;
use crate::types::{Cell, Color, GameStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub index: usize,
    pub color: Color,
    pub row: i32,
    pub col: i32,
    /// Shape matrix rows, 0/1, top to bottom
    pub shape: Vec<Vec<u8>>,
    /// Board coordinates `(row, col)` of every filled cell
    pub cells: Vec<(i32, i32)>,
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            index: value.index,
            color: value.color,
            row: value.row,
            col: value.col,
            shape: value.shape.to_rows(),
            cells: value.cells().collect(),
        }
    }
}

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cells
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    /// Row the active piece would rest on after a hard drop
    pub ghost_row: Option<i32>,
    pub score: u32,
    pub lines: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.board[row * self.cols + col]
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}
