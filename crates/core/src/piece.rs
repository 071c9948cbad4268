//! Active piece controller - the single falling piece and its moves
//!
//! Every move is tentative: apply it, ask the board whether the piece collides, and undo
//! it if so. A rejected move therefore leaves the piece exactly as it was.

use serde::Serialize;

use crate::board::Board;
use crate::catalog::PieceDef;
use crate::shape::Shape;
use crate::types::{spawn_col, Color, SPAWN_ROW};

/// Active falling piece
///
/// `row`/`col` locate the top-left cell of the shape matrix on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActivePiece {
    /// Catalog index the piece was dealt from
    pub index: usize,
    pub shape: Shape,
    pub color: Color,
    pub row: i32,
    pub col: i32,
}

impl ActivePiece {
    /// Create a piece at the spawn position of a board `cols` wide
    pub fn spawn(index: usize, def: &PieceDef, cols: usize) -> Self {
        Self {
            index,
            shape: def.shape.clone(),
            color: def.color,
            row: SPAWN_ROW,
            col: spawn_col(cols),
        }
    }

    /// Board coordinates `(row, col)` of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dr, dc)| (self.row + dr as i32, self.col + dc as i32))
    }
}

/// Outcome of a one-row descent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// The piece is one row lower
    Moved,
    /// The row below is blocked; the piece stays where it was
    Landed,
}

#[derive(Debug, Clone, Default)]
pub struct PieceController {
    active: Option<ActivePiece>,
}

impl PieceController {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Replace the active piece with a fresh one at the spawn position
    ///
    /// Does not check for collision; the caller decides what a blocked spawn means.
    pub fn spawn(&mut self, index: usize, def: &PieceDef, cols: usize) -> &ActivePiece {
        self.active.insert(ActivePiece::spawn(index, def, cols))
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Whether the active piece overlaps anything at its current position
    pub fn collides(&self, board: &Board) -> bool {
        self.active
            .as_ref()
            .map(|piece| board.collides(piece))
            .unwrap_or(false)
    }

    /// Shift by (d_row, d_col) unless that collides
    pub fn try_move(&mut self, board: &Board, d_row: i32, d_col: i32) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        piece.row += d_row;
        piece.col += d_col;
        if board.collides(piece) {
            piece.row -= d_row;
            piece.col -= d_col;
            return false;
        }
        true
    }

    /// Rotate clockwise in place unless that collides (no wall kicks)
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let rotated = piece.shape.rotate_clockwise();
        let original = std::mem::replace(&mut piece.shape, rotated);
        if board.collides(piece) {
            piece.shape = original;
            return false;
        }
        true
    }

    /// Move down one row, or report that the piece has landed
    ///
    /// Returns `None` when there is no active piece.
    pub fn descend_one_step(&mut self, board: &Board) -> Option<Descent> {
        self.active.as_ref()?;
        if self.try_move(board, 1, 0) {
            Some(Descent::Moved)
        } else {
            Some(Descent::Landed)
        }
    }

    /// Push the piece down until the next row collides, then back off to the last free row
    ///
    /// Returns the number of rows the piece ended up below its starting row.
    pub fn drop_to_rest(&mut self, board: &Board) -> Option<i32> {
        let piece = self.active.as_mut()?;
        let start = piece.row;
        while !board.collides(piece) {
            piece.row += 1;
        }
        piece.row -= 1;
        Some(piece.row - start)
    }

    /// Row the active piece would rest on after a hard drop, without moving it
    pub fn resting_row(&self, board: &Board) -> Option<i32> {
        let piece = self.active.as_ref()?;
        let mut row = piece.row;
        while !board.collides_at(&piece.shape, row + 1, piece.col) {
            row += 1;
        }
        Some(row)
    }
}
