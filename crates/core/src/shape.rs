//! Shape module - rectangular 0/1 matrices and quarter-turn rotation
//!
//! A shape is stored row-major in a fixed-capacity buffer (at most 4x4), so rotating
//! produces a fresh value without heap allocation and a rejected rotation is undone by
//! putting the previous value back.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::error::ConfigError;

/// Largest side length of a shape matrix
pub const MAX_SHAPE_SIDE: usize = 4;

const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// Rectangular matrix of filled/empty cells
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    rows: usize,
    cols: usize,
    cells: ArrayVec<bool, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build a shape from rows of 0/1 values (top to bottom)
    ///
    /// Rows must all have the same length, fit in 4x4 and contain at least one filled cell.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ConfigError> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(ConfigError::EmptyShape);
        }
        if rows.iter().any(|r| r.len() != cols) {
            return Err(ConfigError::RaggedShape);
        }
        if rows.len() > MAX_SHAPE_SIDE || cols > MAX_SHAPE_SIDE {
            return Err(ConfigError::ShapeTooLarge);
        }

        let cells: ArrayVec<bool, MAX_SHAPE_CELLS> =
            rows.iter().flat_map(|r| r.iter().map(|&v| v != 0)).collect();
        if !cells.iter().any(|&filled| filled) {
            return Err(ConfigError::EmptyShape);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at (row, col) is filled; out-of-range cells are empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Offsets `(row, col)` of every filled cell, row-major
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| (i / self.cols, i % self.cols))
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Quarter turn into a new shape: transpose, then reverse the row order
    ///
    /// An R x C shape becomes C x R, and cell (r, c) of the result is cell (c, C - 1 - r)
    /// of `self`.
    pub fn rotate_clockwise(&self) -> Shape {
        let rows = self.cols;
        let cols = self.rows;
        let mut cells = ArrayVec::new();
        for r in 0..rows {
            for c in 0..cols {
                cells.push(self.cells[c * self.cols + (self.cols - 1 - r)]);
            }
        }
        Shape { rows, cols, cells }
    }

    /// Rows as 0/1 vectors, top to bottom
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|&filled| filled as u8).collect())
            .collect()
    }
}
