//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell is empty or holds a color token.
//! Storage is a flat row-major buffer allocated once; its size never changes afterwards.
//! Coordinates are `(row, col)` with row 0 at the top.
//!
//! Rows above the top edge (`row < 0`) are open space: a piece may hang there without
//! colliding, which is what lets pieces spawn partly above the visible field.

use crate::piece::ActivePiece;
use crate::shape::Shape;
use crate::types::{Cell, Color};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff (row, col) is inside the board and holds no block
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// True iff (row, col) is inside the board and holds a block
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Whether `shape` placed with its top-left cell at (row, col) overlaps a wall,
    /// the floor or a locked block
    ///
    /// Cells above the top edge never collide.
    pub fn collides_at(&self, shape: &Shape, row: i32, col: i32) -> bool {
        shape.filled_cells().any(|(dr, dc)| {
            let r = row + dr as i32;
            let c = col + dc as i32;
            if r >= self.rows as i32 || c < 0 || c >= self.cols as i32 {
                return true;
            }
            r >= 0 && self.is_occupied(r, c)
        })
    }

    /// Whether the piece at its current position collides
    pub fn collides(&self, piece: &ActivePiece) -> bool {
        self.collides_at(&piece.shape, piece.row, piece.col)
    }

    /// Write the piece's color into every cell it covers
    ///
    /// No validation: only call this for a position `collides` accepted. Cells above the
    /// top edge are dropped.
    pub fn lock(&mut self, piece: &ActivePiece) {
        for (dr, dc) in piece.shape.filled_cells() {
            self.set(piece.row + dr as i32, piece.col + dc as i32, Some(piece.color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Remove every full row, shift the rest down and refill the top with empty rows
    ///
    /// One bottom-up pass: kept rows are copied to a write cursor, so their relative order
    /// is preserved. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols;
        let mut write_row = self.rows;
        let mut cleared = 0;

        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }

        cleared
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Fill a whole row with one color, leaving the listed columns empty
    pub fn fill_row_except(&mut self, row: usize, holes: &[usize], color: Color) {
        for col in 0..self.cols {
            let cell = if holes.contains(&col) { None } else { Some(color) };
            self.set(row as i32, col as i32, cell);
        }
    }

    /// Render as text, `#` for blocks and `.` for empty cells (for tests and logs)
    pub fn to_ascii(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.is_some() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_HEIGHT, crate::types::BOARD_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::standard_shape;
    use crate::types::PieceKind;

    fn piece(kind: PieceKind, row: i32, col: i32) -> ActivePiece {
        ActivePiece {
            index: kind.index(),
            shape: standard_shape(kind),
            color: kind.color(),
            row,
            col,
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(20, 10);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(19, 9), Some(199));
        assert_eq!(board.index(0, -1), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(20, 0), None);
        assert_eq!(board.index(-1, 0), None);
    }

    #[test]
    fn test_is_empty_is_bounds_checked() {
        let mut board = Board::new(20, 10);
        assert!(board.is_empty(0, 0));
        assert!(!board.is_empty(-1, 0));
        assert!(!board.is_empty(20, 0));

        board.set(5, 5, Some(Color::Red));
        assert!(!board.is_empty(5, 5));
        assert!(board.is_occupied(5, 5));
    }

    #[test]
    fn test_collides_walls_and_floor() {
        let board = Board::new(20, 10);

        assert!(!board.collides(&piece(PieceKind::I, 0, 0)));
        assert!(!board.collides(&piece(PieceKind::I, 0, 6)));
        assert!(board.collides(&piece(PieceKind::I, 0, 7)));
        assert!(board.collides(&piece(PieceKind::I, 0, -1)));
        assert!(!board.collides(&piece(PieceKind::O, 18, 0)));
        assert!(board.collides(&piece(PieceKind::O, 19, 0)));
    }

    #[test]
    fn test_rows_above_top_do_not_collide() {
        let board = Board::new(20, 10);
        assert!(!board.collides(&piece(PieceKind::O, -1, 3)));
        assert!(!board.collides(&piece(PieceKind::O, -5, 3)));
        // Column bounds still apply above the top.
        assert!(board.collides(&piece(PieceKind::O, -5, 9)));
    }

    #[test]
    fn test_collides_with_locked_block() {
        let mut board = Board::new(20, 10);
        board.set(1, 4, Some(Color::Blue));

        // T at (0,3): cells (0,4), (1,3), (1,4), (1,5)
        assert!(board.collides(&piece(PieceKind::T, 0, 3)));
        assert!(!board.collides(&piece(PieceKind::T, 2, 3)));
    }

    #[test]
    fn test_lock_writes_color() {
        let mut board = Board::new(20, 10);
        board.lock(&piece(PieceKind::S, 18, 0));

        assert_eq!(board.get(18, 1), Some(Some(Color::Green)));
        assert_eq!(board.get(18, 2), Some(Some(Color::Green)));
        assert_eq!(board.get(19, 0), Some(Some(Color::Green)));
        assert_eq!(board.get(19, 1), Some(Some(Color::Green)));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_clear_full_rows_compacts() {
        let mut board = Board::new(6, 4);
        board.fill_row_except(5, &[], Color::Red);
        board.fill_row_except(4, &[1], Color::Blue);
        board.fill_row_except(3, &[], Color::Red);
        board.set(2, 0, Some(Color::Green));

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(
            board.to_ascii(),
            vec!["....", "....", "....", "....", "#...", "#.##"]
        );
        assert_eq!(board.get(5, 0), Some(Some(Color::Blue)));
        assert_eq!(board.get(4, 0), Some(Some(Color::Green)));
    }

    #[test]
    fn test_clear_full_rows_none() {
        let mut board = Board::new(20, 10);
        board.fill_row_except(19, &[9], Color::Red);
        let before = board.clone();

        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_whole_board() {
        let mut board = Board::new(4, 3);
        for row in 0..4 {
            board.fill_row_except(row, &[], Color::Orange);
        }
        assert_eq!(board.clear_full_rows(), 4);
        assert_eq!(board.occupied_count(), 0);
    }
}
