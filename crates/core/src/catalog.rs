//! Piece catalog - the immutable set of shapes and colors pieces are drawn from
//!
//! The standard catalog holds the seven tetrominoes in index order I, O, T, L, J, S, Z.
//! Custom catalogs are accepted as long as every shape is well formed.

use crate::error::ConfigError;
use crate::shape::Shape;
use crate::types::{Color, PieceKind};

/// One catalog entry: spawn shape plus color token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceDef {
    pub shape: Shape,
    pub color: Color,
}

impl PieceDef {
    pub fn new(shape: Shape, color: Color) -> Self {
        Self { shape, color }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pieces: Vec<PieceDef>,
}

/// Spawn orientation of a standard piece, rows top to bottom
fn standard_rows(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => &[&[1, 1, 1, 1]],
        PieceKind::O => &[&[1, 1], &[1, 1]],
        PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
        PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
        PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
        PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
        PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
    }
}

/// Spawn shape of a standard piece
pub fn standard_shape(kind: PieceKind) -> Shape {
    // The literal tables above are well formed, so this cannot fail.
    match Shape::from_rows(standard_rows(kind)) {
        Ok(shape) => shape,
        Err(err) => unreachable!("standard shape {:?} rejected: {}", kind, err),
    }
}

impl Catalog {
    /// Build a catalog from custom definitions
    pub fn new(pieces: Vec<PieceDef>) -> Result<Self, ConfigError> {
        if pieces.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { pieces })
    }

    /// The seven standard tetrominoes
    pub fn standard() -> Self {
        Self {
            pieces: PieceKind::ALL
                .iter()
                .map(|&kind| PieceDef::new(standard_shape(kind), kind.color()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PieceDef> {
        self.pieces.get(index)
    }

    pub fn pieces(&self) -> &[PieceDef] {
        &self.pieces
    }

    /// Widest extent any piece reaches in any orientation
    pub fn max_extent(&self) -> usize {
        self.pieces
            .iter()
            .map(|p| p.shape.rows().max(p.shape.cols()))
            .max()
            .unwrap_or(0)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
