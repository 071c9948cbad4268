//! Construction-time errors.
//!
//! Gameplay operations are total; only building an engine from a bad configuration or a
//! malformed catalog can fail.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroRows,
    ZeroCols,
    ZeroGravityInterval,
    EmptyCatalog,
    EmptyShape,
    RaggedShape,
    ShapeTooLarge,
    BoardTooNarrow,
    BoardTooLarge,
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::ZeroRows
            | ConfigError::ZeroCols
            | ConfigError::ZeroGravityInterval
            | ConfigError::BoardTooNarrow
            | ConfigError::BoardTooLarge => "invalid_config",
            ConfigError::EmptyCatalog
            | ConfigError::EmptyShape
            | ConfigError::RaggedShape
            | ConfigError::ShapeTooLarge => "invalid_catalog",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::ZeroRows => "board must have at least one row",
            ConfigError::ZeroCols => "board must have at least one column",
            ConfigError::ZeroGravityInterval => "gravity interval must be positive",
            ConfigError::EmptyCatalog => "piece catalog is empty",
            ConfigError::EmptyShape => "shape has no filled cell",
            ConfigError::RaggedShape => "shape rows have different lengths",
            ConfigError::ShapeTooLarge => "shape exceeds 4x4 cells",
            ConfigError::BoardTooNarrow => "board cannot fit every piece at the spawn column",
            ConfigError::BoardTooLarge => "board exceeds 255 rows or columns",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for ConfigError {}
