//! Engine configuration
//!
//! Defaults match the classic 10x20 rules. Hosts may override them from the environment:
//!
//! - `BLOCKFALL_ROWS` / `BLOCKFALL_COLS`: board size (default 20 / 10)
//! - `BLOCKFALL_GRAVITY_MS`: gravity tick interval (default 350)
//! - `BLOCKFALL_DEBOUNCE_MS`: minimum key spacing (default 10)
//! - `BLOCKFALL_SEED`: fixed RNG seed (default: random)
//!
//! Values that fail to parse fall back to the default.

use std::env;

use crate::catalog::Catalog;
use crate::error::ConfigError;
use crate::types::{
    spawn_col, BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_INTERVAL_MS, HARD_DROP_BONUS,
    INPUT_DEBOUNCE_MS, LINE_CLEAR_POINTS, SOFT_DROP_POINTS,
};

/// Largest accepted board side; keeps terminal layout math within `u16`
pub const MAX_BOARD_SIDE: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    pub gravity_interval_ms: u32,
    pub line_clear_points: u32,
    pub hard_drop_bonus: u32,
    pub soft_drop_points: u32,
    pub debounce_ms: u32,
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_HEIGHT,
            cols: BOARD_WIDTH,
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
            line_clear_points: LINE_CLEAR_POINTS,
            hard_drop_bonus: HARD_DROP_BONUS,
            soft_drop_points: SOFT_DROP_POINTS,
            debounce_ms: INPUT_DEBOUNCE_MS,
            seed: None,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

impl EngineConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rows: env_parse("BLOCKFALL_ROWS").unwrap_or(defaults.rows),
            cols: env_parse("BLOCKFALL_COLS").unwrap_or(defaults.cols),
            gravity_interval_ms: env_parse("BLOCKFALL_GRAVITY_MS")
                .unwrap_or(defaults.gravity_interval_ms),
            debounce_ms: env_parse("BLOCKFALL_DEBOUNCE_MS").unwrap_or(defaults.debounce_ms),
            seed: env_parse("BLOCKFALL_SEED"),
            ..defaults
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Check the configuration against the catalog it will run with
    ///
    /// Every piece, in every orientation, must fit horizontally when placed at the
    /// spawn column.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if self.rows > MAX_BOARD_SIDE || self.cols > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge);
        }
        if self.gravity_interval_ms == 0 {
            return Err(ConfigError::ZeroGravityInterval);
        }
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let col = spawn_col(self.cols);
        if col < 0 || col as usize + catalog.max_extent() > self.cols {
            return Err(ConfigError::BoardTooNarrow);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!((config.rows, config.cols), (20, 10));
        assert_eq!(config.gravity_interval_ms, 350);
        assert_eq!(config.validate(&Catalog::standard()), Ok(()));
    }

    #[test]
    fn test_zero_dimensions_fail_fast() {
        let catalog = Catalog::standard();
        assert_eq!(
            EngineConfig::default().with_size(0, 10).validate(&catalog),
            Err(ConfigError::ZeroRows)
        );
        assert_eq!(
            EngineConfig::default().with_size(20, 0).validate(&catalog),
            Err(ConfigError::ZeroCols)
        );
    }

    #[test]
    fn test_oversized_board_fails_fast() {
        let catalog = Catalog::standard();
        assert_eq!(
            EngineConfig::default().with_size(255, 255).validate(&catalog),
            Ok(())
        );
        assert_eq!(
            EngineConfig::default().with_size(1, 40_000).validate(&catalog),
            Err(ConfigError::BoardTooLarge)
        );
        assert_eq!(
            EngineConfig::default().with_size(256, 10).validate(&catalog),
            Err(ConfigError::BoardTooLarge)
        );
        assert_eq!(ConfigError::BoardTooLarge.code(), "invalid_config");
    }

    #[test]
    fn test_zero_gravity_fails_fast() {
        let config = EngineConfig {
            gravity_interval_ms: 0,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(&Catalog::standard()),
            Err(ConfigError::ZeroGravityInterval)
        );
    }

    #[test]
    fn test_narrow_board_is_rejected() {
        let catalog = Catalog::standard();
        // Spawn column 1 leaves 5 columns for the 4-wide bar.
        assert_eq!(EngineConfig::default().with_size(20, 6).validate(&catalog), Ok(()));
        // A 3-wide board puts the spawn column left of the wall.
        assert_eq!(
            EngineConfig::default().with_size(20, 3).validate(&catalog),
            Err(ConfigError::BoardTooNarrow)
        );
    }
}
