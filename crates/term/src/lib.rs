//! Terminal rendering for blockfall.
//!
//! A small game-oriented rendering layer: a snapshot is drawn into a plain framebuffer,
//! and the framebuffer is flushed to the terminal with crossterm.
//!
//! - [`game_view`] is pure and unit-tested
//! - [`renderer`] owns the terminal (raw mode, alternate screen) and writes changed rows

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{color_rgb, AnchorY, GameView, Viewport};
pub use renderer::{encode_row_into, TerminalRenderer};
