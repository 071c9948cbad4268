//! Terminal input module (host-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameCommand`] and drops key presses
//! that arrive faster than the debounce interval. The engine itself never sees raw keys.

pub mod debounce;
pub mod map;

pub use blockfall_types as types;

pub use debounce::InputDebouncer;
pub use map::{handle_key_event, should_quit};
