//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so hosts, tests and benches can write
//! `blockfall::{core,input,term,types}`. The implementation lives under `crates/`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
