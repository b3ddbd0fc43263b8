//! TUI platformer (workspace facade crate).
//!
//! Re-exports the workspace crates under stable names
//! (`tui_platformer::{core,input,term,types}`) and owns the run configuration
//! used by the binary.

pub mod config;

pub use tui_platformer_core as core;
pub use tui_platformer_input as input;
pub use tui_platformer_term as term;
pub use tui_platformer_types as types;
