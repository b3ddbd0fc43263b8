//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and turns the
//! press/release stream into a per-step [`crate::types::InputSnapshot`]
//! (including terminals without key-release events).

pub mod handler;
pub mod map;

pub use tui_platformer_types as types;

pub use handler::InputHandler;
pub use map::{action_for_key, handle_key_event, should_quit};
