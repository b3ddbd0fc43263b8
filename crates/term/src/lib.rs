//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the session is painted into a
//! framebuffer of coloured cells ([`GameView`]) which [`TerminalRenderer`]
//! flushes to the terminal as a diff against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Precise control over aspect ratio (one tile is 2 columns by 1 row per scale step)
//! - Swappable colour palettes

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_platformer_core as core;
pub use tui_platformer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, MAX_SCALE, MIN_SCALE};
pub use palette::{Palette, PaletteKind, NES_PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
