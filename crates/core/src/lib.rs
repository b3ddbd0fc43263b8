//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal rendering or input devices, making it:
//!
//! - **Deterministic**: The same input sequence produces identical positions
//! - **Testable**: Unit tests for every collision and interaction rule
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//! - **Allocation-free per step**: collision queries return fixed-capacity lists
//!
//! # Module Structure
//!
//! - [`level`]: tile grid, collision query and level construction errors
//! - [`actor`]: actor bodies, axis-separated collision resolution, enemy patrol
//! - [`camera`]: clamped horizontal scroll offset
//! - [`session`]: complete game state and the per-step orchestration
//! - [`clock`]: fixed-timestep scheduler
//! - [`preset`]: built-in levels
//! - [`config`]: tunable physics and scoring values
//!
//! # Game Rules
//!
//! - **Gravity**: added after both axes are resolved, every step
//! - **Jump**: only while grounded
//! - **Question blocks**: bumping one from below turns it into a used block and scores
//! - **Stomp**: landing on an enemy from above defeats it and bounces the player
//! - **Damage**: any other enemy contact, or falling into a pit, respawns the player
//! - **Finish**: reaching the last column completes the level
//!
//! # Example
//!
//! ```
//! use tui_platformer_core::{GameSession, LevelPreset, PhysicsConfig, SessionState};
//! use tui_platformer_core::types::InputSnapshot;
//!
//! let mut session = GameSession::new(LevelPreset::Expanded, PhysicsConfig::default()).unwrap();
//!
//! let right = InputSnapshot { right: true, ..InputSnapshot::IDLE };
//! for _ in 0..10 {
//!     session.step(right);
//! }
//!
//! assert_eq!(session.player().x, 70.0);
//! assert_eq!(session.state(), SessionState::Running);
//! ```
//!
//! # Timing
//!
//! Physics values are per step; the binary drives [`GameSession::step`] from a
//! [`FixedTimestep`] at 60 steps per second by default.

pub mod actor;
pub mod camera;
pub mod clock;
pub mod config;
pub mod level;
pub mod preset;
pub mod session;

pub use tui_platformer_types as types;

// Re-export commonly used types for convenience
pub use actor::{Aabb, Actor, Enemy, VerticalContact};
pub use camera::{camera_offset, Camera};
pub use clock::FixedTimestep;
pub use config::PhysicsConfig;
pub use level::{Level, LevelError, TileCoord, TileHits};
pub use preset::{LevelPreset, LevelSetup};
pub use session::{GameSession, RespawnCause, SessionState, StepReport};
