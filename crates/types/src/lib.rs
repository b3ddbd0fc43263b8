//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Screen Dimensions
//!
//! The virtual screen matches the NES resolution:
//!
//! - **Width**: 256 pixels (16 tiles)
//! - **Height**: 240 pixels (15 tiles)
//! - **Tile**: 16x16 pixels; every actor's bounding box is exactly one tile
//!
//! # Physics Constants
//!
//! All physics values are per fixed step (one frame at 60 Hz):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.5 | Added to vertical velocity every step |
//! | `JUMP_VELOCITY` | -10.0 | Vertical velocity applied on jump |
//! | `WALK_SPEED` | 2.0 | Horizontal player speed while a direction is held |
//! | `ENEMY_SPEED` | 1.0 | Horizontal patrol speed of enemies |
//! | `STOMP_TOLERANCE` | 5.0 | Max overlap of player bottom past enemy top for a stomp |
//!
//! # Scoring
//!
//! - `STOMP_BONUS`: 100 points per defeated enemy
//! - `BLOCK_BONUS`: 100 points per activated question block
//!
//! # Examples
//!
//! ```
//! use tui_platformer_types::{Tile, GameAction, TILE_SIZE, VIEW_WIDTH};
//!
//! // Tile codes map to tile kinds
//! let tile = Tile::from_code(3).unwrap();
//! assert_eq!(tile, Tile::QuestionBlock);
//! assert!(tile.is_solid());
//! assert!(!Tile::Coin.is_solid());
//!
//! // Parse game action
//! assert_eq!(GameAction::from_str("jump"), Some(GameAction::Jump));
//!
//! // Screen dimensions
//! assert_eq!(VIEW_WIDTH / TILE_SIZE, 16.0);
//! ```

/// Tile edge length in pixels
pub const TILE_SIZE: f32 = 16.0;

/// Virtual screen width in pixels
pub const VIEW_WIDTH: f32 = 256.0;

/// Virtual screen height in pixels
pub const VIEW_HEIGHT: f32 = 240.0;

/// Virtual screen width in tiles
pub const VIEW_COLUMNS: usize = 16;

/// Virtual screen height in tiles
pub const VIEW_ROWS: usize = 15;

/// Target simulation rate (steps per second)
pub const TARGET_FPS: u32 = 60;

/// Gravity added to vertical velocity every step (pixels/step²)
pub const GRAVITY: f32 = 0.5;

/// Vertical velocity applied when jumping (negative is up)
pub const JUMP_VELOCITY: f32 = -10.0;

/// Horizontal player speed while a direction is held (pixels/step)
pub const WALK_SPEED: f32 = 2.0;

/// Horizontal enemy patrol speed (pixels/step)
pub const ENEMY_SPEED: f32 = 1.0;

/// How far the player's bottom edge may sink past an enemy's top edge and
/// still count as a stomp (pixels)
pub const STOMP_TOLERANCE: f32 = 5.0;

/// Points for stomping an enemy
pub const STOMP_BONUS: u32 = 100;

/// Points for activating a question block
pub const BLOCK_BONUS: u32 = 100;

/// Player spawn x (pixels)
pub const SPAWN_X: f32 = 50.0;

/// Player spawn y (pixels): standing on the bottom ground row
pub const SPAWN_Y: f32 = VIEW_HEIGHT - 2.0 * TILE_SIZE;


/// The six tile kinds of the level grid
///
/// The numeric code is the value stored in level data:
/// - **0 Empty**: passable background
/// - **1 Ground**: solid terrain
/// - **2 UsedBlock**: solid block left behind by an activated question block
/// - **3 QuestionBlock**: solid; turns into a used block when bumped from below
/// - **4 Pipe**: solid
/// - **5 Coin**: passable decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Ground,
    UsedBlock,
    QuestionBlock,
    Pipe,
    Coin,
}

impl Tile {
    /// All tile kinds in code order
    pub const ALL: [Tile; 6] = [
        Tile::Empty,
        Tile::Ground,
        Tile::UsedBlock,
        Tile::QuestionBlock,
        Tile::Pipe,
        Tile::Coin,
    ];

    /// Parse a tile from its level code
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_platformer_types::Tile;
    ///
    /// assert_eq!(Tile::from_code(0), Some(Tile::Empty));
    /// assert_eq!(Tile::from_code(4), Some(Tile::Pipe));
    /// assert_eq!(Tile::from_code(9), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Level code of this tile
    pub fn code(&self) -> u8 {
        match self {
            Tile::Empty => 0,
            Tile::Ground => 1,
            Tile::UsedBlock => 2,
            Tile::QuestionBlock => 3,
            Tile::Pipe => 4,
            Tile::Coin => 5,
        }
    }

    /// Whether actors collide with this tile
    pub fn is_solid(&self) -> bool {
        matches!(
            self,
            Tile::Ground | Tile::UsedBlock | Tile::QuestionBlock | Tile::Pipe
        )
    }
}

/// Game actions that can be held by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Walk left while held
    MoveLeft,
    /// Walk right while held
    MoveRight,
    /// Jump (only takes effect while grounded)
    Jump,
}

impl GameAction {
    pub const ALL: [GameAction; 3] = [GameAction::MoveLeft, GameAction::MoveRight, GameAction::Jump];

    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_platformer_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("JUMP"), Some(GameAction::Jump));
    /// assert_eq!(GameAction::from_str("fly"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "jump" => Some(GameAction::Jump),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Jump => "jump",
        }
    }
}

/// Held-input state sampled once per step
///
/// This is a boolean snapshot, not an event queue: a key held across several
/// steps reads as pressed in each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputSnapshot {
    /// Snapshot with nothing held
    pub const IDLE: InputSnapshot = InputSnapshot {
        left: false,
        right: false,
        jump: false,
    };

    /// Whether the given action is held
    pub fn is_held(&self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.left,
            GameAction::MoveRight => self.right,
            GameAction::Jump => self.jump,
        }
    }

    /// Return a copy with the given action held
    pub fn with(mut self, action: GameAction) -> Self {
        match action {
            GameAction::MoveLeft => self.left = true,
            GameAction::MoveRight => self.right = true,
            GameAction::Jump => self.jump = true,
        }
        self
    }
}
