//! Built-in levels.
//!
//! - `Flat`: one screen wide, a single ground row and one enemy.
//! - `Expanded`: 100 columns with raised platforms, a question block under a
//!   coin, a ten-column pit and three enemies.

use crate::level::{Level, LevelError};
use crate::types::{Tile, SPAWN_X, SPAWN_Y, TILE_SIZE, VIEW_ROWS};

/// Which built-in level to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LevelPreset {
    Flat,
    #[default]
    Expanded,
}

/// Everything needed to start a session on a level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSetup {
    pub level: Level,
    pub spawn: (f32, f32),
    pub enemies: Vec<(f32, f32)>,
}

/// Enemy spawn height: standing on the bottom ground row
const ENEMY_Y: f32 = SPAWN_Y;

impl LevelPreset {
    /// Parse preset name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flat" => Some(LevelPreset::Flat),
            "expanded" => Some(LevelPreset::Expanded),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LevelPreset::Flat => "flat",
            LevelPreset::Expanded => "expanded",
        }
    }

    /// Build the level grid, spawn point and enemy list
    pub fn build(&self) -> Result<LevelSetup, LevelError> {
        match self {
            LevelPreset::Flat => flat(),
            LevelPreset::Expanded => expanded(),
        }
    }
}

fn flat() -> Result<LevelSetup, LevelError> {
    let mut level = Level::new(16, VIEW_ROWS)?;
    level.fill_row(VIEW_ROWS - 1, 0..16, Tile::Ground);

    Ok(LevelSetup {
        level,
        spawn: (SPAWN_X, SPAWN_Y),
        enemies: vec![(100.0, ENEMY_Y)],
    })
}

fn expanded() -> Result<LevelSetup, LevelError> {
    let mut level = Level::new(100, VIEW_ROWS)?;
    let ground = VIEW_ROWS - 1;

    level.fill_row(ground, 0..100, Tile::Ground);
    level.fill_row(10, 20..30, Tile::Ground);
    level.set(25, 8, Tile::QuestionBlock);
    level.set(25, 7, Tile::Coin);
    // Pit
    level.fill_row(ground, 40..50, Tile::Empty);
    level.fill_row(8, 60..70, Tile::Ground);

    Ok(LevelSetup {
        level,
        spawn: (SPAWN_X, SPAWN_Y),
        enemies: [100.0, 150.0, 200.0]
            .into_iter()
            .map(|x| (x, ENEMY_Y))
            .collect(),
    })
}
