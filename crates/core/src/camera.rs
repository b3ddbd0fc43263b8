//! Horizontal scrolling camera.

use crate::types::VIEW_WIDTH;

/// Scroll offset for a player at `player_x` in a level `level_px_width` wide.
///
/// Centres the player, then clamps to `[0, level_px_width - VIEW_WIDTH]`. A
/// level no wider than the view never scrolls.
///
/// # Examples
///
/// ```
/// use tui_platformer_core::camera_offset;
///
/// assert_eq!(camera_offset(50.0, 1600.0), 0.0);
/// assert_eq!(camera_offset(500.0, 1600.0), 372.0);
/// assert_eq!(camera_offset(1590.0, 1600.0), 1344.0);
/// assert_eq!(camera_offset(200.0, 256.0), 0.0);
/// ```
pub fn camera_offset(player_x: f32, level_px_width: f32) -> f32 {
    let max_offset = (level_px_width - VIEW_WIDTH).max(0.0);
    (player_x - VIEW_WIDTH / 2.0).clamp(0.0, max_offset)
}

/// Camera state (only the offset survives between frames)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    offset: f32,
}

impl Camera {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn follow(&mut self, player_x: f32, level_px_width: f32) {
        self.offset = camera_offset(player_x, level_px_width);
    }

    /// World x to view x
    pub fn to_view_x(&self, world_x: f32) -> f32 {
        world_x - self.offset
    }
}
