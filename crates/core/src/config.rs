//! Tunable gameplay parameters.

use crate::types::{
    BLOCK_BONUS, ENEMY_SPEED, GRAVITY, JUMP_VELOCITY, STOMP_BONUS, STOMP_TOLERANCE, WALK_SPEED,
};

/// Per-session physics and scoring parameters.
///
/// `Default` reproduces the reference values from [`crate::types`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub jump_velocity: f32,
    pub walk_speed: f32,
    pub enemy_speed: f32,
    pub stomp_tolerance: f32,
    pub stomp_bonus: u32,
    pub block_bonus: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            walk_speed: WALK_SPEED,
            enemy_speed: ENEMY_SPEED,
            stomp_tolerance: STOMP_TOLERANCE,
            stomp_bonus: STOMP_BONUS,
            block_bonus: BLOCK_BONUS,
        }
    }
}

impl PhysicsConfig {
    /// Upward velocity after bouncing off a stomped enemy
    pub fn stomp_bounce(&self) -> f32 {
        self.jump_velocity / 2.0
    }
}
