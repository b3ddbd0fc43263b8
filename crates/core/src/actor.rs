//! Actor physics - gravity, integration and tile collision
//!
//! Player and enemies share the same body ([`Actor`]) and the same per-step
//! integration. Each step resolves the horizontal axis first, then the
//! vertical axis, and only then adds gravity. Keeping that order makes a
//! replay with the same inputs produce the same positions bit for bit.
//!
//! Velocities above one tile per step can skip over a tile entirely; the
//! resolver does not sub-step (see [`Actor::exceeds_tile_per_step`]).

use crate::level::{Level, TileHits};
use crate::types::TILE_SIZE;

/// Axis-aligned box in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap; boxes that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// A moving body one tile in size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Actor {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub grounded: bool,
}

/// What the vertical pass ran into
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerticalContact {
    /// Snapped onto the top of a solid tile
    pub landed: bool,
    /// Snapped under a solid tile while rising
    pub hit_ceiling: bool,
    /// Question blocks turned into used blocks by this contact
    pub activated: TileHits,
}

impl Actor {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            x: self.x,
            y: self.y,
            w: TILE_SIZE,
            h: TILE_SIZE,
        }
    }

    /// Move along x by `vx`, stopping flush against the first solid column.
    ///
    /// `vx` itself is left untouched even when blocked.
    pub fn resolve_horizontal(&mut self, level: &Level) {
        let target_x = self.x + self.vx;
        let hits = level.solid_overlaps(target_x, self.y);

        if hits.is_empty() {
            self.x = target_x;
            return;
        }

        if self.vx > 0.0 {
            let nearest = hits.iter().map(|c| c.x).min().unwrap_or_default();
            self.x = nearest as f32 * TILE_SIZE - TILE_SIZE;
        } else if self.vx < 0.0 {
            let nearest = hits.iter().map(|c| c.x).max().unwrap_or_default();
            self.x = (nearest + 1) as f32 * TILE_SIZE;
        }
    }

    /// Move along y by `vy`, landing on or bumping into solid tiles.
    ///
    /// With `activates_blocks`, every question block hit from below becomes a
    /// used block; the activated cells are reported back.
    pub fn resolve_vertical(&mut self, level: &mut Level, activates_blocks: bool) -> VerticalContact {
        let mut contact = VerticalContact::default();
        let target_y = self.y + self.vy;
        let hits = level.solid_overlaps(self.x, target_y);

        if hits.is_empty() {
            self.y = target_y;
            self.grounded = false;
            return contact;
        }

        if self.vy > 0.0 {
            let topmost = hits.iter().map(|c| c.y).min().unwrap_or_default();
            self.y = topmost as f32 * TILE_SIZE - TILE_SIZE;
            self.vy = 0.0;
            self.grounded = true;
            contact.landed = true;
        } else if self.vy < 0.0 {
            let bottommost = hits.iter().map(|c| c.y).max().unwrap_or_default();
            self.y = (bottommost + 1) as f32 * TILE_SIZE;
            self.vy = 0.0;
            contact.hit_ceiling = true;

            if activates_blocks {
                for &coord in &hits {
                    if level.activate_block(coord) {
                        let _ = contact.activated.try_push(coord);
                    }
                }
            }
        }

        contact
    }

    pub fn apply_gravity(&mut self, gravity: f32) {
        self.vy += gravity;
    }

    /// One physics step: horizontal, vertical, then gravity
    pub fn integrate(&mut self, level: &mut Level, gravity: f32, activates_blocks: bool) -> VerticalContact {
        self.resolve_horizontal(level);
        let contact = self.resolve_vertical(level, activates_blocks);
        self.apply_gravity(gravity);
        contact
    }

    /// True when either velocity component can carry the box past a whole tile
    pub fn exceeds_tile_per_step(&self) -> bool {
        self.vx.abs() > TILE_SIZE || self.vy.abs() > TILE_SIZE
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub body: Actor,
    /// Cleared when the enemy is defeated; dead enemies are compacted out
    /// after the interaction pass.
    pub alive: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            body: Actor {
                vx: -speed,
                ..Actor::new(x, y)
            },
            alive: true,
        }
    }

    /// Physics step plus the ledge turn
    pub fn update(&mut self, level: &mut Level, gravity: f32) {
        self.body.integrate(level, gravity, false);
        self.turn_at_ledge(level);
    }

    /// Reverse direction when the floor ends one column ahead.
    ///
    /// Only applies while grounded. The probe looks at the row just below the
    /// feet, one column beyond the leading edge; leaving the grid counts as a
    /// ledge so enemies stay inside the level.
    pub fn turn_at_ledge(&mut self, level: &Level) -> bool {
        let body = &self.body;
        if !body.grounded || body.vx == 0.0 {
            return false;
        }

        let probe_x = if body.vx < 0.0 {
            ((body.x - 1.0) / TILE_SIZE).floor() as i64
        } else {
            ((body.x + TILE_SIZE) / TILE_SIZE).floor() as i64
        };
        let probe_y = ((body.y + TILE_SIZE) / TILE_SIZE).floor() as i64;

        if level.is_solid(probe_x, probe_y) {
            return false;
        }

        self.body.vx = -self.body.vx;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    fn floor_level() -> Level {
        let mut level = Level::new(10, 5).unwrap();
        level.fill_row(4, 0..10, Tile::Ground);
        level
    }

    #[test]
    fn test_aabb_edge_contact_is_not_overlap() {
        let a = Actor::new(0.0, 0.0).bounds();
        let b = Actor::new(16.0, 0.0).bounds();
        assert!(!a.intersects(&b));
        let c = Actor::new(15.5, 0.0).bounds();
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_falling_actor_lands_on_ground() {
        let mut level = floor_level();
        let mut actor = Actor::new(32.0, 40.0);
        actor.vy = 9.0;

        let contact = actor.resolve_vertical(&mut level, false);
        assert!(contact.landed);
        assert_eq!(actor.y, 48.0);
        assert_eq!(actor.vy, 0.0);
        assert!(actor.grounded);
    }

    #[test]
    fn test_resting_actor_stays_grounded_across_steps() {
        let mut level = floor_level();
        let mut actor = Actor::new(32.0, 48.0);
        // Velocity left over from the previous step's gravity.
        actor.vy = 0.5;
        for _ in 0..10 {
            actor.integrate(&mut level, 0.5, false);
            assert_eq!(actor.y, 48.0);
            assert!(actor.grounded);
        }
    }

    #[test]
    fn test_zero_vertical_velocity_overlap_is_left_alone() {
        let mut level = floor_level();
        // Embedded in the ground row with no vertical motion.
        let mut actor = Actor::new(32.0, 60.0);
        actor.grounded = true;
        let contact = actor.resolve_vertical(&mut level, false);
        assert_eq!(contact, VerticalContact::default());
        assert_eq!(actor.y, 60.0);
        assert!(actor.grounded);
    }

    #[test]
    fn test_blocked_horizontal_keeps_velocity() {
        let mut level = floor_level();
        level.set(5, 2, Tile::Pipe);
        let mut actor = Actor::new(62.0, 32.0);
        actor.vx = 4.0;
        actor.resolve_horizontal(&level);
        assert_eq!(actor.x, 64.0);
        assert_eq!(actor.vx, 4.0);

        let mut actor = Actor::new(98.0, 32.0);
        actor.vx = -4.0;
        actor.resolve_horizontal(&level);
        assert_eq!(actor.x, 96.0);
        assert_eq!(actor.vx, -4.0);
    }

    #[test]
    fn test_enemy_turns_at_ledge() {
        let mut level = Level::new(10, 5).unwrap();
        level.fill_row(4, 2..6, Tile::Ground);

        // Standing on column 2, walking left: column 1 has no floor.
        let mut enemy = Enemy::new(32.0, 48.0, 1.0);
        enemy.body.grounded = true;
        assert!(enemy.turn_at_ledge(&level));
        assert_eq!(enemy.body.vx, 1.0);

        // Standing on column 3, walking right: column 4 still has floor.
        let mut enemy = Enemy::new(48.0, 48.0, 1.0);
        enemy.body.vx = 1.0;
        enemy.body.grounded = true;
        assert!(!enemy.turn_at_ledge(&level));
        assert_eq!(enemy.body.vx, 1.0);
    }

    #[test]
    fn test_airborne_enemy_never_turns() {
        let level = Level::new(10, 5).unwrap();
        let mut enemy = Enemy::new(32.0, 16.0, 1.0);
        assert!(!enemy.turn_at_ledge(&level));
        assert_eq!(enemy.body.vx, -1.0);
    }

    #[test]
    fn test_tunnelling_threshold() {
        let mut actor = Actor::new(0.0, 0.0);
        actor.vy = TILE_SIZE;
        assert!(!actor.exceeds_tile_per_step());
        actor.vy = TILE_SIZE + 0.5;
        assert!(actor.exceeds_tile_per_step());
    }
}
