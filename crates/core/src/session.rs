//! Game session - owns the complete game state
//!
//! A [`GameSession`] ties together the level, the player, the enemy list,
//! the score and the camera. The frame loop owns the session exclusively and
//! advances it one fixed step at a time with [`GameSession::step`].
//!
//! Step order:
//!
//! 1. Held input sets the player's horizontal velocity and may start a jump
//! 2. Player physics (may activate question blocks)
//! 3. Enemy physics and ledge turns; enemies that fell out are dropped
//! 4. Player/enemy contacts (stomp or respawn)
//! 5. Pit fall
//! 6. Level completion
//! 7. Camera

use tracing::{debug, info, warn};

use crate::actor::{Actor, Enemy};
use crate::camera::Camera;
use crate::config::PhysicsConfig;
use crate::level::{Level, LevelError};
use crate::preset::{LevelPreset, LevelSetup};
use crate::types::{InputSnapshot, TILE_SIZE, VIEW_HEIGHT};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    LevelComplete,
    QuitRequested,
}

/// Why the player was sent back to the spawn point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnCause {
    Enemy,
    Pit,
}

/// What happened during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub enemies_stomped: u32,
    pub blocks_activated: u32,
    pub respawn: Option<RespawnCause>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    level: Level,
    player: Actor,
    spawn: (f32, f32),
    enemies: Vec<Enemy>,
    camera: Camera,
    config: PhysicsConfig,
    score: u32,
    state: SessionState,
    /// Monotonic step counter
    frame: u64,
    tunnelling_reported: bool,
}

impl GameSession {
    /// Start a session on a built-in level
    pub fn new(preset: LevelPreset, config: PhysicsConfig) -> Result<Self, LevelError> {
        let setup = preset.build()?;
        info!(
            level = preset.as_str(),
            columns = setup.level.width(),
            rows = setup.level.height(),
            enemies = setup.enemies.len(),
            "session started"
        );
        Ok(Self::from_setup(setup, config))
    }

    /// Start a session on an arbitrary level
    pub fn from_setup(setup: LevelSetup, config: PhysicsConfig) -> Self {
        let LevelSetup {
            level,
            spawn,
            enemies,
        } = setup;

        let mut session = Self {
            level,
            player: Actor::default(),
            spawn,
            enemies: enemies
                .into_iter()
                .map(|(x, y)| Enemy::new(x, y, config.enemy_speed))
                .collect(),
            camera: Camera::default(),
            config,
            score: 0,
            state: SessionState::Running,
            frame: 0,
            tunnelling_reported: false,
        };
        session.place_at_spawn();
        session
            .camera
            .follow(session.player.x, session.level.pixel_width());
        session
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> &Actor {
        &self.player
    }

    /// Mutable player access for scripted setups (tests, benchmarks)
    pub fn player_mut(&mut self) -> &mut Actor {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn spawn(&self) -> (f32, f32) {
        self.spawn
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_offset(&self) -> f32 {
        self.camera.offset()
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Stop the session; the current step (if any) has already completed
    pub fn request_quit(&mut self) {
        if self.state == SessionState::Running {
            self.state = SessionState::QuitRequested;
        }
    }

    /// Advance the simulation by one fixed step.
    ///
    /// Does nothing once the session has left [`SessionState::Running`].
    pub fn step(&mut self, input: InputSnapshot) -> StepReport {
        let mut report = StepReport::default();
        if self.state != SessionState::Running {
            return report;
        }
        self.frame += 1;

        self.apply_input(input);

        let contact = self.player.integrate(&mut self.level, self.config.gravity, true);
        for coord in &contact.activated {
            self.score += self.config.block_bonus;
            report.blocks_activated += 1;
            debug!(x = coord.x, y = coord.y, score = self.score, "question block activated");
        }

        for enemy in &mut self.enemies {
            enemy.update(&mut self.level, self.config.gravity);
        }
        let before = self.enemies.len();
        self.enemies.retain(|e| e.body.y <= VIEW_HEIGHT);
        if self.enemies.len() != before {
            debug!(count = before - self.enemies.len(), "enemies fell out of the level");
        }

        self.resolve_contacts(&mut report);

        if self.player.y > VIEW_HEIGHT {
            self.respawn(RespawnCause::Pit);
            report.respawn = Some(RespawnCause::Pit);
        }

        if self.player.x >= self.finish_x() {
            self.state = SessionState::LevelComplete;
            info!(score = self.score, frame = self.frame, "level complete");
        }

        self.camera.follow(self.player.x, self.level.pixel_width());
        self.check_tunnelling();

        report
    }

    /// X position at which the level counts as finished
    pub fn finish_x(&self) -> f32 {
        (self.level.width() as f32 - 1.0) * TILE_SIZE
    }

    fn apply_input(&mut self, input: InputSnapshot) {
        self.player.vx = 0.0;
        if input.left {
            self.player.vx = -self.config.walk_speed;
        }
        if input.right {
            self.player.vx = self.config.walk_speed;
        }
        if input.jump && self.player.grounded {
            self.player.vy = self.config.jump_velocity;
            self.player.grounded = false;
        }
    }

    /// Player/enemy contacts.
    ///
    /// Enemies are checked in list order against the current player velocity,
    /// so after a stomp bounces the player, a second overlapping enemy in the
    /// same pass counts as damage. Defeated enemies are only flagged here and
    /// are compacted out afterwards. A damaging contact ends the pass.
    fn resolve_contacts(&mut self, report: &mut StepReport) {
        let player_box = self.player.bounds();
        let mut hurt = false;

        for enemy in self.enemies.iter_mut().filter(|e| e.alive) {
            let enemy_box = enemy.body.bounds();
            if !player_box.intersects(&enemy_box) {
                continue;
            }

            let falling = self.player.vy > 0.0;
            if falling && player_box.bottom() <= enemy_box.top() + self.config.stomp_tolerance {
                enemy.alive = false;
                self.score += self.config.stomp_bonus;
                self.player.vy = self.config.stomp_bounce();
                report.enemies_stomped += 1;
                debug!(x = enemy.body.x, score = self.score, "enemy stomped");
            } else {
                hurt = true;
                break;
            }
        }

        self.enemies.retain(|e| e.alive);

        if hurt {
            self.respawn(RespawnCause::Enemy);
            report.respawn = Some(RespawnCause::Enemy);
        }
    }

    fn place_at_spawn(&mut self) {
        let (x, y) = self.spawn;
        self.player = Actor {
            grounded: true,
            ..Actor::new(x, y)
        };
    }

    fn respawn(&mut self, cause: RespawnCause) {
        debug!(?cause, x = self.player.x, y = self.player.y, "player respawned");
        self.place_at_spawn();
    }

    fn check_tunnelling(&mut self) {
        if self.tunnelling_reported {
            return;
        }
        let fast = self.player.exceeds_tile_per_step()
            || self.enemies.iter().any(|e| e.body.exceeds_tile_per_step());
        if fast {
            self.tunnelling_reported = true;
            warn!(
                frame = self.frame,
                "actor velocity exceeds one tile per step; collisions may be skipped"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    fn corridor() -> LevelSetup {
        let mut level = Level::new(30, 15).unwrap();
        level.fill_row(14, 0..30, Tile::Ground);
        LevelSetup {
            level,
            spawn: (50.0, 208.0),
            enemies: Vec::new(),
        }
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(LevelPreset::Expanded, PhysicsConfig::default()).unwrap();
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.enemies().len(), 3);
        assert_eq!((session.player().x, session.player().y), session.spawn());
        assert!(session.player().grounded);
        assert_eq!(session.camera_offset(), 0.0);
    }

    #[test]
    fn test_walk_right_moves_two_pixels_per_step() {
        let mut session = GameSession::from_setup(corridor(), PhysicsConfig::default());
        let input = InputSnapshot::IDLE.with(crate::types::GameAction::MoveRight);
        session.step(input);
        assert_eq!(session.player().x, 52.0);
        session.step(input);
        assert_eq!(session.player().x, 54.0);
    }

    #[test]
    fn test_right_wins_over_left() {
        let mut session = GameSession::from_setup(corridor(), PhysicsConfig::default());
        let input = InputSnapshot {
            left: true,
            right: true,
            jump: false,
        };
        session.step(input);
        assert_eq!(session.player().vx, 2.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut session = GameSession::from_setup(corridor(), PhysicsConfig::default());
        let jump = InputSnapshot {
            jump: true,
            ..InputSnapshot::IDLE
        };
        session.step(jump);
        // -10 applied, moved up, then gravity.
        assert_eq!(session.player().y, 198.0);
        assert_eq!(session.player().vy, -9.5);
        assert!(!session.player().grounded);

        // Holding jump mid-air does not re-jump.
        session.step(jump);
        assert_eq!(session.player().vy, -9.0);
    }

    #[test]
    fn test_step_is_noop_after_quit() {
        let mut session = GameSession::from_setup(corridor(), PhysicsConfig::default());
        session.request_quit();
        assert_eq!(session.state(), SessionState::QuitRequested);
        let before = *session.player();
        let report = session.step(InputSnapshot::IDLE.with(crate::types::GameAction::MoveRight));
        assert_eq!(report, StepReport::default());
        assert_eq!(*session.player(), before);
        assert_eq!(session.frame(), 0);
    }

    #[test]
    fn test_enemy_falling_out_is_dropped() {
        let mut setup = corridor();
        setup.enemies.push((300.0, 230.0));
        setup.level.fill_row(14, 18..20, Tile::Empty);
        let mut session = GameSession::from_setup(setup, PhysicsConfig::default());
        for _ in 0..30 {
            session.step(InputSnapshot::IDLE);
        }
        assert!(session.enemies().is_empty());
    }
}
