//! Integration tests for the game session

use tui_platformer::core::{
    camera_offset, GameSession, Level, LevelPreset, LevelSetup, PhysicsConfig, RespawnCause,
    SessionState,
};
use tui_platformer::types::{GameAction, InputSnapshot, Tile, SPAWN_X, SPAWN_Y};

const RIGHT: InputSnapshot = InputSnapshot {
    left: false,
    right: true,
    jump: false,
};
const JUMP: InputSnapshot = InputSnapshot {
    left: false,
    right: false,
    jump: true,
};

fn corridor_with_enemy(enemy_x: f32) -> GameSession {
    let mut level = Level::new(30, 15).unwrap();
    level.fill_row(14, 0..30, Tile::Ground);
    GameSession::from_setup(
        LevelSetup {
            level,
            spawn: (SPAWN_X, SPAWN_Y),
            enemies: vec![(enemy_x, SPAWN_Y)],
        },
        PhysicsConfig::default(),
    )
}

fn expanded() -> GameSession {
    GameSession::new(LevelPreset::Expanded, PhysicsConfig::default()).unwrap()
}

#[test]
fn test_session_lifecycle() {
    let mut session = expanded();
    assert!(session.is_running());
    assert_eq!(session.spawn(), (50.0, 208.0));

    for _ in 0..5 {
        session.step(InputSnapshot::IDLE);
    }
    assert_eq!(session.frame(), 5);

    session.request_quit();
    assert_eq!(session.state(), SessionState::QuitRequested);
    session.step(RIGHT);
    assert_eq!(session.frame(), 5);
}

#[test]
fn test_question_block_scores_once() {
    let mut session = expanded();
    // Stand on the row-10 platform directly under the block at (25, 8).
    {
        let player = session.player_mut();
        player.x = 400.0;
        player.y = 144.0;
        player.vy = 0.0;
        player.grounded = true;
    }

    let report = session.step(JUMP);
    assert_eq!(report.blocks_activated, 1);
    assert_eq!(session.score(), 100);
    assert_eq!(session.level().get(25, 8), Some(Tile::UsedBlock));
    assert_eq!(session.player().y, 144.0);

    // Land again, then bump the used block.
    session.step(InputSnapshot::IDLE);
    assert!(session.player().grounded);
    let report = session.step(JUMP);
    assert_eq!(report.blocks_activated, 0);
    assert_eq!(session.score(), 100);
}

#[test]
fn test_stomp_defeats_enemy_and_bounces() {
    let mut session = corridor_with_enemy(100.0);
    {
        let player = session.player_mut();
        player.x = 100.0;
        player.y = 190.0;
        player.vy = 3.0;
        player.grounded = false;
    }

    let report = session.step(InputSnapshot::IDLE);
    assert_eq!(report.enemies_stomped, 1);
    assert_eq!(report.respawn, None);
    assert!(session.enemies().is_empty());
    assert_eq!(session.score(), 100);
    assert_eq!(session.player().vy, -5.0);
    assert_eq!(session.player().x, 100.0);
}

#[test]
fn test_stomp_keeps_walked_x() {
    let mut session = corridor_with_enemy(100.0);
    {
        let player = session.player_mut();
        player.x = 100.0;
        player.y = 190.0;
        player.vy = 3.0;
        player.grounded = false;
    }

    let report = session.step(RIGHT);
    assert_eq!(report.enemies_stomped, 1);
    // Only the walk moved the player; the stomp itself does not.
    assert_eq!(session.player().x, 102.0);
    assert_eq!(session.player().vx, 2.0);
}

#[test]
fn test_landing_on_two_enemies_stomps_only_one() {
    let mut level = Level::new(30, 15).unwrap();
    level.fill_row(14, 0..30, Tile::Ground);
    let mut session = GameSession::from_setup(
        LevelSetup {
            level,
            spawn: (SPAWN_X, SPAWN_Y),
            enemies: vec![(100.0, SPAWN_Y), (104.0, SPAWN_Y)],
        },
        PhysicsConfig::default(),
    );
    {
        let player = session.player_mut();
        player.x = 102.0;
        player.y = 190.0;
        player.vy = 3.0;
        player.grounded = false;
    }

    let report = session.step(InputSnapshot::IDLE);

    // The bounce from the first stomp turns the second overlap into damage.
    assert_eq!(report.enemies_stomped, 1);
    assert_eq!(report.respawn, Some(RespawnCause::Enemy));
    assert_eq!(session.enemies().len(), 1);
    assert_eq!(session.enemies()[0].body.x, 103.0);
    assert_eq!(session.score(), 100);
    assert_eq!((session.player().x, session.player().y), session.spawn());
}

#[test]
fn test_side_contact_respawns_player() {
    let mut session = corridor_with_enemy(100.0);
    session.player_mut().x = 80.0;

    let mut cause = None;
    for _ in 0..5 {
        let report = session.step(RIGHT);
        if report.respawn.is_some() {
            cause = report.respawn;
            break;
        }
    }

    assert_eq!(cause, Some(RespawnCause::Enemy));
    assert_eq!((session.player().x, session.player().y), session.spawn());
    assert_eq!(session.player().vx, 0.0);
    assert_eq!(session.enemies().len(), 1);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_damage_clears_all_velocity() {
    let mut level = Level::new(30, 15).unwrap();
    level.fill_row(14, 0..30, Tile::Ground);
    let config = PhysicsConfig {
        walk_speed: 6.0,
        ..PhysicsConfig::default()
    };
    let mut session = GameSession::from_setup(
        LevelSetup {
            level,
            spawn: (SPAWN_X, SPAWN_Y),
            enemies: vec![(100.0, SPAWN_Y)],
        },
        config,
    );
    // Rising into the enemy's side while running fast.
    {
        let player = session.player_mut();
        player.x = 80.0;
        player.y = 206.0;
        player.vy = -1.5;
        player.grounded = false;
    }

    let report = session.step(RIGHT);

    assert_eq!(report.respawn, Some(RespawnCause::Enemy));
    let player = session.player();
    assert_eq!((player.x, player.y), (SPAWN_X, SPAWN_Y));
    assert_eq!(player.vx, 0.0);
    assert_eq!(player.vy, 0.0);
    assert!(player.grounded);
}

#[test]
fn test_pit_fall_respawns_player() {
    let mut session = expanded();
    {
        let player = session.player_mut();
        player.x = 680.0;
        player.y = 208.0;
        player.grounded = false;
    }

    let mut cause = None;
    for _ in 0..30 {
        let report = session.step(InputSnapshot::IDLE);
        if report.respawn.is_some() {
            cause = report.respawn;
            break;
        }
        assert!(session.player().y <= 240.0);
    }

    assert_eq!(cause, Some(RespawnCause::Pit));
    assert_eq!((session.player().x, session.player().y), (50.0, 208.0));
    assert!(session.player().grounded);
}

#[test]
fn test_reaching_last_column_completes_level() {
    let mut session = GameSession::new(LevelPreset::Flat, PhysicsConfig::default()).unwrap();
    session.player_mut().x = 236.0;

    session.step(RIGHT);
    assert!(session.is_running());
    session.step(RIGHT);
    assert_eq!(session.state(), SessionState::LevelComplete);
    assert_eq!(session.player().x, 240.0);

    // Further steps are ignored.
    session.step(RIGHT);
    assert_eq!(session.player().x, 240.0);
}

#[test]
fn test_camera_follows_player_and_clamps() {
    let mut session = expanded();
    assert_eq!(session.camera_offset(), 0.0);

    session.player_mut().x = 500.0;
    session.player_mut().y = 0.0;
    session.step(InputSnapshot::IDLE);
    assert_eq!(session.camera_offset(), 372.0);

    session.player_mut().x = 1560.0;
    session.step(InputSnapshot::IDLE);
    assert_eq!(session.camera_offset(), 1344.0);
    assert_eq!(camera_offset(1560.0, 1600.0), 1344.0);
}

#[test]
fn test_enemies_turn_instead_of_entering_pit() {
    let mut level = Level::new(30, 15).unwrap();
    level.fill_row(14, 0..30, Tile::Ground);
    level.fill_row(14, 5..10, Tile::Empty);
    let mut session = GameSession::from_setup(
        LevelSetup {
            level,
            spawn: (400.0, SPAWN_Y),
            enemies: vec![(200.0, SPAWN_Y)],
        },
        PhysicsConfig::default(),
    );

    for _ in 0..600 {
        session.step(InputSnapshot::IDLE);
        let enemy = session.enemies()[0];
        assert!(enemy.body.x >= 160.0 - 1.0);
        assert_eq!(enemy.body.y, SPAWN_Y);
    }
}

#[test]
fn test_same_inputs_replay_identically() {
    let script: Vec<InputSnapshot> = (0..600)
        .map(|i| {
            let mut input = InputSnapshot::IDLE;
            if i % 90 < 60 {
                input = input.with(GameAction::MoveRight);
            }
            if i % 45 == 0 {
                input = input.with(GameAction::Jump);
            }
            input
        })
        .collect();

    let mut a = expanded();
    let mut b = expanded();
    for &input in &script {
        assert_eq!(a.step(input), b.step(input));
    }

    assert_eq!(a.player(), b.player());
    assert_eq!(a.score(), b.score());
    assert_eq!(a.enemies(), b.enemies());
    assert_eq!(a.level(), b.level());
}
