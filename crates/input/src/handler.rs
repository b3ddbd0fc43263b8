//! Held-key tracking for terminal environments.
//!
//! Terminals only report key presses by default, so "held" is inferred: a key
//! counts as held from its press until its release event, or, on terminals
//! that never send releases, until no press/repeat has arrived for
//! `key_release_timeout_ms`.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::map::action_for_key;
use crate::types::{GameAction, InputSnapshot};

// Long enough to bridge the usual auto-repeat delay of a held key (~500ms),
// short enough that a released key stops the player promptly.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 550;

fn slot(action: GameAction) -> usize {
    match action {
        GameAction::MoveLeft => 0,
        GameAction::MoveRight => 1,
        GameAction::Jump => 2,
    }
}

/// Tracks which actions are currently held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Last press or repeat per action; None when released
    held_since: [Option<Instant>; 3],
    /// Pressed since the last snapshot, so a tap between two steps is not lost
    tapped: [bool; 3],
    release_events: bool,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held_since: [None; 3],
            tapped: [false; 3],
            release_events: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Whether the terminal delivers key release events.
    ///
    /// When it does, keys stay held until released and the timeout is unused.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Register a press (or auto-repeat) of `code`
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        self.handle_key_press_at(code, Instant::now())
    }

    pub fn handle_key_press_at(&mut self, code: KeyCode, now: Instant) -> Option<GameAction> {
        let action = action_for_key(code)?;
        let i = slot(action);
        self.held_since[i] = Some(now);
        self.tapped[i] = true;
        Some(action)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(action) = action_for_key(code) {
            self.held_since[slot(action)] = None;
        }
    }

    /// Held state for the next simulation step
    pub fn snapshot(&mut self) -> InputSnapshot {
        self.snapshot_at(Instant::now())
    }

    pub fn snapshot_at(&mut self, now: Instant) -> InputSnapshot {
        // Auto-release when terminal does not emit release events.
        if !self.release_events {
            let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
            for held in &mut self.held_since {
                if held.is_some_and(|t| now.saturating_duration_since(t) > timeout) {
                    *held = None;
                }
            }
        }

        let mut snapshot = InputSnapshot::IDLE;
        for action in GameAction::ALL {
            let i = slot(action);
            if self.held_since[i].is_some() || self.tapped[i] {
                snapshot = snapshot.with(action);
            }
        }
        self.tapped = [false; 3];
        snapshot
    }

    pub fn reset(&mut self) {
        self.held_since = [None; 3];
        self.tapped = [false; 3];
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_held_until_release() {
        let mut ih = InputHandler::new().with_release_events(true);
        let t0 = Instant::now();

        assert_eq!(ih.handle_key_press_at(KeyCode::Right, t0), Some(GameAction::MoveRight));
        assert!(ih.snapshot_at(t0).right);
        // Far past the timeout: still held because releases are reported.
        assert!(ih.snapshot_at(t0 + Duration::from_secs(5)).right);

        ih.handle_key_release(KeyCode::Right);
        assert!(!ih.snapshot_at(t0 + Duration::from_secs(5)).right);
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        let t0 = Instant::now();

        ih.handle_key_press_at(KeyCode::Left, t0);
        assert!(ih.snapshot_at(t0 + Duration::from_millis(50)).left);
        assert!(!ih.snapshot_at(t0 + Duration::from_millis(51)).left);
    }

    #[test]
    fn test_repeat_keeps_key_held() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        let t0 = Instant::now();

        ih.handle_key_press_at(KeyCode::Left, t0);
        ih.handle_key_press_at(KeyCode::Left, t0 + Duration::from_millis(40));
        assert!(ih.snapshot_at(t0 + Duration::from_millis(80)).left);
    }

    #[test]
    fn test_tap_between_snapshots_is_seen_once() {
        let mut ih = InputHandler::new().with_release_events(true);
        let t0 = Instant::now();

        ih.handle_key_press_at(KeyCode::Char(' '), t0);
        ih.handle_key_release(KeyCode::Char(' '));

        assert!(ih.snapshot_at(t0).jump);
        assert!(!ih.snapshot_at(t0).jump);
    }

    #[test]
    fn test_non_movement_key_is_ignored() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Char('x')), None);
        assert_eq!(ih.snapshot(), InputSnapshot::IDLE);
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        let ih = InputHandler::new();
        assert!(ih.key_release_timeout_ms() > 0);
        assert!(!ih.release_events());
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut ih = InputHandler::new().with_release_events(true);
        ih.handle_key_press(KeyCode::Left);
        ih.handle_key_press(KeyCode::Up);
        ih.reset();
        assert_eq!(ih.snapshot(), InputSnapshot::IDLE);
    }
}
