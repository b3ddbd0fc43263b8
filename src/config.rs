//! Run configuration: environment defaults overridden by command-line flags.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::core::LevelPreset;
use crate::term::{PaletteKind, MAX_SCALE, MIN_SCALE};
use crate::types::TARGET_FPS;

pub const DEFAULT_KEY_RELEASE_MS: u32 = 550;
pub const MAX_FPS: u32 = 240;

pub const USAGE: &str = "\
Usage: tui-platformer [OPTIONS]

Options:
  --level <flat|expanded>    level to play (default: expanded)
  --palette <classic|nes>    colour palette (default: classic)
  --scale <1-4>              terminal cells per tile step (default: 1)
  --fps <1-240>              simulation steps per second (default: 60)
  -h, --help                 print this help

Environment:
  PLATFORMER_LEVEL, PLATFORMER_PALETTE, PLATFORMER_SCALE, PLATFORMER_FPS
  PLATFORMER_LOG_PATH        write logs to this file (RUST_LOG filters)
  PLATFORMER_KEY_RELEASE_MS  held-key timeout for terminals without release events

Controls:
  Left/a/h, Right/d/l move   Space/Up/w/k jump   q/Esc quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub level: LevelPreset,
    pub palette: PaletteKind,
    pub scale: u16,
    pub fps: u32,
    pub log_path: Option<PathBuf>,
    pub key_release_ms: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            level: LevelPreset::default(),
            palette: PaletteKind::default(),
            scale: MIN_SCALE,
            fps: TARGET_FPS,
            log_path: None,
            key_release_ms: DEFAULT_KEY_RELEASE_MS,
        }
    }
}

impl RunConfig {
    /// Read `PLATFORMER_*` variables; unset or invalid values keep defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let level = lookup("PLATFORMER_LEVEL")
            .and_then(|s| LevelPreset::from_str(&s))
            .unwrap_or(defaults.level);
        let palette = lookup("PLATFORMER_PALETTE")
            .and_then(|s| PaletteKind::from_str(&s))
            .unwrap_or(defaults.palette);
        let scale = lookup("PLATFORMER_SCALE")
            .and_then(|s| parse_scale(&s))
            .unwrap_or(defaults.scale);
        let fps = lookup("PLATFORMER_FPS")
            .and_then(|s| parse_fps(&s))
            .unwrap_or(defaults.fps);
        let key_release_ms = lookup("PLATFORMER_KEY_RELEASE_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.key_release_ms);

        let log_path = lookup("PLATFORMER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            level,
            palette,
            scale,
            fps,
            log_path,
            key_release_ms,
        }
    }

    /// Apply command-line flags (program name excluded) on top of `self`.
    ///
    /// Returns `Ok(None)` when help was requested.
    pub fn parse_args(mut self, args: &[String]) -> Result<Option<Self>> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            if flag == "-h" || flag == "--help" {
                return Ok(None);
            }

            i += 1;
            let value = args
                .get(i)
                .map(String::as_str)
                .ok_or_else(|| match flag {
                    "--level" | "--palette" | "--scale" | "--fps" => {
                        anyhow!("missing value for {}", flag)
                    }
                    other => anyhow!("unknown argument: {}", other),
                })?;

            match flag {
                "--level" => {
                    self.level = LevelPreset::from_str(value)
                        .ok_or_else(|| anyhow!("invalid --level value: {} (flat|expanded)", value))?;
                }
                "--palette" => {
                    self.palette = PaletteKind::from_str(value)
                        .ok_or_else(|| anyhow!("invalid --palette value: {} (classic|nes)", value))?;
                }
                "--scale" => {
                    self.scale = parse_scale(value).ok_or_else(|| {
                        anyhow!("invalid --scale value: {} ({}-{})", value, MIN_SCALE, MAX_SCALE)
                    })?;
                }
                "--fps" => {
                    self.fps = parse_fps(value)
                        .ok_or_else(|| anyhow!("invalid --fps value: {} (1-{})", value, MAX_FPS))?;
                }
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(Some(self))
    }
}

fn parse_scale(s: &str) -> Option<u16> {
    s.trim()
        .parse()
        .ok()
        .filter(|v| (MIN_SCALE..=MAX_SCALE).contains(v))
}

fn parse_fps(s: &str) -> Option<u32> {
    s.trim().parse().ok().filter(|v| (1..=MAX_FPS).contains(v))
}
