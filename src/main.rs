//! Terminal platformer runner (default binary).
//!
//! Crossterm for input, a framebuffer renderer for output, and a fixed
//! timestep driving the deterministic core.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_platformer::config::{RunConfig, USAGE};
use tui_platformer::core::{FixedTimestep, GameSession, PhysicsConfig, SessionState};
use tui_platformer::input::{should_quit, InputHandler};
use tui_platformer::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// How long the completion overlay stays up before the program exits.
const COMPLETE_HOLD: Duration = Duration::from_secs(2);

enum Outcome {
    Completed { score: u32 },
    Quit { score: u32 },
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = RunConfig::from_env().parse_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }
    info!(
        level = config.level.as_str(),
        palette = config.palette.as_str(),
        scale = config.scale,
        fps = config.fps,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Outcome::Completed { score } => println!("Level Complete! Score: {}", score),
        Outcome::Quit { score } => println!("Score: {}", score),
    }
    Ok(())
}

/// Log to a file; the terminal itself is owned by the game while it runs.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<Outcome> {
    let mut session =
        GameSession::new(config.level, PhysicsConfig::default()).context("build level")?;

    let view = GameView::new(config.scale, config.palette.palette());
    let mut input = InputHandler::new()
        .with_release_events(term.release_events())
        .with_key_release_timeout_ms(config.key_release_ms);
    debug!(release_events = term.release_events(), "input ready");

    let mut clock = FixedTimestep::new(config.fps);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        // Drain pending input without blocking.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press if should_quit(key) => session.request_quit(),
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        input.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => input.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if session.state() == SessionState::QuitRequested {
            info!(score = session.score(), frame = session.frame(), "quit");
            return Ok(Outcome::Quit {
                score: session.score(),
            });
        }

        let now = Instant::now();
        let steps = clock.advance(now.saturating_duration_since(last));
        last = now;
        for _ in 0..steps {
            session.step(input.snapshot());
            if !session.is_running() {
                break;
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if session.state() == SessionState::LevelComplete {
            hold_completion_screen()?;
            return Ok(Outcome::Completed {
                score: session.score(),
            });
        }

        // Sleep until the next step is due, waking early for input.
        event::poll(clock.time_to_next_step())?;
    }
}

/// Keep the completion overlay up until a key press or the hold expires.
fn hold_completion_screen() -> Result<()> {
    let deadline = Instant::now() + COMPLETE_HOLD;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() || !event::poll(left)? {
            return Ok(());
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
