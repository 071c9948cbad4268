//! Terminal blockfall runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `blockfall-term`.
//! Configuration comes from `BLOCKFALL_*` environment variables; set `BLOCKFALL_LOG_PATH`
//! to capture engine logs in a file.

use std::env;
use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use blockfall::core::{Catalog, EngineConfig, GameSnapshot, GameState};
use blockfall::input::{handle_key_event, should_quit, InputDebouncer};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::GameEvent;

fn main() -> Result<()> {
    init_logging()?;

    let config = EngineConfig::from_env();
    let mut game = GameState::new(config, Catalog::standard())?;
    info!(rows = game.config().rows, cols = game.config().cols, "engine ready");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Some(score) = result? {
        println!("Game over. Final score: {score}");
    }
    Ok(())
}

/// Install a file-backed subscriber; stdout belongs to the TUI.
fn init_logging() -> Result<()> {
    let Ok(path) = env::var("BLOCKFALL_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("opening log file {path}"))?;

    let registry = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(Level::DEBUG));
    registry.try_init().context("installing tracing subscriber")?;
    Ok(())
}

/// Run until the player quits. Returns the final score of the last finished game, if any.
fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<Option<u32>> {
    let view = GameView::default();
    let mut debouncer = InputDebouncer::new(game.config().debounce_ms as u64);
    let mut snap = GameSnapshot::default();
    let mut final_score = None;

    let started = Instant::now();
    let tick_duration = Duration::from_millis(game.config().gravity_interval_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(final_score);
                    }
                    if let Some(command) = handle_key_event(key) {
                        let now_ms = started.elapsed().as_millis() as u64;
                        if debouncer.accept(now_ms) {
                            let was_running = game.is_running();
                            game.apply(command);
                            if !was_running && game.is_running() {
                                last_tick = Instant::now();
                            }
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity only runs while a game is in progress.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if game.is_running() {
                game.tick();
            }
        }

        for event in game.take_events() {
            if let GameEvent::GameOver { final_score: score } = event {
                final_score = Some(score);
            }
        }
    }
}
