//! Terminal puzzle runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from the term
//! crate. The board is redrawn only when the game reports a change or the
//! terminal is resized.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfit::core::{GameConfig, GameState, StageCatalog};
use tui_blockfit::input::{map_key, should_quit, wants_next_stage};
use tui_blockfit::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfit::types::{BlockedDropPolicy, StageStatus, PREVIEW_SIZE, TICK_MS};

/// Place every piece so that no piece cell is left on the board.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Stage to start on (1-based)
    #[arg(short, long, default_value_t = 1)]
    stage: usize,

    /// Number of upcoming pieces shown
    #[arg(short, long, default_value_t = PREVIEW_SIZE)]
    preview: usize,

    /// What a hard drop with no legal landing does: ignore | fail-stage
    #[arg(long, default_value = "ignore", value_parser = parse_policy)]
    blocked_drop: BlockedDropPolicy,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_policy(s: &str) -> Result<BlockedDropPolicy, String> {
    BlockedDropPolicy::from_str(s).ok_or_else(|| format!("unknown policy {s:?} (ignore | fail-stage)"))
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = GameConfig {
        preview_size: args.preview,
        blocked_drop: args.blocked_drop,
    };
    let stage_index = args.stage.checked_sub(1).context("stages are numbered from 1")?;
    let game = GameState::new(StageCatalog::builtin(), config, stage_index)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if game.status() == StageStatus::StageClear && wants_next_stage(key) {
                        if !game.advance_stage()? {
                            log::info!("no stage after {}", game.stage_index());
                        }
                    } else if let Some(command) = map_key(key) {
                        game.apply_action(command);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }

        if !game.drain_events().is_empty() {
            dirty = true;
        }
    }
}
