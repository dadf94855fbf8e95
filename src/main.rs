//! Terminal runner (default binary).
//!
//! Drives the game at a fixed frame cadence: render the snapshot, wait for
//! keys until the next frame, feed real elapsed time into the clock, then
//! react to the events the frame produced.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

use blockfall::core::{GameState, HighScoreStore, MemoryHighScore, PieceRandomizer};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{Difficulty, GameEvent};
use blockfall::{default_high_score_path, FileHighScore};

type Game = GameState<Box<dyn HighScoreStore>>;

/// Falling-block puzzle game in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle game in the terminal.",
    long_about = "Falling-block puzzle game in the terminal.\n\n\
        CONTROLS:\n  Left/h  Move left     Right/l  Move right    Down/j  Soft drop\n  \
        Up/k    Rotate        Space    Hard drop     P       Pause/resume\n  \
        S/Enter Start         R        Reset         1/2/3   Easy/normal/hard\n  \
        Q/Esc   Quit"
)]
struct Args {
    /// Difficulty preset for the first game: easy, normal or hard.
    #[arg(short, long, default_value = "normal", value_parser = parse_difficulty)]
    difficulty: Difficulty,

    /// Seed for a reproducible piece sequence.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// High score file (default: $XDG_CONFIG_HOME/blockfall/highscore.json).
    #[arg(long, value_name = "FILE")]
    high_score_file: Option<PathBuf>,

    /// Keep the high score in memory only.
    #[arg(long, conflicts_with = "high_score_file")]
    no_persist: bool,

    /// Start playing immediately instead of waiting for S.
    #[arg(long)]
    autostart: bool,

    /// Ring the terminal bell on four-row clears, level ups and game over.
    #[arg(long)]
    bell: bool,

    /// Write logs to this file (filter with RUST_LOG, default info).
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Frame duration of the driver loop.
    #[arg(long, default_value = "16", value_name = "MS")]
    frame_ms: u64,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s)
        .ok_or_else(|| format!("unknown difficulty '{}' (easy, normal, hard)", s))
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut game = build_game(&args);

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut game, &args));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file; stderr would draw over the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn build_game(args: &Args) -> Game {
    let store: Box<dyn HighScoreStore> = if args.no_persist {
        Box::new(MemoryHighScore::new())
    } else {
        let path = args
            .high_score_file
            .clone()
            .unwrap_or_else(default_high_score_path);
        info!("high score file: {}", path.display());
        Box::new(FileHighScore::new(path))
    };

    let randomizer = match args.seed {
        Some(seed) => PieceRandomizer::new(seed),
        None => PieceRandomizer::from_entropy(),
    };
    match randomizer.seed() {
        Some(seed) => info!("piece seed: {}", seed),
        None => info!("piece seed: random"),
    }

    let mut game = GameState::with_store(randomizer, store);
    game.set_difficulty(args.difficulty);
    if args.autostart {
        game.start();
    }
    game
}

fn run(term: &mut TerminalRenderer, game: &mut Game, args: &Args) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(args.frame_ms.max(1));
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            game.tick(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }

        for event in game.drain_events() {
            if args.bell && rings_bell(event) {
                term.bell()?;
            }
        }
    }
}

fn rings_bell(event: GameEvent) -> bool {
    matches!(
        event,
        GameEvent::TetrisClear | GameEvent::LevelUp { .. } | GameEvent::GameOver { .. }
    )
}
