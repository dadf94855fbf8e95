//! Game state module - manages the complete game session
//!
//! This module ties together all core components: board, pieces, RNG, and scoring.
//! It handles the session lifecycle, piece movement, rotation, line clears, and
//! level progression.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --start--> Running <--pause/resume--> Paused
//!                    |
//!             spawn collides
//!                    v
//! Idle <--reset-- GameOver --start--> Running
//! ```
//!
//! `reset` returns to `Idle` from any phase. Requests that do not apply to the
//! current phase are ignored and report `false`.

use log::{debug, info};

use crate::board::Board;
use crate::high_score::{HighScoreStore, MemoryHighScore};
use crate::pieces::{Piece, Shape};
use crate::rng::PieceRandomizer;
use crate::scoring::{fall_interval_ms, hard_drop_score, level_for_lines, line_clear_score};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Difficulty, GameAction, GameEvent, BOARD_WIDTH};

/// Horizontal offsets tried, in order, when placing a rotated shape.
pub const ROTATION_KICKS: [i8; 5] = [0, 1, -1, 2, -2];

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Before the first start, or after a reset
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState<H = MemoryHighScore> {
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    randomizer: PieceRandomizer,
    store: H,
    phase: GamePhase,
    /// Difficulty chosen for the next start.
    selected_difficulty: Difficulty,
    /// Difficulty of the current session.
    difficulty: Difficulty,
    score: u32,
    high_score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    /// Time accumulated since the last automatic descent.
    drop_timer_ms: u32,
    events: Vec<GameEvent>,
}

impl GameState<MemoryHighScore> {
    /// Create an idle session with a seeded piece sequence and an in-memory high score
    pub fn new(seed: u64) -> Self {
        Self::with_store(PieceRandomizer::new(seed), MemoryHighScore::new())
    }
}

impl Default for GameState<MemoryHighScore> {
    fn default() -> Self {
        Self::with_store(PieceRandomizer::from_entropy(), MemoryHighScore::new())
    }
}

impl<H: HighScoreStore> GameState<H> {
    /// Create an idle session, reading the stored high score once.
    pub fn with_store(randomizer: PieceRandomizer, mut store: H) -> Self {
        let high_score = store.load_high_score().unwrap_or(0);
        info!("high score loaded: {}", high_score);

        let difficulty = Difficulty::default();
        Self {
            board: Board::new(),
            active: None,
            next: None,
            randomizer,
            store,
            phase: GamePhase::Idle,
            selected_difficulty: difficulty,
            difficulty,
            score: 0,
            high_score,
            level: 1,
            lines: 0,
            fall_interval_ms: fall_interval_ms(difficulty, 1),
            drop_timer_ms: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// A session is in progress (running or paused).
    pub fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Running | GamePhase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Difficulty of the current (or most recent) session.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn store(&self) -> &H {
        &self.store
    }

    /// Collision test against the current board (same rule as movement).
    pub fn check_collision(&self, shape: &Shape, x: i8, y: i8) -> bool {
        self.board.check_collision(shape, x, y)
    }

    /// Events emitted since the last drain, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a new session. Only valid from `Idle` or `GameOver`.
    pub fn start(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Idle | GamePhase::GameOver) {
            return false;
        }

        self.difficulty = self.selected_difficulty;
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval_ms = fall_interval_ms(self.difficulty, 1);
        self.drop_timer_ms = 0;
        self.phase = GamePhase::Running;

        info!(
            "game started (difficulty: {}, fall interval: {}ms)",
            self.difficulty.as_str(),
            self.fall_interval_ms
        );

        self.spawn_piece();
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::Paused;
        info!("game paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Running;
        self.drop_timer_ms = 0;
        info!("game resumed");
        true
    }

    /// Pause when running, resume when paused.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            GamePhase::Idle | GamePhase::GameOver => false,
        }
    }

    /// Abandon the session and return to `Idle` with an empty board.
    pub fn reset(&mut self) -> bool {
        self.phase = GamePhase::Idle;
        self.board.clear();
        self.active = None;
        self.next = None;
        self.difficulty = self.selected_difficulty;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval_ms = fall_interval_ms(self.difficulty, 1);
        self.drop_timer_ms = 0;
        info!("game reset");
        true
    }

    /// Choose the difficulty for the next start.
    ///
    /// A running session keeps its difficulty; an idle one picks up the new
    /// fall interval right away.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        self.selected_difficulty = difficulty;
        if self.phase == GamePhase::Idle {
            self.difficulty = difficulty;
            self.fall_interval_ms = fall_interval_ms(difficulty, 1);
        }
        debug!("difficulty selected: {}", difficulty.as_str());
        true
    }

    /// Advance the clock by `elapsed_ms`; descends one row once the fall interval is reached.
    ///
    /// Returns true if an automatic descent happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.fall_interval_ms {
            return false;
        }

        self.drop_timer_ms = 0;
        self.step_down();
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Soft drop: descend one row, or lock if blocked. Awards no points.
    pub fn move_down(&mut self) -> bool {
        if self.phase != GamePhase::Running || self.active.is_none() {
            return false;
        }
        self.step_down();
        true
    }

    /// Drop the active piece as far as it goes and lock it.
    ///
    /// Awards 2 points per row travelled.
    pub fn hard_drop(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let mut rows: u32 = 0;
        while !self.board.check_collision(&active.shape, active.x, active.y + 1) {
            active.y += 1;
            rows += 1;
        }

        if rows > 0 {
            self.score = self.score.saturating_add(hard_drop_score(rows));
            self.events.push(GameEvent::HardDrop { rows });
        }

        self.lock_piece();
        true
    }

    /// Rotate clockwise, trying each offset of [`ROTATION_KICKS`] in order.
    ///
    /// If every offset collides the piece is left untouched.
    pub fn rotate(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let rotated = active.shape.rotated_cw();
        let kick = ROTATION_KICKS
            .iter()
            .copied()
            .find(|&dx| !self.board.check_collision(&rotated, active.x + dx, active.y));

        let Some(dx) = kick else {
            debug!("rotation rejected at ({}, {})", active.x, active.y);
            return false;
        };

        active.shape = rotated;
        active.x += dx;
        self.events.push(GameEvent::Rotate);
        true
    }

    /// Row the active piece would land on if hard-dropped now.
    pub fn ghost_row(&self) -> Option<i8> {
        let active = self.active.as_ref()?;

        let mut y = active.y;
        while !self.board.check_collision(&active.shape, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.move_down(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Reset => self.reset(),
            GameAction::Start => self.start(),
            GameAction::SelectDifficulty(difficulty) => self.set_difficulty(difficulty),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_grid(),
            active: self.active.as_ref().map(PieceSnapshot::from),
            ghost_y: self.ghost_row(),
            next: self.next.as_ref().map(PieceSnapshot::from),
            phase: self.phase,
            running: self.is_running(),
            paused: self.is_paused(),
            game_over: self.is_game_over(),
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            lines: self.lines,
            difficulty: self.difficulty,
            fall_interval_ms: self.fall_interval_ms,
        }
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        if self.board.check_collision(&active.shape, active.x + dx, active.y) {
            return false;
        }

        active.x += dx;
        self.events.push(GameEvent::Move);
        true
    }

    /// Descend one row, or lock when the row below is blocked.
    fn step_down(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        if self.board.check_collision(&active.shape, active.x, active.y + 1) {
            self.lock_piece();
        } else {
            active.y += 1;
        }
    }

    /// Lock the active piece onto the board, clear rows, then spawn the next piece
    pub(crate) fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock_shape(&active.shape, active.x, active.y, active.kind);
        self.events.push(GameEvent::Lock);
        debug!(
            "locked {} at ({}, {})",
            active.kind.as_str(),
            active.x,
            active.y
        );

        let cleared = self.board.sweep_completed_rows();
        if cleared > 0 {
            self.lines = self.lines.saturating_add(cleared as u32);
            self.score = self
                .score
                .saturating_add(line_clear_score(cleared, self.level));
            self.events.push(if cleared == 4 {
                GameEvent::TetrisClear
            } else {
                GameEvent::LineClear {
                    lines: cleared as u32,
                }
            });
            debug!("cleared {} rows (total {})", cleared, self.lines);

            let new_level = level_for_lines(self.lines);
            if new_level > self.level {
                self.level = new_level;
                self.fall_interval_ms = fall_interval_ms(self.difficulty, new_level);
                self.events.push(GameEvent::LevelUp { level: new_level });
                info!(
                    "level up: {} (fall interval: {}ms)",
                    new_level, self.fall_interval_ms
                );
            }
        }

        self.spawn_piece();
    }

    /// Promote the held next piece (or create one), refill next, place at the top center.
    ///
    /// Ends the game if the freshly placed piece already collides.
    pub(crate) fn spawn_piece(&mut self) {
        let mut piece = match self.next.take() {
            Some(piece) => piece,
            None => self.randomizer.next_piece(),
        };
        self.next = Some(self.randomizer.next_piece());

        piece.x = piece.centered_x(BOARD_WIDTH);
        piece.y = 0;
        debug!("spawned {} at ({}, {})", piece.kind.as_str(), piece.x, piece.y);

        let blocked = self.board.check_collision(&piece.shape, piece.x, piece.y);
        self.active = Some(piece);

        if blocked {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.drop_timer_ms = 0;

        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
            self.store.save_high_score(self.score);
            info!("new high score: {}", self.score);
        }

        info!(
            "game over (score: {}, level: {}, lines: {})",
            self.score, self.level, self.lines
        );
        self.events.push(GameEvent::GameOver {
            score: self.score,
            new_high_score,
        });
    }
}
