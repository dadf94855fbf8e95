//! Read-only view of a session for renderers.

use crate::board::BoardGrid;
use crate::game_state::GamePhase;
use crate::pieces::{Piece, Shape};
use crate::types::{Difficulty, PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl PieceSnapshot {
    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Absolute board coordinates of every filled cell, with the top-left at row `y`.
    pub fn cells_at(&self, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, y + dy))
    }
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape.clone(),
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<PieceSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: Option<PieceSnapshot>,
    pub phase: GamePhase,
    /// Session in progress (running or paused).
    pub running: bool,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub lines: u32,
    pub difficulty: Difficulty,
    pub fall_interval_ms: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: None,
            phase: GamePhase::Idle,
            running: false,
            paused: false,
            game_over: false,
            score: 0,
            high_score: 0,
            level: 1,
            lines: 0,
            difficulty: Difficulty::default(),
            fall_interval_ms: Difficulty::default().settings().base_speed_ms,
        }
    }
}
