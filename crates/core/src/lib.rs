//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, the session state machine, and the
//! piece model. It has **no dependencies** on terminals, timers, or storage:
//! time arrives through [`GameState::tick`] and the high score goes through a
//! [`HighScoreStore`] supplied by the host.
//!
//! # Module Structure
//!
//! - [`matrix`]: generic clockwise rotation of a rectangular grid
//! - [`pieces`]: canonical shapes and the active piece instance
//! - [`board`]: 10x20 grid with collision detection and row clearing
//! - [`rng`]: seedable uniform piece generator
//! - [`scoring`]: line clear points, hard drop bonus, level curve
//! - [`high_score`]: high score storage collaborator
//! - [`game_state`]: the session state machine
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random (no bag), with a one-piece preview.
//! - Rotation is clockwise only; a blocked rotation tries horizontal offsets
//!   `0, +1, -1, +2, -2` at the same row and is dropped if none fit.
//! - A piece locks as soon as it cannot descend. There is no lock delay.
//! - Clearing 1/2/3/4 rows scores 100/300/500/800 times the level; every
//!   10 lines raise the level and shorten the fall interval.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Apply game actions
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Hard drop awards points for every row travelled
//! assert!(game.score() > 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. The active piece descends one row each time the
//! accumulated time reaches the current fall interval.

pub mod board;
pub mod game_state;
pub mod high_score;
pub mod matrix;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardGrid};
pub use game_state::{GamePhase, GameState, ROTATION_KICKS};
pub use high_score::{HighScoreStore, MemoryHighScore};
pub use matrix::rotate_clockwise;
pub use pieces::{canonical_shape, Piece, Shape};
pub use rng::PieceRandomizer;
pub use scoring::{fall_interval_ms, hard_drop_score, level_for_lines, line_clear_score};
pub use snapshot::{GameSnapshot, PieceSnapshot};
