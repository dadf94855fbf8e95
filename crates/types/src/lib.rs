//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, persistence).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered on row 0
//!
//! # Difficulty Presets
//!
//! Fall interval in milliseconds per row:
//!
//! | Difficulty | Base | Decrement per level | Floor |
//! |------------|------|---------------------|-------|
//! | easy       | 1000 | 50                  | 200   |
//! | normal     | 800  | 40                  | 100   |
//! | hard       | 500  | 30                  | 50    |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Difficulty, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Difficulty presets
//! let normal = Difficulty::Normal.settings();
//! assert_eq!(normal.base_speed_ms, 800);
//!
//! // Parse game action
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per row travelled by a hard drop.
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Line clear scoring table, indexed by rows cleared in one sweep.
///
/// Multiplied by the level at the time of the clear. Sweeps larger than the
/// table fall back to 100 points per row.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Fallback points per row for sweeps beyond the table.
pub const FALLBACK_POINTS_PER_LINE: u32 = 100;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let v = u32::from_str_radix(hex, 16).ok()?;
        Some(Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8))
    }
}

/// The seven piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, four in a row
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter used in previews and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Display color of the kind.
    ///
    /// ```
    /// use blockfall_types::{PieceKind, Rgb};
    ///
    /// assert_eq!(PieceKind::L.color(), Rgb::new(0xff, 0x88, 0x00));
    /// ```
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0x00, 0xff, 0xff),
            PieceKind::O => Rgb::new(0xff, 0xff, 0x00),
            PieceKind::T => Rgb::new(0xff, 0x00, 0xff),
            PieceKind::S => Rgb::new(0x00, 0xff, 0x00),
            PieceKind::Z => Rgb::new(0xff, 0x00, 0x00),
            PieceKind::J => Rgb::new(0x00, 0x00, 0xff),
            PieceKind::L => Rgb::new(0xff, 0x88, 0x00),
        }
    }
}

/// Fall-speed curve of a difficulty preset (all values in milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultySettings {
    pub base_speed_ms: u32,
    pub speed_decrement_ms: u32,
    pub min_speed_ms: u32,
}

/// Difficulty presets, selected before a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn settings(&self) -> DifficultySettings {
        match self {
            Difficulty::Easy => DifficultySettings {
                base_speed_ms: 1000,
                speed_decrement_ms: 50,
                min_speed_ms: 200,
            },
            Difficulty::Normal => DifficultySettings {
                base_speed_ms: 800,
                speed_decrement_ms: 40,
                min_speed_ms: 100,
            },
            Difficulty::Hard => DifficultySettings {
                base_speed_ms: 500,
                speed_decrement_ms: 30,
                min_speed_ms: 50,
            },
        }
    }

    /// Parse difficulty from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

/// Commands that can be applied to a game session
///
/// One variant per input command. Every command is a silent no-op when the
/// session is not in a state that accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (locks if blocked, no points)
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise with horizontal kicks
    Rotate,
    /// Toggle between running and paused
    TogglePause,
    /// Abandon the session and return to idle
    Reset,
    /// Start a new session (from idle or game over)
    Start,
    /// Select the difficulty used by the next start
    SelectDifficulty(Difficulty),
}

impl GameAction {
    /// Parse a unit action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" | "togglepause" => Some(GameAction::TogglePause),
            "reset" => Some(GameAction::Reset),
            "start" => Some(GameAction::Start),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::TogglePause => "togglePause",
            GameAction::Reset => "reset",
            GameAction::Start => "start",
            GameAction::SelectDifficulty(_) => "selectDifficulty",
        }
    }
}

/// Discrete gameplay events for audio/UI collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Active piece shifted one column.
    Move,
    /// Rotation accepted.
    Rotate,
    /// Active piece written into the board.
    Lock,
    /// Hard drop that travelled at least one row.
    HardDrop { rows: u32 },
    /// Sweep removed 1-3 rows (or more than 4).
    LineClear { lines: u32 },
    /// Sweep removed exactly 4 rows.
    TetrisClear,
    /// Level increased.
    LevelUp { level: u32 },
    /// Session ended.
    GameOver { score: u32, new_high_score: bool },
}

impl GameEvent {
    /// Stable camelCase name of the event.
    ///
    /// ```
    /// use blockfall_types::GameEvent;
    ///
    /// assert_eq!(GameEvent::TetrisClear.as_str(), "tetrisClear");
    /// assert_eq!(GameEvent::HardDrop { rows: 3 }.as_str(), "hardDrop");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Move => "move",
            GameEvent::Rotate => "rotate",
            GameEvent::Lock => "lock",
            GameEvent::HardDrop { .. } => "hardDrop",
            GameEvent::LineClear { .. } => "lineClear",
            GameEvent::TetrisClear => "tetrisClear",
            GameEvent::LevelUp { .. } => "levelUp",
            GameEvent::GameOver { .. } => "gameOver",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
