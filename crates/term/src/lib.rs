//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a
//! framebuffer of styled cells, which is then flushed to the terminal as a
//! diff against the previous frame. No widget toolkit is involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
