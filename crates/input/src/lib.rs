//! Terminal input mapping.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every
//! press is delivered to the game as-is; there is no auto-repeat handling
//! beyond what the terminal itself sends.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
