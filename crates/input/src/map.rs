//! Key mapping from terminal events to game actions.

use crate::types::{Difficulty, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Letter keys are case-insensitive. Key releases map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('k') => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),

        // Session
        KeyCode::Char('p') => Some(GameAction::TogglePause),
        KeyCode::Char('r') => Some(GameAction::Reset),
        KeyCode::Char('s') | KeyCode::Enter => Some(GameAction::Start),

        // Difficulty presets
        KeyCode::Char('1') => Some(GameAction::SelectDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(GameAction::SelectDifficulty(Difficulty::Normal)),
        KeyCode::Char('3') => Some(GameAction::SelectDifficulty(Difficulty::Hard)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL))
}
