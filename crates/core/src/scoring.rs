//! Scoring module - line clear points, drop bonus, level curve
//!
//! - Line clears: `LINE_SCORES[lines] * level`, or `lines * 100 * level` past the table.
//! - Hard drop: 2 points per row travelled. Soft drop awards nothing.
//! - Level: `total_lines / 10 + 1`.
//! - Fall interval: `max(min, base - (level - 1) * decrement)` from the difficulty preset.

use crate::types::{
    Difficulty, FALLBACK_POINTS_PER_LINE, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows in one sweep at `level`.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base = LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or_else(|| (lines as u32).saturating_mul(FALLBACK_POINTS_PER_LINE));
    base.saturating_mul(level)
}

/// Bonus for a hard drop that travelled `rows` rows.
pub fn hard_drop_score(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}

/// Level reached after clearing `total_lines` lines (starts at 1).
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Automatic descent interval at `level` for `difficulty`, in milliseconds.
pub fn fall_interval_ms(difficulty: Difficulty, level: u32) -> u32 {
    let s = difficulty.settings();
    let steps = level.saturating_sub(1);
    s.base_speed_ms
        .saturating_sub(steps.saturating_mul(s.speed_decrement_ms))
        .max(s.min_speed_ms)
}
