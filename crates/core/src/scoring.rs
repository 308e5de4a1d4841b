//! Scoring module - line-clear points, leveling, gravity curve
//!
//! Points per lock depend only on the number of rows the lock completed and
//! the level in effect when they cleared. Level grows with total cleared
//! lines; the fall interval shrinks linearly with level and is clamped at the
//! configured floor.

use blockfall_types::EngineConfig;

/// Points per cleared-line count, multiplied by the current level
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Calculate the score awarded for one lock
///
/// lines: number of rows the lock completed (0-4)
/// level: current level (1-based)
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Level for a total line count: level 1 at zero lines, +1 per threshold
pub fn level_for_lines(total_lines: u32, lines_per_level: u32) -> u32 {
    1 + total_lines / lines_per_level.max(1)
}

/// Fall interval for a level (milliseconds per one-cell descent)
///
/// Linear in the level with a floor: `max(min, base - (level - 1) * step)`.
pub fn fall_interval_ms(level: u32, config: &EngineConfig) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(config.fall_step_ms);
    config
        .base_fall_ms
        .saturating_sub(reduction)
        .max(config.min_fall_ms)
}
