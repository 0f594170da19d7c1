//! ANSI color helper utilities for terminal output.
use crate::models::workout_type::WorkoutType;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Running is green, cycling is orange-ish yellow.
pub fn color_for_type(t: WorkoutType) -> &'static str {
    match t {
        WorkoutType::Running => GREEN,
        WorkoutType::Cycling => YELLOW,
    }
}

pub fn colorize_type(t: WorkoutType, value: &str) -> String {
    format!("{}{}{}", color_for_type(t), value, RESET)
}
