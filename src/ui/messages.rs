//! User-facing notifications.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ALERT: &str = "🔔";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

/// Blocking notification the user has to see (rejected input, no location).
pub fn alert<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ALERT, msg, RESET);
}
