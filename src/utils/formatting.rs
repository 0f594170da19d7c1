//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to `width` terminal columns (emoji count as two).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Derived metrics are shown with a single decimal ("4.6").
pub fn one_decimal(v: f64) -> String {
    format!("{:.1}", v)
}

/// User entered values are shown as typed: `24` rather than `24.0`.
pub fn number(v: f64) -> String {
    format!("{}", v)
}
