//! Display helpers for clock fields.

/// Zero-pads a clock field to two digits, e.g. `7` -> `"07"`.
pub fn format_clock(value: i64) -> String {
    format!("{value:02}")
}
