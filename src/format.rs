//! Text formatting helpers shared by table derivation and annotation rows.

/// Display text used when a numeric source value is absent.
pub const ABSENT_VALUE_TEXT: &str = "n/a";

/// `chrono` format string for annotation timestamps, minute precision.
pub const ANNOTATION_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats `value` with comma separators between thousands groups.
///
/// `1234567` becomes `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.chars().rev().collect()
}

/// Formats an optional count, substituting [`ABSENT_VALUE_TEXT`] for `None`.
pub fn count_or_absent(value: Option<u64>) -> String {
    match value {
        Some(count) => group_thousands(count),
        None => ABSENT_VALUE_TEXT.to_string(),
    }
}
