use time::{macros::format_description, OffsetDateTime};

/// `45892` -> `"45,892"`.
pub fn format_thousands(value: u64) -> String {
    let s = value.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Width for a progress bar fill. Display values are never clamped, only the
/// bar is.
pub fn bar_width(percent: f64) -> f64 {
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// `HH:MM UTC` stamp for the results header.
pub fn format_completed_at(at: OffsetDateTime) -> String {
    at.format(format_description!("[hour]:[minute] UTC"))
        .unwrap_or_default()
}
