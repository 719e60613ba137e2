#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a count with comma thousands separators: `60760` -> `"60,760"`.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Seconds with two decimals and an `s` suffix: `2.4` -> `"2.40s"`.
#[must_use]
pub fn format_seconds(value: f64) -> String {
    format!("{value:.2}s")
}

/// Percentage with two decimals: `99.8` -> `"99.80%"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}
