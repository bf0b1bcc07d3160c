//! Formatting helpers shared by the CLI and TUI

/// Format a percentage with one decimal
pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a bar of `width` cells filled to `percent` (clamped to 0..=100)
pub fn format_bar(percent: f64, width: usize) -> String {
    let fraction = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0) / 100.0
    };
    let filled = ((fraction * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
