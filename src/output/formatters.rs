//! Reusable formatting utilities for table cells
//!
//! Backend fields are frequently optional or overly long for terminal
//! display. These helpers normalize them for table rendering.

/// Render an optional string, with "-" for missing values.
pub fn format_opt(value: &Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => "-".to_string(),
    }
}

/// Render a boolean flag as "yes" / "no".
pub fn format_flag(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

/// Render a paid/unpaid marker.
pub fn format_mark(value: bool) -> String {
    if value { "✓" } else { "–" }.to_string()
}

/// Render a dinar amount with two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Truncate long text for a table cell, appending an ellipsis.
///
/// Splits on character boundaries, not bytes, so multi-byte names
/// survive intact.
pub fn truncate(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}
