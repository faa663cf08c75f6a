//! Utility functions and helpers.

pub mod http;
pub mod url;

pub use http::HttpClient;

/// Shorten a string for single-line display, appending an ellipsis when the
/// input exceeds `max_chars`.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{head}...")
}
