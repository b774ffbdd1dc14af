//! Shared utility functions used across the codebase.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

/// Current UTC timestamp in ISO-8601 format.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Pretty-print a JSON value.
///
/// Used wherever structured data is embedded into a chat prompt, so the
/// model sees indented JSON rather than a single line.
pub fn json_dump(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Remove markdown-style code fences to improve JSON parsing resilience.
///
/// Drops every line whose trimmed content starts with three backticks and
/// rejoins the rest. Models frequently wrap JSON output in fences even when
/// told not to.
pub fn strip_json_fences(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse JSON from raw model output, handling lightly fenced payloads.
pub fn parse_json(text: &str) -> serde_json::Result<Value> {
    serde_json::from_str(&strip_json_fences(text.trim()))
}

/// Truncate a string to at most `max_chars` characters, respecting char
/// boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
