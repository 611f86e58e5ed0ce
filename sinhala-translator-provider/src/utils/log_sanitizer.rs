//! Log sanitization utilities
//!
//! Keeps user text and backend bodies from flooding debug/error logs.

/// Maximum number of characters kept in truncated log output.
const TRUNCATE_LIMIT: usize = 200;

/// Truncate a string for logging.
///
/// Counts characters, not bytes, so Sinhala text (3 bytes per code point in
/// UTF-8) is never cut inside a code point.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!(
            "{}... [truncated, total {} chars]",
            &s[..cut],
            s.chars().count()
        ),
    }
}
