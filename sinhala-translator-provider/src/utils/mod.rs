//! Utility modules.

/// Log sanitization utilities to keep logs readable.
pub mod log_sanitizer;
