//! Input validation and sanitization
//!
//! [`validate_input`] rejects text; [`sanitize_text`] rewrites it. The
//! denylist is a shallow substring heuristic, not an HTML parser, and is kept
//! as a fixed list.

use crate::errors::{Result, WordCloudError};

/// Case-insensitive substrings that reject an input outright.
pub const DENYLIST: &[&str] = &[
    "<script",
    "javascript:",
    "data:",
    "vbscript:",
    "onload=",
    "onerror=",
    "onfocus=",
    "autofocus=",
];

/// Characters removed by [`sanitize_text`] in addition to ASCII controls.
pub const STRIPPED_CHARS: &[char] = &['<', '>', '\'', '"', '&'];

/// Validate raw input without modifying it.
///
/// Checks, in order: non-empty, at most `max_length` UTF-16 code units, no
/// [`DENYLIST`] entry (ASCII case-insensitive). Whitespace-only text passes.
///
/// Characters outside the Basic Multilingual Plane count as two units.
pub fn validate_input(text: &str, max_length: usize) -> Result<&str> {
    if text.is_empty() {
        return Err(WordCloudError::invalid_input(
            "text must be a non-empty string",
        ));
    }

    let length = text.encode_utf16().count();
    if length > max_length {
        return Err(WordCloudError::input_too_large(length, max_length));
    }

    if let Some(pattern) = find_denied_pattern(text) {
        return Err(WordCloudError::malicious_content(pattern));
    }

    Ok(text)
}

/// First [`DENYLIST`] entry contained in `text`, if any.
pub fn find_denied_pattern(text: &str) -> Option<&'static str> {
    let folded = text.to_ascii_lowercase();
    DENYLIST
        .iter()
        .copied()
        .find(|pattern| folded.contains(pattern))
}

/// Strip markup-significant characters and ASCII controls, then trim.
///
/// Tabs and newlines are controls too, so they are removed rather than turned
/// into spaces: `"foo\nbar"` becomes `"foobar"`.
pub fn sanitize_text(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c) && !c.is_ascii_control())
        .collect();
    stripped.trim().to_string()
}
