//! # Text Normalization
//!
//! First pipeline stage: turns raw OCR or pasted text into an ordered
//! sequence of trimmed, non-empty lines. Reading order is preserved and is
//! semantically meaningful for every later stage.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    // Zero-width space, zero-width non-joiner/joiner and BOM characters,
    // common OCR and copy-paste artifacts
    static ref INVISIBLE_CHARS: Regex = Regex::new("[\u{200B}\u{200C}\u{200D}\u{FEFF}]")
        .expect("invisible character pattern should be valid");
    // Runs of horizontal whitespace; line breaks must survive until the split
    static ref HORIZONTAL_WHITESPACE: Regex =
        Regex::new(r"[^\S\r\n]+").expect("whitespace pattern should be valid");
}

/// Normalize raw text into trimmed, non-empty lines.
///
/// Pure, total function: never fails, empty input yields an empty vector.
pub fn normalize(raw: &str) -> Vec<String> {
    let stripped = INVISIBLE_CHARS.replace_all(raw, "");
    let collapsed = HORIZONTAL_WHITESPACE.replace_all(&stripped, " ");

    let lines: Vec<String> = collapsed
        .trim()
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    trace!(
        input_len = raw.len(),
        line_count = lines.len(),
        "Normalized input text"
    );
    lines
}
