//! # Recipe Name Extraction
//!
//! Heuristic title selection from the first lines of the document. Section
//! headers and ingredient/step-looking lines (those opening with a number or
//! bullet) are never titles; among the surviving candidates the longest line
//! wins, with ties resolved by first occurrence.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

const TITLE_MIN_CHARS: usize = 6;
const TITLE_MAX_CHARS: usize = 99;

/// Fixed fallback name when the document has no usable line at all
pub const UNTITLED: &str = "Untitled Recipe";

lazy_static! {
    static ref SECTION_HEADER: Regex = Regex::new(r"(?i)ingredients?|食材|材料|instructions?|做法|步骤")
        .expect("section header pattern should be valid");
}

fn opens_with_list_marker(line: &str) -> bool {
    match line.chars().next() {
        Some(c) => {
            c.is_ascii_digit() || ('\u{FF10}'..='\u{FF19}').contains(&c) || matches!(c, '•' | '-' | '*')
        }
        None => false,
    }
}

/// Select a recipe name from the leading `window` lines. Never empty.
pub fn extract_name(lines: &[String], window: usize) -> String {
    let mut best: Option<&String> = None;
    let mut best_len = 0usize;

    for line in lines.iter().take(window) {
        let len = line.chars().count();
        if len < TITLE_MIN_CHARS || len > TITLE_MAX_CHARS {
            continue;
        }
        if SECTION_HEADER.is_match(line) {
            trace!(line = %line, "Skipping section header as title candidate");
            continue;
        }
        if opens_with_list_marker(line) {
            continue;
        }
        // Strictly-greater keeps the first maximal candidate on ties
        if len > best_len {
            best = Some(line);
            best_len = len;
        }
    }

    if let Some(name) = best {
        return name.clone();
    }
    match lines.first() {
        Some(first) => first.clone(),
        None => UNTITLED.to_string(),
    }
}
