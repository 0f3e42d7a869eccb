//! # Portion Extraction
//!
//! Reads a serving count from the text using an ordered pattern list. The
//! default of 4 is load-bearing: downstream nutrition math divides by the
//! serving count, so it must never be 0 and must stay 4 when no signal
//! exists.

use lazy_static::lazy_static;
use regex::Regex;

/// Serving count assumed when the text carries no signal
pub const DEFAULT_PORTIONS: u32 = 4;

lazy_static! {
    // Tried in priority order; the first match anywhere in the text wins
    static ref PORTION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(\d+)\s*人份").expect("portion pattern should be valid"),
        Regex::new(r"(?i)serves\s*(\d+)").expect("portion pattern should be valid"),
        Regex::new(r"(?i)(\d+)\s*servings?").expect("portion pattern should be valid"),
        Regex::new(r"(\d+)\s*份").expect("portion pattern should be valid"),
    ];
}

/// Extract the portion count, always at least 1, defaulting to 4.
pub fn extract_portions(text: &str) -> u32 {
    for pattern in PORTION_PATTERNS.iter() {
        if let Some(capture) = pattern.captures(text) {
            if let Some(count) = capture.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
                if count >= 1 {
                    return count;
                }
            }
        }
    }
    DEFAULT_PORTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_priority() {
        assert_eq!(extract_portions("这道菜2人份"), 2);
        assert_eq!(extract_portions("Serves 6 people"), 6);
        assert_eq!(extract_portions("makes 8 servings"), 8);
        assert_eq!(extract_portions("一共3份"), 3);
        // "N人份" outranks "N份" even when both appear
        assert_eq!(extract_portions("共10份，建议5人份"), 5);
    }

    #[test]
    fn test_default_when_no_signal() {
        assert_eq!(
            extract_portions("A simple stir fry with chicken and rice."),
            DEFAULT_PORTIONS
        );
        assert_eq!(extract_portions(""), DEFAULT_PORTIONS);
    }

    #[test]
    fn test_zero_count_falls_through() {
        assert_eq!(extract_portions("serves 0"), DEFAULT_PORTIONS);
    }
}
