//! # Time Extraction
//!
//! Finds "keyword ... N unit" expressions in the text, e.g. "bake for 25
//! minutes" or "腌30分钟". One combined pattern per keyword domain: a domain
//! keyword, a bounded gap of arbitrary characters, an integer, and a unit
//! token from a fixed bilingual minute/hour vocabulary. Hour-class units are
//! converted to minutes. Only the first match in the text is used.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// Keywords signalling preparation time
pub const PREP_KEYWORDS: &[&str] = &["preparation", "prep", "marinate", "soak", "腌", "泡", "准备"];

/// Keywords signalling cooking time
pub const COOK_KEYWORDS: &[&str] = &[
    "cook", "bake", "roast", "fry", "boil", "grill", "steam", "simmer", "烤", "煮", "炒", "炖",
    "蒸", "煎", "焖",
];

// Up to 20 arbitrary characters may separate the keyword from the number
const KEYWORD_GAP: &str = ".{0,20}?";

fn build_time_pattern(keywords: &[&str]) -> String {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    format!(
        r"(?i)(?:{}){}(?P<value>\d+)\s*(?P<unit>hours?|hrs?|hr|个小时|小时|minutes?|mins?|min|分钟|分)",
        alternation, KEYWORD_GAP
    )
}

lazy_static! {
    static ref PREP_TIME: Regex = Regex::new(&build_time_pattern(PREP_KEYWORDS))
        .expect("prep time pattern should be valid");
    static ref COOK_TIME: Regex = Regex::new(&build_time_pattern(COOK_KEYWORDS))
        .expect("cook time pattern should be valid");
    static ref HOUR_UNIT: Regex =
        Regex::new(r"(?i)^(?:hours?|hrs?|hr|个小时|小时)$").expect("hour unit pattern should be valid");
}

fn first_time_match(text: &str, pattern: &Regex) -> u32 {
    let Some(capture) = pattern.captures(text) else {
        return 0;
    };

    let value: u32 = capture["value"].parse().unwrap_or(0);
    let unit = &capture["unit"];
    let minutes = if HOUR_UNIT.is_match(unit) {
        value.saturating_mul(60)
    } else {
        value
    };

    debug!(value, unit, minutes, "Time expression matched");
    minutes
}

/// Extract the first time expression anchored by one of `domain_keywords`.
///
/// Returns minutes, or 0 when nothing matches. The keyword list is escaped
/// before being compiled into the combined pattern, so any literal strings
/// are accepted.
pub fn extract_time(text: &str, domain_keywords: &[&str]) -> u32 {
    if domain_keywords.is_empty() {
        return 0;
    }
    let pattern = Regex::new(&build_time_pattern(domain_keywords))
        .expect("escaped keyword pattern should be valid");
    first_time_match(text, &pattern)
}

/// Extract preparation time in minutes using the cached prep-keyword pattern.
pub fn extract_prep_time(text: &str) -> u32 {
    first_time_match(text, &PREP_TIME)
}

/// Extract cooking time in minutes using the cached cook-keyword pattern.
pub fn extract_cook_time(text: &str) -> u32 {
    first_time_match(text, &COOK_TIME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_and_hours() {
        assert_eq!(extract_cook_time("Bake for 25 minutes until golden"), 25);
        assert_eq!(extract_cook_time("simmer for 2 hours on low heat"), 120);
        assert_eq!(extract_cook_time("roast 1 hr at 200C"), 60);
    }

    #[test]
    fn test_chinese_units() {
        assert_eq!(extract_prep_time("腌30分钟"), 30);
        assert_eq!(extract_cook_time("炖1小时即可"), 60);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            extract_prep_time("marinate 10 minutes, then marinate 50 minutes more"),
            10
        );
    }

    #[test]
    fn test_gap_limit_and_default() {
        // More than 20 characters between the keyword and the number
        assert_eq!(
            extract_cook_time("bake it whenever you feel like it, maybe 25 minutes"),
            0
        );
        assert_eq!(extract_prep_time("no times here"), 0);
        assert_eq!(extract_time("bake 5 min", &[]), 0);
    }
}
