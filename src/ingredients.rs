//! # Ingredient Extraction
//!
//! The hardest stage of the pipeline: a line-by-line, multi-pattern parser.
//! An ordered bank of `(pattern, capture semantics)` pairs is tried per line
//! until one matches, so the priority order stays an explicit, auditable data
//! structure. Lines that match no pattern can still be accepted verbatim when
//! they are short and contain a known food word, which keeps the parser
//! useful on badly formatted input. A final pass deduplicates by
//! case-insensitive name, first occurrence wins.

use crate::model::Ingredient;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Capture semantics of one entry in the pattern bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternKind {
    /// Han-script name, decimal quantity, unit token (name-quantity-unit order)
    HanTight,
    /// Like `HanTight` but the name may contain embedded whitespace, and the
    /// unit vocabulary adds centimeters
    HanLoose,
    /// Han-script name followed by a qualitative amount ("to taste"); the
    /// token lands in `amount`, `unit` stays empty
    HanQualitative,
    /// English quantity-unit-name order ("2 cups flour")
    EnglishQuantity,
}

lazy_static! {
    static ref PATTERN_BANK: Vec<(PatternKind, Regex)> = vec![
        (
            PatternKind::HanTight,
            Regex::new(
                r"(?i)^(?P<name>\p{Han}+)\s*(?P<qty>\d+(?:\.\d+)?)\s*(?P<unit>kg|g|ml|千克|克|毫升|升|汤匙|茶匙|勺|匙|杯|个|只|片|条|块|根|瓣|颗|粒)$"
            )
            .expect("han tight ingredient pattern should be valid"),
        ),
        (
            PatternKind::HanLoose,
            Regex::new(
                r"(?i)^(?P<name>\p{Han}[\p{Han} ]*?)\s*(?P<qty>\d+(?:\.\d+)?)\s*(?P<unit>kg|g|ml|cm|千克|克|毫升|升|厘米|汤匙|茶匙|勺|匙|杯|个|只|片|条|块|根|瓣|颗|粒)$"
            )
            .expect("han loose ingredient pattern should be valid"),
        ),
        (
            PatternKind::HanQualitative,
            Regex::new(r"^(?P<name>\p{Han}+)\s*(?P<amount>适量|少许|少量|若干)$")
                .expect("han qualitative ingredient pattern should be valid"),
        ),
        (
            PatternKind::EnglishQuantity,
            Regex::new(
                r"(?i)^(?P<qty>\d+(?:\.\d+)?)\s+(?P<unit>cups?|tablespoons?|teaspoons?|ounces?|pounds?)\s+(?P<name>.+)$"
            )
            .expect("english ingredient pattern should be valid"),
        ),
    ];
}

// Section headers are never ingredients, even when short enough for the
// food-word fallback
const SECTION_HEADER_TOKENS: &[&str] = &[
    "做法",
    "步骤",
    "instructions",
    "directions",
    "method",
    "制作方法",
    "烹饪方法",
    "腌制方法",
];

// Bilingual food vocabulary backing the verbatim-line fallback
const FOOD_WORDS: &[&str] = &[
    // English
    "chicken", "beef", "pork", "lamb", "fish", "shrimp", "egg", "tofu", "rice", "noodle", "flour",
    "sugar", "salt", "pepper", "oil", "butter", "milk", "cheese", "garlic", "ginger", "onion",
    "scallion", "tomato", "potato", "carrot", "mushroom", "cabbage", "broccoli", "soy sauce",
    "vinegar", "honey", "sesame",
    // Chinese
    "鸡", "鸭", "牛", "猪", "羊", "鱼", "虾", "蛋", "豆腐", "米", "面", "粉", "糖", "盐", "油",
    "醋", "蒜", "姜", "葱", "椒", "茄", "菇", "菜", "萝卜", "土豆", "酱油", "芝麻", "蜂蜜",
];

fn is_section_header(line: &str) -> bool {
    let token = line.trim_end_matches([':', '：']).trim().to_lowercase();
    SECTION_HEADER_TOKENS.iter().any(|header| token == *header)
}

fn contains_food_word(line: &str) -> bool {
    let lower = line.to_lowercase();
    FOOD_WORDS.iter().any(|word| lower.contains(word))
}

/// Try the pattern bank in priority order; first match wins.
/// Returns `(amount, unit, name)` per the matching pattern's semantics.
fn match_pattern_bank(line: &str) -> Option<(String, String, String)> {
    for (kind, pattern) in PATTERN_BANK.iter() {
        let Some(capture) = pattern.captures(line) else {
            continue;
        };
        trace!(line = %line, kind = ?kind, "Ingredient pattern matched");

        return Some(match kind {
            PatternKind::HanTight | PatternKind::HanLoose => {
                // Embedded whitespace in the name is an OCR artifact here
                let name: String = capture["name"].chars().filter(|c| !c.is_whitespace()).collect();
                (
                    capture["qty"].to_string(),
                    capture["unit"].to_string(),
                    name,
                )
            }
            PatternKind::HanQualitative => (
                capture["amount"].to_string(),
                String::new(),
                capture["name"].to_string(),
            ),
            PatternKind::EnglishQuantity => (
                capture["qty"].to_string(),
                capture["unit"].to_string(),
                capture["name"].trim().to_string(),
            ),
        });
    }
    None
}

/// Extract ingredients from normalized lines.
///
/// `fallback_max_chars` bounds the verbatim-line fallback: longer lines are
/// assumed to be prose (usually instruction steps), never ingredients.
pub fn extract_ingredients(lines: &[String], fallback_max_chars: usize) -> Vec<Ingredient> {
    let mut ingredients = Vec::new();
    let mut next_id = 1usize;

    for line in lines {
        if is_section_header(line) {
            continue;
        }

        if let Some((amount, unit, name)) = match_pattern_bank(line) {
            ingredients.push(Ingredient {
                id: next_id.to_string(),
                amount,
                unit,
                name,
            });
            next_id += 1;
            continue;
        }

        // Verbatim fallback for badly formatted input: short line mentioning
        // a known food word becomes an ingredient with no amount or unit
        if line.chars().count() < fallback_max_chars && contains_food_word(line) {
            ingredients.push(Ingredient {
                id: next_id.to_string(),
                amount: String::new(),
                unit: String::new(),
                name: line.clone(),
            });
            next_id += 1;
        }
    }

    let deduplicated = dedup_by_name(ingredients);
    debug!(count = deduplicated.len(), "Ingredient extraction complete");
    deduplicated
}

/// Drop later ingredients whose lower-cased name was already seen.
///
/// Runs as a final pass rather than inline because a later line can repeat an
/// ingredient that the fallback rule already captured.
fn dedup_by_name(ingredients: Vec<Ingredient>) -> Vec<Ingredient> {
    let mut seen = HashSet::new();
    ingredients
        .into_iter()
        .filter(|ingredient| seen.insert(ingredient.name.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_header_detection() {
        assert!(is_section_header("做法"));
        assert!(is_section_header("Instructions:"));
        assert!(is_section_header("METHOD"));
        assert!(!is_section_header("做法很简单"));
    }

    #[test]
    fn test_pattern_bank_priority() {
        // The tight Han pattern outranks the loose one on identical input
        let (amount, unit, name) = match_pattern_bank("鸡腿 300g").unwrap();
        assert_eq!((amount.as_str(), unit.as_str(), name.as_str()), ("300", "g", "鸡腿"));
    }

    #[test]
    fn test_loose_pattern_strips_embedded_whitespace() {
        let (amount, unit, name) = match_pattern_bank("葱 白 段 3厘米").unwrap();
        assert_eq!((amount.as_str(), unit.as_str(), name.as_str()), ("3", "厘米", "葱白段"));
    }
}
