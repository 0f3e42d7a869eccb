//! # Category Detection
//!
//! Independent boolean keyword checks over the full normalized text, one per
//! category tag, collected in a fixed order: meal timing first, then
//! audience, then occasion. A recipe with no category signal falls back to
//! the single `Main Dish` tag, so the result is never empty.

use crate::model::Category;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CATEGORY_RULES: Vec<(Category, Regex)> = vec![
        (
            Category::Breakfast,
            Regex::new(r"(?i)breakfast|brunch|早餐|早饭|早点")
                .expect("breakfast pattern should be valid"),
        ),
        (
            Category::Lunch,
            Regex::new(r"(?i)lunch|午餐|午饭|便当").expect("lunch pattern should be valid"),
        ),
        (
            Category::Dinner,
            Regex::new(r"(?i)dinner|supper|晚餐|晚饭").expect("dinner pattern should be valid"),
        ),
        (
            Category::KidFriendly,
            Regex::new(r"(?i)kid|child|toddler|儿童|宝宝|小孩")
                .expect("kid-friendly pattern should be valid"),
        ),
        (
            Category::MealPrep,
            Regex::new(r"(?i)meal[ -]?prep|batch[ -]?cook|备餐")
                .expect("meal-prep pattern should be valid"),
        ),
    ];
}

/// Detect all matching category tags, in fixed check order. Never empty.
pub fn detect_categories(text: &str) -> Vec<Category> {
    let mut tags: Vec<Category> = CATEGORY_RULES
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(tag, _)| *tag)
        .collect();

    if tags.is_empty() {
        tags.push(Category::MainDish);
    }
    tags
}
