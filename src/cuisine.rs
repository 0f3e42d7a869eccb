//! # Cuisine Detection
//!
//! Classifies the full normalized text against an ordered rule list, one
//! keyword pattern per cuisine tag. The Chinese rule uses Han-script cooking
//! and dish terms; the remaining rules use romanized keywords. Evaluation
//! order is the priority order: the first rule that matches anywhere in the
//! text wins, which makes the tie-break explicit and auditable.

use crate::model::Cuisine;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref CUISINE_RULES: Vec<(Cuisine, Regex)> = vec![
        (
            Cuisine::Chinese,
            Regex::new(
                "红烧|清蒸|爆炒|麻婆|回锅|糖醋|饺子|包子|馒头|豆腐|酱油|米饭|面条|火锅|炒|烤|炖|蒸|煮|腌|焖|煎"
            )
            .expect("Chinese cuisine pattern should be valid"),
        ),
        (
            Cuisine::Vietnamese,
            Regex::new(r"(?i)vietnamese|pho\b|phở|banh\s?mi|bánh\s?mì|nuoc\s?cham|越南")
                .expect("Vietnamese cuisine pattern should be valid"),
        ),
        (
            Cuisine::Japanese,
            Regex::new(r"(?i)japanese|sushi|ramen|miso|teriyaki|tempura|dashi|udon|日式|寿司|味噌|照烧")
                .expect("Japanese cuisine pattern should be valid"),
        ),
        (
            Cuisine::Korean,
            Regex::new(r"(?i)korean|kimchi|gochujang|bulgogi|bibimbap|韩式|韩国|泡菜")
                .expect("Korean cuisine pattern should be valid"),
        ),
        (
            Cuisine::Italian,
            Regex::new(r"(?i)italian|pasta|spaghetti|risotto|pizza|lasagna|parmesan|意大利|意面")
                .expect("Italian cuisine pattern should be valid"),
        ),
        (
            Cuisine::Mexican,
            Regex::new(r"(?i)mexican|taco|burrito|salsa|tortilla|quesadilla|enchilada|墨西哥")
                .expect("Mexican cuisine pattern should be valid"),
        ),
        (
            Cuisine::Indian,
            Regex::new(r"(?i)indian|curry|masala|tikka|naan|paneer|dal\b|印度|咖喱")
                .expect("Indian cuisine pattern should be valid"),
        ),
    ];
}

/// Detect the cuisine tag for the given text.
///
/// Returns [`Cuisine::Other`] when no rule matches.
pub fn detect_cuisine(text: &str) -> Cuisine {
    for (tag, pattern) in CUISINE_RULES.iter() {
        if pattern.is_match(text) {
            debug!(cuisine = %tag, "Cuisine rule matched");
            return *tag;
        }
    }
    Cuisine::Other
}
