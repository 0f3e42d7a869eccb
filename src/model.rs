//! # Recipe Data Model
//!
//! Data structures for the extraction output. `PartialRecipe` is a
//! data-transfer object handed to the persistence collaborator; it owns no
//! resources and has no lifecycle beyond the extraction call that creates it.
//! Field names serialize in camelCase to match the consuming document store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed enumeration of cuisine classifications.
///
/// The variant order is also the detection priority order: when several
/// cuisine patterns match the same text, the earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cuisine {
    Chinese,
    Vietnamese,
    Japanese,
    Korean,
    Italian,
    Mexican,
    Indian,
    Other,
}

impl Cuisine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Chinese => "Chinese",
            Cuisine::Vietnamese => "Vietnamese",
            Cuisine::Japanese => "Japanese",
            Cuisine::Korean => "Korean",
            Cuisine::Italian => "Italian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Indian => "Indian",
            Cuisine::Other => "Other",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-exclusive category tags: meal timing, audience, occasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    #[serde(rename = "Kid-Friendly")]
    KidFriendly,
    #[serde(rename = "Meal Prep")]
    MealPrep,
    /// Fallback tag when no category check matches
    #[serde(rename = "Main Dish")]
    MainDish,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::KidFriendly => "Kid-Friendly",
            Category::MealPrep => "Meal Prep",
            Category::MainDish => "Main Dish",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parsed ingredient line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Sequence number within the recipe, as a string, starting at "1".
    /// Ids are assigned before deduplication and are not renumbered, so a
    /// dropped duplicate leaves a gap.
    pub id: String,
    /// Extracted quantity, may be empty (e.g. "300", "2", "适量")
    pub amount: String,
    /// Measurement unit, may be empty (e.g. "g", "cups")
    pub unit: String,
    /// Ingredient name, non-empty and trimmed; unique case-insensitively
    /// within one recipe
    pub name: String,
}

/// Zero-valued nutrition and plate-composition placeholders.
///
/// The engine makes no nutrition claims; the AI nutrition collaborator fills
/// these in afterwards from the ingredient and instruction lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    pub calories: u32,
    pub protein_grams: u32,
    pub carb_grams: u32,
    pub fat_grams: u32,
    pub veggie_percent: u8,
    pub protein_percent: u8,
    pub carb_percent: u8,
}

/// The engine's output: a structurally complete but potentially
/// content-sparse recipe record awaiting enrichment (nutrition, image,
/// translation) from other collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialRecipe {
    pub name: String,
    /// Always empty; the engine never produces an image
    pub image: String,
    pub cuisine: Cuisine,
    /// Never empty; falls back to `Main Dish`
    pub categories: Vec<Category>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub ingredients: Vec<Ingredient>,
    /// Ordered step texts, capped at 15 entries
    pub instructions: Vec<String>,
    /// Serving count, at least 1, defaults to 4
    pub portions: u32,
    pub nutrition: Nutrition,
    pub is_favorite: bool,
    /// The untouched input text, kept verbatim for audit/debugging
    pub original_text: String,
}
