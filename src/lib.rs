//! # Recipe Extract
//!
//! A deterministic free-text recipe extraction engine. It takes raw,
//! unstructured text (OCR output from a photographed recipe card, or text
//! pasted from a webpage) in English or Chinese and produces a structured
//! partial recipe record using layered heuristics, with defined fallback
//! behavior when no pattern matches.

pub mod categories;
pub mod config;
pub mod cuisine;
pub mod errors;
pub mod extractor;
pub mod ingredients;
pub mod instructions;
pub mod model;
pub mod normalize;
pub mod portions;
pub mod timing;
pub mod title;

// Re-export types for easier access
pub use config::ExtractionConfig;
pub use extractor::{extract_recipe, RecipeExtractor};
pub use model::{Category, Cuisine, Ingredient, Nutrition, PartialRecipe};
