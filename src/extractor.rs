//! # Recipe Extractor
//!
//! Assembles the pipeline stages into one extraction call. Every stage is a
//! total function with an explicit default, so the assembler never fails:
//! the absence of extracted data is communicated through defaults and empty
//! lists, never through errors. Calling code detects low-confidence
//! extraction heuristically (e.g. an empty ingredient list) and routes the
//! user to manual entry.

use crate::categories::detect_categories;
use crate::config::ExtractionConfig;
use crate::cuisine::detect_cuisine;
use crate::errors::AppResult;
use crate::ingredients::extract_ingredients;
use crate::instructions::extract_instructions;
use crate::model::{Nutrition, PartialRecipe};
use crate::normalize::normalize;
use crate::portions::extract_portions;
use crate::timing::{extract_cook_time, extract_prep_time};
use crate::title::extract_name;
use tracing::debug;

/// Free-text recipe extraction engine.
///
/// Stateless between calls and internally synchronous; a shared instance can
/// be used from any number of threads without locking.
#[derive(Debug, Clone)]
pub struct RecipeExtractor {
    config: ExtractionConfig,
}

impl RecipeExtractor {
    /// Create an extractor with the default configuration
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Create an extractor with a custom configuration
    pub fn with_config(config: ExtractionConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run one extraction. Total for every input, including the empty string.
    pub fn extract(&self, raw: &str) -> PartialRecipe {
        let started = std::time::Instant::now();

        let lines = normalize(raw);
        // Classifiers run over the whole normalized text, not line by line
        let text = lines.join("\n");

        let recipe = PartialRecipe {
            name: extract_name(&lines, self.config.title_window_lines),
            image: String::new(),
            cuisine: detect_cuisine(&text),
            categories: detect_categories(&text),
            prep_time_minutes: extract_prep_time(&text),
            cook_time_minutes: extract_cook_time(&text),
            ingredients: extract_ingredients(&lines, self.config.fallback_max_line_chars),
            instructions: extract_instructions(&lines, self.config.max_instructions),
            portions: extract_portions(&text),
            nutrition: Nutrition::default(),
            is_favorite: false,
            original_text: raw.to_string(),
        };

        debug!(
            duration_ms = started.elapsed().as_millis() as u64,
            lines = lines.len(),
            ingredients = recipe.ingredients.len(),
            instructions = recipe.instructions.len(),
            cuisine = %recipe.cuisine,
            "Recipe extraction complete"
        );
        recipe
    }
}

impl Default for RecipeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract a partial recipe from raw text using the default configuration.
pub fn extract_recipe(raw: &str) -> PartialRecipe {
    RecipeExtractor::new().extract(raw)
}
