//! # Extraction Configuration
//!
//! Tunable limits for the extraction pipeline. The defaults carry the
//! empirically tuned values the heuristics were calibrated against; changing
//! them changes extraction behavior, so downstream consumers should stay on
//! the defaults unless they know what they are doing.

use crate::errors::{AppError, AppResult};

/// Configuration options for the recipe extractor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// How many leading lines are considered when selecting the recipe name
    pub title_window_lines: usize,
    /// Hard cap on the number of extracted instruction steps
    pub max_instructions: usize,
    /// Maximum line length (in characters) for the food-word ingredient
    /// fallback; longer lines are never accepted verbatim as ingredients
    pub fallback_max_line_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            title_window_lines: 10,
            max_instructions: 15,
            fallback_max_line_chars: 50,
        }
    }
}

impl ExtractionConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> AppResult<()> {
        if self.title_window_lines == 0 {
            return Err(AppError::Config(
                "title_window_lines must be greater than 0".to_string(),
            ));
        }

        if self.max_instructions == 0 {
            return Err(AppError::Config(
                "max_instructions must be greater than 0".to_string(),
            ));
        }

        if self.fallback_max_line_chars == 0 {
            return Err(AppError::Config(
                "fallback_max_line_chars must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
