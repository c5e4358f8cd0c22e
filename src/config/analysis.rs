//! Analysis configuration

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Tunables for the analysis and validation pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum non-whitespace length a description needs
    #[serde(default = "default_min_description_chars")]
    pub min_description_chars: usize,

    /// Cap on recommendations attached to an analysis
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// Score a draft needs to be reported as valid
    #[serde(default = "default_validation_pass_score")]
    pub validation_pass_score: u32,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.min_description_chars == 0 {
            return Err(ConfigValidationError::InvalidMinDescriptionChars);
        }
        if self.max_recommendations == 0 {
            return Err(ConfigValidationError::InvalidMaxRecommendations);
        }
        if self.validation_pass_score > 100 {
            return Err(ConfigValidationError::InvalidPassScore(
                self.validation_pass_score,
            ));
        }
        Ok(())
    }

    /// Pass score narrowed for the validator; callers validate first.
    pub fn pass_score(&self) -> u8 {
        u8::try_from(self.validation_pass_score.min(100)).unwrap_or(100)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_description_chars: default_min_description_chars(),
            max_recommendations: default_max_recommendations(),
            validation_pass_score: default_validation_pass_score(),
        }
    }
}

fn default_min_description_chars() -> usize {
    3
}

fn default_max_recommendations() -> usize {
    5
}

fn default_validation_pass_score() -> u32 {
    70
}
