//! Confidence levels attached to every generated result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered qualitative confidence.
///
/// Each level maps to a numeric score for arithmetic combination; scores map
/// back through the bands `[0.8, 0.6, 0.4, 0.2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ConfidenceLevel {
    /// Returns the numeric score for this level.
    pub fn score(&self) -> f64 {
        match self {
            ConfidenceLevel::VeryLow => 0.1,
            ConfidenceLevel::Low => 0.3,
            ConfidenceLevel::Medium => 0.5,
            ConfidenceLevel::High => 0.7,
            ConfidenceLevel::VeryHigh => 0.9,
        }
    }

    /// Maps a numeric score onto its band.
    ///
    /// Scores are rounded to three decimals first so that sums such as
    /// `0.5 + 0.2 + 0.1` land in the band they read as.
    pub fn from_score(score: f64) -> Self {
        let score = (score * 1000.0).round() / 1000.0;
        if score >= 0.8 {
            ConfidenceLevel::VeryHigh
        } else if score >= 0.6 {
            ConfidenceLevel::High
        } else if score >= 0.4 {
            ConfidenceLevel::Medium
        } else if score >= 0.2 {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::VeryLow
        }
    }

    /// Returns the next level up, saturating at `VeryHigh`.
    pub fn raised(&self) -> Self {
        match self {
            ConfidenceLevel::VeryLow => ConfidenceLevel::Low,
            ConfidenceLevel::Low => ConfidenceLevel::Medium,
            ConfidenceLevel::Medium => ConfidenceLevel::High,
            ConfidenceLevel::High | ConfidenceLevel::VeryHigh => ConfidenceLevel::VeryHigh,
        }
    }

    /// Returns the serialized literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::VeryLow => "very_low",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
            ConfidenceLevel::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
