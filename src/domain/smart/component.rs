//! Records produced by the SMART generators.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ConfidenceLevel, GoalDomain, Timestamp};

/// Result of one generator: the content, how sure we are, and which
/// extraction or fallback path produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSmartComponent<T> {
    pub content: T,
    pub confidence: ConfidenceLevel,
    pub reasoning: String,
}

impl<T> GeneratedSmartComponent<T> {
    /// Wraps generated content.
    pub fn new(content: T, confidence: ConfidenceLevel, reasoning: impl Into<String>) -> Self {
        Self {
            content,
            confidence,
            reasoning: reasoning.into(),
        }
    }
}

/// How hard a goal looks given its urgency, deadline and domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Easy,
    Moderate,
    Challenging,
    Difficult,
}

impl DifficultyLevel {
    /// Maps a difficulty score onto a level.
    pub fn from_score(score: u32) -> Self {
        match score {
            0 => DifficultyLevel::Easy,
            1 | 2 => DifficultyLevel::Moderate,
            3 => DifficultyLevel::Challenging,
            _ => DifficultyLevel::Difficult,
        }
    }

    /// Returns the serialized literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Moderate => "moderate",
            DifficultyLevel::Challenging => "challenging",
            DifficultyLevel::Difficult => "difficult",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimated effort in hours, working days and weeks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortEstimate {
    pub hours: f64,
    pub days: u32,
    pub weeks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievabilityAssessment {
    pub difficulty_level: DifficultyLevel,
    /// Deduplicated, in first-seen order.
    pub required_resources: Vec<String>,
    pub estimated_effort: EffortEstimate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceContext {
    /// Deduplicated, in first-seen order.
    pub personal_values: Vec<String>,
    /// Always exactly the goal's domain.
    pub life_areas: Vec<GoalDomain>,
    pub motivation: String,
}

/// Final schedule of a goal.
///
/// `end_date` is strictly after `start_date`; milestones are strictly
/// ascending and strictly between the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeConstraint {
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub milestones: Vec<Timestamp>,
}

impl TimeConstraint {
    /// Whole days between start and end.
    pub fn span_days(&self) -> i64 {
        self.end_date.duration_since(&self.start_date).num_days()
    }
}
