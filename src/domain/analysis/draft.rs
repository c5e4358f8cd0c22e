//! SMART Goal Draft - an analysis together with its five components.

use serde::Serialize;

use crate::domain::foundation::{ConfidenceLevel, UserId};
use crate::domain::nlp::MetricSuggestion;
use crate::domain::smart::{
    AchievabilityAssessment, GeneratedSmartComponent, RelevanceContext, TimeConstraint,
};

use super::GoalAnalysis;

/// A fully synthesized SMART goal, ready for review or storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmartGoalDraft {
    pub user_id: UserId,
    pub analysis: GoalAnalysis,
    pub specific: GeneratedSmartComponent<String>,
    pub measurable: GeneratedSmartComponent<Vec<MetricSuggestion>>,
    pub achievable: GeneratedSmartComponent<AchievabilityAssessment>,
    pub relevant: GeneratedSmartComponent<RelevanceContext>,
    pub time_bound: GeneratedSmartComponent<TimeConstraint>,
}

impl SmartGoalDraft {
    /// Mean confidence of the five components.
    pub fn overall_confidence(&self) -> ConfidenceLevel {
        let total = self.specific.confidence.score()
            + self.measurable.confidence.score()
            + self.achievable.confidence.score()
            + self.relevant.confidence.score()
            + self.time_bound.confidence.score();
        ConfidenceLevel::from_score(total / 5.0)
    }
}
