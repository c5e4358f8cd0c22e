//! SmartComponentGenerator port - the five SMART generators.

use async_trait::async_trait;

use crate::domain::foundation::{GoalError, UserId};
use crate::domain::nlp::{GoalIntent, MetricSuggestion, TimeframeInfo};
use crate::domain::smart::{
    AchievabilityAssessment, GeneratedSmartComponent, RelevanceContext, TimeConstraint,
};

/// Generates SMART components from extracted goal structure.
#[async_trait]
pub trait SmartComponentGenerator: Send + Sync {
    /// Fails with `VALIDATION_FAILED` when action or outcome is blank.
    async fn generate_specific(
        &self,
        intent: &GoalIntent,
    ) -> Result<GeneratedSmartComponent<String>, GoalError>;

    async fn generate_measurable(
        &self,
        intent: &GoalIntent,
        raw_text: &str,
    ) -> GeneratedSmartComponent<Vec<MetricSuggestion>>;

    async fn generate_achievable(
        &self,
        intent: &GoalIntent,
        timeframe: &TimeframeInfo,
    ) -> GeneratedSmartComponent<AchievabilityAssessment>;

    async fn generate_relevant(
        &self,
        intent: &GoalIntent,
        user_id: &UserId,
    ) -> GeneratedSmartComponent<RelevanceContext>;

    /// Fails with `UNREALISTIC_TIMEFRAME` only when no window fits the
    /// calendar.
    async fn generate_time_bound(
        &self,
        timeframe: &TimeframeInfo,
        intent: &GoalIntent,
    ) -> Result<GeneratedSmartComponent<TimeConstraint>, GoalError>;
}
