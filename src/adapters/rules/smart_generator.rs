//! Template-based implementation of SmartComponentGenerator.

use async_trait::async_trait;

use crate::domain::foundation::{GoalError, Timestamp, UserId};
use crate::domain::nlp::{GoalIntent, MetricSuggestion, TimeframeInfo};
use crate::domain::smart::{
    AchievabilityAssessment, GeneratedSmartComponent, RelevanceContext, SmartSynthesizer,
    TimeConstraint,
};
use crate::ports::SmartComponentGenerator;

/// Generates SMART components from the domain templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateSmartGenerator {
    synthesizer: SmartSynthesizer,
}

impl TemplateSmartGenerator {
    /// Creates a generator anchored at the time of each call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchors default windows and deadlines at a fixed instant.
    pub fn with_reference(reference: Timestamp) -> Self {
        Self {
            synthesizer: SmartSynthesizer::with_reference(reference),
        }
    }
}

#[async_trait]
impl SmartComponentGenerator for TemplateSmartGenerator {
    async fn generate_specific(
        &self,
        intent: &GoalIntent,
    ) -> Result<GeneratedSmartComponent<String>, GoalError> {
        self.synthesizer.generate_specific(intent)
    }

    async fn generate_measurable(
        &self,
        intent: &GoalIntent,
        raw_text: &str,
    ) -> GeneratedSmartComponent<Vec<MetricSuggestion>> {
        self.synthesizer.generate_measurable(intent, raw_text)
    }

    async fn generate_achievable(
        &self,
        intent: &GoalIntent,
        timeframe: &TimeframeInfo,
    ) -> GeneratedSmartComponent<AchievabilityAssessment> {
        self.synthesizer.generate_achievable(intent, timeframe)
    }

    async fn generate_relevant(
        &self,
        intent: &GoalIntent,
        user_id: &UserId,
    ) -> GeneratedSmartComponent<RelevanceContext> {
        self.synthesizer.generate_relevant(intent, user_id)
    }

    async fn generate_time_bound(
        &self,
        timeframe: &TimeframeInfo,
        intent: &GoalIntent,
    ) -> Result<GeneratedSmartComponent<TimeConstraint>, GoalError> {
        self.synthesizer.generate_time_bound(timeframe, intent)
    }
}
