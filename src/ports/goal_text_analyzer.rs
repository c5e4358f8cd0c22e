//! GoalTextAnalyzer port - structured extraction from goal text.

use async_trait::async_trait;

use crate::domain::foundation::{GoalDomain, GoalError};
use crate::domain::nlp::{ConstraintInfo, GoalIntent, MetricSuggestion, TimeframeInfo};

/// Extracts structure from a free-text goal description.
///
/// Each operation depends only on the text, so callers may run them
/// concurrently and in any order.
#[async_trait]
pub trait GoalTextAnalyzer: Send + Sync {
    /// Classifies the text into one life domain. Never fails.
    async fn classify_domain(&self, text: &str) -> GoalDomain;

    /// Extracts action, outcome, context and urgency.
    ///
    /// Fails with `INSUFFICIENT_DESCRIPTION` or `AMBIGUOUS_INTENT`.
    async fn extract_intent(&self, text: &str) -> Result<GoalIntent, GoalError>;

    /// Extracts dates, duration, milestones and flexibility.
    ///
    /// Fails with `UNREALISTIC_TIMEFRAME`.
    async fn parse_timeframes(&self, text: &str) -> Result<TimeframeInfo, GoalError>;

    /// Suggests at least one metric.
    ///
    /// Fails with `UNMEASURABLE_GOAL`.
    async fn identify_metrics(&self, text: &str) -> Result<Vec<MetricSuggestion>, GoalError>;

    /// Tags time, resource, personal and preference constraints. Never fails.
    async fn extract_constraints(&self, text: &str) -> ConstraintInfo;
}
