//! Rule-based implementation of GoalTextAnalyzer.
//!
//! Wraps the keyword and regex extractors from `domain::nlp`. Nothing here
//! suspends; the async signatures only satisfy the port.
//!
//! # Usage
//!
//! ```ignore
//! use smart_goals::adapters::rules::RuleBasedGoalAnalyzer;
//!
//! let analyzer = RuleBasedGoalAnalyzer::new();
//! // Or with a fixed "now" for reproducible dates:
//! let analyzer = RuleBasedGoalAnalyzer::new().with_reference(reference);
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{GoalDomain, GoalError, Timestamp};
use crate::domain::nlp::{
    ConstraintExtractor, ConstraintInfo, DomainClassifier, GoalIntent, IntentExtractor,
    MetricExtractor, MetricSuggestion, TimeframeInfo, TimeframeParser,
};
use crate::ports::GoalTextAnalyzer;

/// Keyword and regex driven goal analyzer.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedGoalAnalyzer {
    intents: IntentExtractor,
    timeframes: TimeframeParser,
}

impl RuleBasedGoalAnalyzer {
    /// Creates an analyzer with default limits, resolving dates at call time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum trimmed description length.
    pub fn with_min_description_chars(mut self, min_chars: usize) -> Self {
        self.intents = self.intents.with_min_chars(min_chars);
        self
    }

    /// Resolves relative dates against a fixed instant.
    pub fn with_reference(mut self, reference: Timestamp) -> Self {
        self.timeframes = TimeframeParser::with_reference(reference);
        self
    }
}

#[async_trait]
impl GoalTextAnalyzer for RuleBasedGoalAnalyzer {
    async fn classify_domain(&self, text: &str) -> GoalDomain {
        DomainClassifier::classify(text)
    }

    async fn extract_intent(&self, text: &str) -> Result<GoalIntent, GoalError> {
        self.intents.extract_intent(text)
    }

    async fn parse_timeframes(&self, text: &str) -> Result<TimeframeInfo, GoalError> {
        self.timeframes.parse_timeframes(text)
    }

    async fn identify_metrics(&self, text: &str) -> Result<Vec<MetricSuggestion>, GoalError> {
        MetricExtractor::identify_metrics(text)
    }

    async fn extract_constraints(&self, text: &str) -> ConstraintInfo {
        ConstraintExtractor::extract_constraints(text)
    }
}
