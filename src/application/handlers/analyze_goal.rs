//! AnalyzeGoalHandler - Command handler for structured goal analysis.

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use crate::domain::analysis::{AnalysisParts, GoalAnalysis};
use crate::domain::foundation::GoalError;
use crate::domain::nlp::{MetricSuggestion, TimeframeInfo};
use crate::ports::GoalTextAnalyzer;

/// Default cap on the number of recommendations attached to an analysis.
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 5;

/// Command to analyze a free-text goal.
#[derive(Debug, Clone)]
pub struct AnalyzeGoalCommand {
    pub description: String,
}

/// Handler for analyzing goals.
///
/// Runs the classifier and the four extractors concurrently. Intent errors
/// propagate; timeframe and metric faults degrade to usable defaults and are
/// recorded on the analysis.
pub struct AnalyzeGoalHandler {
    analyzer: Arc<dyn GoalTextAnalyzer>,
    max_recommendations: usize,
}

impl AnalyzeGoalHandler {
    pub fn new(analyzer: Arc<dyn GoalTextAnalyzer>) -> Self {
        Self {
            analyzer,
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }

    pub fn with_max_recommendations(mut self, max_recommendations: usize) -> Self {
        self.max_recommendations = max_recommendations;
        self
    }

    pub async fn handle(&self, cmd: AnalyzeGoalCommand) -> Result<GoalAnalysis, GoalError> {
        let span = info_span!("analyze_goal", chars = cmd.description.len());
        self.run(cmd).instrument(span).await
    }

    async fn run(&self, cmd: AnalyzeGoalCommand) -> Result<GoalAnalysis, GoalError> {
        let text = cmd.description.as_str();

        let (domain, intent, timeframe, metrics, constraints) = futures::join!(
            self.analyzer.classify_domain(text),
            self.analyzer.extract_intent(text),
            self.analyzer.parse_timeframes(text),
            self.analyzer.identify_metrics(text),
            self.analyzer.extract_constraints(text),
        );

        let intent = intent?;
        let mut degraded = Vec::new();

        let timeframe = timeframe.unwrap_or_else(|err| {
            warn!(kind = %err.kind, error = %err, "Timeframe degraded to defaults");
            degraded.push(err.kind);
            TimeframeInfo::default()
        });

        let metrics = metrics.unwrap_or_else(|err| {
            warn!(kind = %err.kind, error = %err, "Metrics degraded to completion fallback");
            degraded.push(err.kind);
            vec![MetricSuggestion::completion()]
        });

        let analysis = GoalAnalysis::assemble(
            AnalysisParts {
                description: cmd.description,
                domain,
                intent,
                timeframe,
                metrics,
                constraints,
                degraded,
            },
            self.max_recommendations,
        );

        info!(
            domain = %analysis.domain,
            overall_confidence = analysis.overall_confidence,
            degraded = analysis.is_degraded(),
            "Goal analysis complete"
        );

        Ok(analysis)
    }
}
