//! Goal Analysis - the combined output of every extraction stage.

use serde::Serialize;

use crate::domain::foundation::{GoalDomain, GoalErrorKind};
use crate::domain::nlp::{ConstraintInfo, GoalIntent, MetricSuggestion, TimeframeInfo};

use super::scoring::{ConfidenceScorer, ScoreBreakdown};

/// Everything the pipeline learned about one goal description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalAnalysis {
    pub description: String,
    pub domain: GoalDomain,
    pub intent: GoalIntent,
    pub timeframe: TimeframeInfo,
    pub metrics: Vec<MetricSuggestion>,
    pub constraints: ConstraintInfo,
    pub intent_clarity: f64,
    pub overall_confidence: f64,
    pub summary: String,
    pub recommendations: Vec<String>,
    /// Stages that failed and were replaced by their fallback.
    pub degraded: Vec<GoalErrorKind>,
}

/// Extraction results gathered by the caller.
#[derive(Debug, Clone)]
pub struct AnalysisParts {
    pub description: String,
    pub domain: GoalDomain,
    pub intent: GoalIntent,
    pub timeframe: TimeframeInfo,
    pub metrics: Vec<MetricSuggestion>,
    pub constraints: ConstraintInfo,
    pub degraded: Vec<GoalErrorKind>,
}

const RECOMMENDATION_THRESHOLD: f64 = 0.6;

impl GoalAnalysis {
    /// Scores the parts and writes the summary and recommendations.
    ///
    /// At most `max_recommendations` recommendations are kept.
    pub fn assemble(parts: AnalysisParts, max_recommendations: usize) -> Self {
        let scores = ConfidenceScorer::breakdown(
            &parts.description,
            &parts.intent,
            &parts.timeframe,
            &parts.metrics,
            &parts.constraints,
        );
        let overall_confidence = scores.overall();
        let summary = Self::summarize(&parts, overall_confidence);
        let mut recommendations = Self::recommend(&parts, &scores);
        recommendations.truncate(max_recommendations);

        Self {
            description: parts.description,
            domain: parts.domain,
            intent: parts.intent,
            timeframe: parts.timeframe,
            metrics: parts.metrics,
            constraints: parts.constraints,
            intent_clarity: scores.intent,
            overall_confidence,
            summary,
            recommendations,
            degraded: parts.degraded,
        }
    }

    /// True when a stage fell back after an error.
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }

    fn summarize(parts: &AnalysisParts, overall_confidence: f64) -> String {
        let mut sentences = vec![format!(
            "This is a {} goal to {} {}.",
            parts.domain,
            parts.intent.action,
            parts.intent.outcome
        )];

        if let Some(end) = parts.timeframe.end_date {
            sentences.push(format!(
                "Target completion: {}.",
                end.as_datetime().format("%Y-%m-%d")
            ));
        } else if let Some(duration) = &parts.timeframe.duration {
            match duration.days {
                Some(days) => sentences.push(format!("Planned duration: {} days.", days)),
                None => sentences.push(format!("Planned duration: {} hours.", duration.hours)),
            }
        }

        sentences.push(format!(
            "{} measurable metric(s) identified.",
            parts.metrics.len()
        ));
        sentences.push(format!(
            "Overall confidence: {}.",
            ConfidenceScorer::band(overall_confidence)
        ));
        sentences.join(" ")
    }

    fn recommend(parts: &AnalysisParts, scores: &ScoreBreakdown) -> Vec<String> {
        let mut recommendations = Vec::new();

        if scores.intent < RECOMMENDATION_THRESHOLD {
            recommendations.push(
                "Describe the goal more precisely: name the action and the result you want"
                    .to_string(),
            );
        }
        if scores.timeframe < RECOMMENDATION_THRESHOLD {
            recommendations
                .push("Add a timeframe, for example 'in 3 months' or 'by next year'".to_string());
        }
        if scores.metrics < RECOMMENDATION_THRESHOLD {
            recommendations
                .push("Add a measurable target such as a number with a unit".to_string());
        }
        if parts.constraints.is_empty() {
            recommendations.push(
                "Mention constraints such as available time, budget or experience level"
                    .to_string(),
            );
        }
        if let Some(hint) = domain_hint(parts.domain) {
            recommendations.push(hint.to_string());
        }

        recommendations
    }
}

fn domain_hint(domain: GoalDomain) -> Option<&'static str> {
    match domain {
        GoalDomain::Fitness => {
            Some("Start with a manageable routine and increase intensity gradually")
        }
        GoalDomain::Learning => Some("Break the subject into small lessons and practice regularly"),
        GoalDomain::Career => Some("Identify the skills and people that can help you advance"),
        _ => None,
    }
}
