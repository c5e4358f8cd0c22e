//! Confidence Scorer - how much of a goal the extractors could pin down.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::GoalDomain;
use crate::domain::nlp::text::{contains_any, normalize};
use crate::domain::nlp::{
    ConstraintInfo, GoalIntent, MetricSuggestion, TimeframeInfo, DEFAULT_ACTION,
};

/// Words that make a description vague no matter what surrounds them.
pub const VAGUE_WORDS: &[&str] = &["something", "stuff", "things", "whatever"];

/// Scores above this read as high confidence.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Scores above this read as medium confidence.
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Per-stage scores in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub intent: f64,
    pub timeframe: f64,
    pub metrics: f64,
    pub constraints: f64,
}

impl ScoreBreakdown {
    /// Mean of the four stage scores.
    pub fn overall(&self) -> f64 {
        round3((self.intent + self.timeframe + self.metrics + self.constraints) / 4.0)
    }
}

/// Scoring functions for the extraction stages.
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    /// Scores every stage of an analysis.
    pub fn breakdown(
        description: &str,
        intent: &GoalIntent,
        timeframe: &TimeframeInfo,
        metrics: &[MetricSuggestion],
        constraints: &ConstraintInfo,
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            intent: Self::intent_clarity(description, intent),
            timeframe: Self::timeframe_score(timeframe),
            metrics: Self::metric_score(metrics),
            constraints: Self::constraint_score(constraints),
        }
    }

    /// How clearly the description states what is wanted.
    ///
    /// Longer descriptions, a named action, a real outcome and a specific
    /// domain all add; very short text and vague words subtract.
    pub fn intent_clarity(description: &str, intent: &GoalIntent) -> f64 {
        let words = description.split_whitespace().count();
        let mut score: f64 = 0.5;

        if words >= 5 {
            score += 0.1;
        }
        if words >= 10 {
            score += 0.1;
        }
        if intent.action != DEFAULT_ACTION {
            score += 0.1;
        }
        if intent.outcome.chars().count() > 10 {
            score += 0.1;
        }
        if intent.domain != GoalDomain::DEFAULT {
            score += 0.1;
        }
        if words < 3 {
            score -= 0.2;
        }
        if contains_any(&normalize(description), VAGUE_WORDS) {
            score -= 0.3;
        }

        round3(score.clamp(0.0, 1.0))
    }

    /// How much of the timeframe was found.
    pub fn timeframe_score(timeframe: &TimeframeInfo) -> f64 {
        let mut score: f64 = 0.3;
        if !timeframe.extracted_phrases.is_empty() {
            score += 0.2;
        }
        if timeframe.extracted_phrases.len() > 1 {
            score += 0.1;
        }
        if timeframe.start_date.is_some() {
            score += 0.2;
        }
        if timeframe.end_date.is_some() {
            score += 0.2;
        }
        round3(score.min(1.0))
    }

    /// Mean confidence of the metric suggestions.
    ///
    /// # Edge Cases
    /// - No metrics: returns 0.0
    pub fn metric_score(metrics: &[MetricSuggestion]) -> f64 {
        if metrics.is_empty() {
            return 0.0;
        }
        let total: f64 = metrics.iter().map(|m| m.confidence.score()).sum();
        round3(total / metrics.len() as f64)
    }

    /// Knowing the constraints makes a plan more grounded.
    pub fn constraint_score(constraints: &ConstraintInfo) -> f64 {
        match constraints.count() {
            0 => 0.3,
            count => round3(0.5 + (0.1 * count as f64).min(0.4)),
        }
    }

    /// Band label for an overall score.
    pub fn band(score: f64) -> &'static str {
        if score > HIGH_CONFIDENCE_THRESHOLD {
            "high"
        } else if score > MEDIUM_CONFIDENCE_THRESHOLD {
            "medium"
        } else {
            "low"
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ConfidenceLevel, Timestamp, Urgency};

    fn intent(domain: GoalDomain, action: &str, outcome: &str) -> GoalIntent {
        GoalIntent {
            domain,
            action: action.to_string(),
            outcome: outcome.to_string(),
            context: Vec::new(),
            urgency: Urgency::Low,
        }
    }

    #[test]
    fn clear_long_description_scores_full_marks() {
        let description = "I want to run a full marathon in under four hours next spring";
        let score = ConfidenceScorer::intent_clarity(
            description,
            &intent(GoalDomain::Fitness, "run", "a full marathon in under"),
        );
        assert_eq!(score, 1.0);
    }

    #[test]
    fn short_default_description_is_penalised() {
        let score = ConfidenceScorer::intent_clarity(
            "Inner peace",
            &intent(GoalDomain::Projects, DEFAULT_ACTION, "peace"),
        );
        // 0.5 base, -0.2 under three words
        assert_eq!(score, 0.3);
    }

    #[test]
    fn vague_words_cost_point_three() {
        let score = ConfidenceScorer::intent_clarity(
            "do something about stuff",
            &intent(GoalDomain::Projects, DEFAULT_ACTION, "stuff"),
        );
        // 0.5 base, -0.3 vague
        assert_eq!(score, 0.2);
    }

    #[test]
    fn clarity_is_clamped_at_zero() {
        let score = ConfidenceScorer::intent_clarity(
            "things",
            &intent(GoalDomain::Projects, DEFAULT_ACTION, "things"),
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn empty_timeframe_scores_base() {
        assert_eq!(
            ConfidenceScorer::timeframe_score(&TimeframeInfo::default()),
            0.3
        );
    }

    #[test]
    fn full_timeframe_is_capped() {
        let timeframe = TimeframeInfo {
            start_date: Some(Timestamp::now()),
            end_date: Some(Timestamp::now()),
            extracted_phrases: vec!["in 6 months".into(), "by summer".into()],
            ..TimeframeInfo::default()
        };
        assert_eq!(ConfidenceScorer::timeframe_score(&timeframe), 1.0);
    }

    #[test]
    fn metric_score_is_mean_confidence() {
        let metrics = vec![
            MetricSuggestion::new("a", "x", 1.0, ConfidenceLevel::High, ""),
            MetricSuggestion::new("b", "y", 1.0, ConfidenceLevel::Low, ""),
        ];
        assert_eq!(ConfidenceScorer::metric_score(&metrics), 0.5);
        assert_eq!(ConfidenceScorer::metric_score(&[]), 0.0);
    }

    #[test]
    fn constraint_score_grows_then_caps() {
        let mut constraints = ConstraintInfo::default();
        assert_eq!(ConfidenceScorer::constraint_score(&constraints), 0.3);

        constraints.time.push("strict deadline".into());
        assert_eq!(ConfidenceScorer::constraint_score(&constraints), 0.6);

        for tag in ["a", "b", "c", "d", "e"] {
            constraints.preference.push(tag.into());
        }
        assert_eq!(ConfidenceScorer::constraint_score(&constraints), 0.9);
    }

    #[test]
    fn overall_is_mean_of_stages() {
        let breakdown = ScoreBreakdown {
            intent: 0.8,
            timeframe: 0.5,
            metrics: 0.7,
            constraints: 0.3,
        };
        assert_eq!(breakdown.overall(), 0.575);
    }

    #[test]
    fn bands_use_strict_thresholds() {
        assert_eq!(ConfidenceScorer::band(0.71), "high");
        assert_eq!(ConfidenceScorer::band(0.7), "medium");
        assert_eq!(ConfidenceScorer::band(0.41), "medium");
        assert_eq!(ConfidenceScorer::band(0.4), "low");
    }
}
