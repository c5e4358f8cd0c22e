//! SMART Synthesizer - composes extracted structure into the five SMART
//! components.
//!
//! Each generator depends only on its explicit inputs and the synthesizer's
//! reference instant, so callers may run them in any order or concurrently.

use tracing::{debug, warn};

use crate::domain::foundation::{
    ConfidenceLevel, ExtractionFault, GoalDomain, GoalError, Timestamp, Urgency, UserId,
    ValidationError,
};
use crate::domain::nlp::text::{contains_any, normalize};
use crate::domain::nlp::{GoalIntent, MetricExtractor, MetricSuggestion, TimeframeInfo};

use super::component::{
    AchievabilityAssessment, DifficultyLevel, EffortEstimate, GeneratedSmartComponent,
    RelevanceContext, TimeConstraint,
};
use super::templates::{
    default_motivation, default_window_days, effort_multiplier, is_complex, template_for,
    urgency_effort_multiplier, urgency_window_factor, CONTEXT_RESOURCES, CONTEXT_VALUES,
    GENERIC_RESOURCES, GENERIC_SPECIFIC, GENERIC_VALUES,
};

const BASE_EFFORT_HOURS: f64 = 20.0;
const WORKDAY_HOURS: f64 = 8.0;
const DEFAULT_MILESTONE_FRACTIONS: [f64; 3] = [0.25, 0.5, 0.75];

/// Generates SMART components relative to a reference instant.
///
/// Without a fixed reference, default start dates and deadlines count from
/// the time of each call.
#[derive(Debug, Clone)]
pub struct SmartSynthesizer {
    reference: Option<Timestamp>,
}

impl Default for SmartSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SmartSynthesizer {
    /// Creates a synthesizer anchored at the current time.
    pub fn new() -> Self {
        Self { reference: None }
    }

    /// Creates a synthesizer with a fixed reference instant.
    pub fn with_reference(reference: Timestamp) -> Self {
        Self {
            reference: Some(reference),
        }
    }

    /// The instant a call made now is anchored at.
    pub fn reference(&self) -> Timestamp {
        self.reference.unwrap_or_else(Timestamp::now)
    }

    /// Builds the goal statement from the domain template.
    ///
    /// # Errors
    ///
    /// `VALIDATION_FAILED` when the action or the outcome is blank.
    pub fn generate_specific(
        &self,
        intent: &GoalIntent,
    ) -> Result<GeneratedSmartComponent<String>, GoalError> {
        let action = intent.action.trim();
        if action.is_empty() {
            return Err(ValidationError::empty_field("action").into());
        }
        let outcome = intent.outcome.trim();
        if outcome.is_empty() {
            return Err(ValidationError::empty_field("outcome").into());
        }

        let (pattern, mut confidence, mut reasoning) = match template_for(intent.domain) {
            Some(template) => (
                template.specific,
                ConfidenceLevel::High,
                format!("Used the {} statement template", intent.domain),
            ),
            None => (
                GENERIC_SPECIFIC,
                ConfidenceLevel::Medium,
                "Used the generic statement template".to_string(),
            ),
        };

        let mut content = pattern
            .replace("{action}", action)
            .replace("{outcome}", outcome);
        if let Some(first) = intent.context.first() {
            content.push_str(" in order to ");
            content.push_str(first);
            confidence = confidence.raised();
            reasoning.push_str(" and appended the first context phrase");
        }

        Ok(GeneratedSmartComponent::new(content, confidence, reasoning))
    }

    /// Picks metrics: explicit numbers in the text, then the domain's
    /// metric template, then completion progress.
    pub fn generate_measurable(
        &self,
        intent: &GoalIntent,
        raw_text: &str,
    ) -> GeneratedSmartComponent<Vec<MetricSuggestion>> {
        match MetricExtractor::explicit_metrics(&normalize(raw_text)) {
            Ok(metrics) if !metrics.is_empty() => {
                let reasoning = format!(
                    "Found {} explicit metric(s) in the description",
                    metrics.len()
                );
                return GeneratedSmartComponent::new(metrics, ConfidenceLevel::High, reasoning);
            }
            Ok(_) => {}
            Err(fault) => {
                warn!(error = %fault, "Explicit metric patterns failed, using templates");
            }
        }

        if let Some(template) = template_for(intent.domain) {
            let metrics = template
                .metrics
                .iter()
                .map(|metric| {
                    MetricSuggestion::new(
                        metric.name,
                        metric.unit,
                        metric.target_value,
                        ConfidenceLevel::Medium,
                        format!("Standard {} metric", intent.domain),
                    )
                })
                .collect();
            return GeneratedSmartComponent::new(
                metrics,
                ConfidenceLevel::Medium,
                format!(
                    "No explicit metrics found; used the {} metric template",
                    intent.domain
                ),
            );
        }

        let fallback = MetricSuggestion::new(
            "completion_progress",
            "percent",
            100.0,
            ConfidenceLevel::Low,
            "Track overall completion",
        );
        GeneratedSmartComponent::new(
            vec![fallback],
            ConfidenceLevel::Low,
            "No explicit metrics or domain template; tracking completion progress",
        )
    }

    /// Scores difficulty and estimates effort and resources.
    pub fn generate_achievable(
        &self,
        intent: &GoalIntent,
        timeframe: &TimeframeInfo,
    ) -> GeneratedSmartComponent<AchievabilityAssessment> {
        let urgency_term = match intent.urgency {
            Urgency::High => 2,
            Urgency::Medium => 1,
            Urgency::Low => 0,
        };
        let days_left = timeframe
            .end_date
            .map(|end| end.duration_since(&self.reference()).num_days());
        let deadline_term = match days_left {
            Some(days) if days < 30 => 2,
            Some(days) if days < 90 => 1,
            _ => 0,
        };
        let domain_term = u32::from(is_complex(intent.domain));
        let score = urgency_term + deadline_term + domain_term;
        let difficulty_level = DifficultyLevel::from_score(score);

        let template = template_for(intent.domain);
        let context = normalize(&intent.context.join(" "));
        let base_resources = template.map_or(GENERIC_RESOURCES, |t| t.resources);
        let required_resources = dedup_in_order(
            base_resources
                .iter()
                .copied()
                .chain(triggered_tags(&context, CONTEXT_RESOURCES)),
        );

        let estimated_effort = Self::estimate_effort(intent.domain, intent.urgency);

        let mut confidence = 0.5;
        if timeframe.end_date.is_some() {
            confidence += 0.2;
        }
        if timeframe.duration.is_some() {
            confidence += 0.1;
        }
        if template.is_some() {
            confidence += 0.1;
        }
        if !intent.context.is_empty() {
            confidence += 0.1;
        }

        let deadline = match days_left {
            Some(days) => format!("{} days to the deadline", days),
            None => "no deadline".to_string(),
        };
        let reasoning = format!(
            "Difficulty score {} ({}) from {} urgency, {} and the {} domain; effort is {} hours",
            score, difficulty_level, intent.urgency, deadline, intent.domain, estimated_effort.hours
        );

        GeneratedSmartComponent::new(
            AchievabilityAssessment {
                difficulty_level,
                required_resources,
                estimated_effort,
            },
            ConfidenceLevel::from_score(confidence),
            reasoning,
        )
    }

    /// Connects the goal to personal values and a motivation.
    pub fn generate_relevant(
        &self,
        intent: &GoalIntent,
        user_id: &UserId,
    ) -> GeneratedSmartComponent<RelevanceContext> {
        let context = normalize(&intent.context.join(" "));
        let base_values = template_for(intent.domain).map_or(GENERIC_VALUES, |t| t.values);
        let personal_values = dedup_in_order(
            base_values
                .iter()
                .copied()
                .chain(triggered_tags(&context, CONTEXT_VALUES)),
        );

        let (motivation, confidence, reasoning) = if intent.context.is_empty() {
            (
                default_motivation(intent.domain).to_string(),
                ConfidenceLevel::Medium,
                format!(
                    "No personal context given; used the default {} motivation",
                    intent.domain
                ),
            )
        } else {
            (
                format!("Motivated by: {}", intent.context.join(", ")),
                ConfidenceLevel::High,
                "Motivation taken from the stated context".to_string(),
            )
        };

        debug!(user_id = %user_id, values = personal_values.len(), "Generated relevance");

        GeneratedSmartComponent::new(
            RelevanceContext {
                personal_values,
                life_areas: vec![intent.domain],
                motivation,
            },
            confidence,
            reasoning,
        )
    }

    /// Fixes start, end and milestone dates.
    ///
    /// # Errors
    ///
    /// `UNREALISTIC_TIMEFRAME` when even the default window cannot be added
    /// to the start date without leaving the calendar.
    pub fn generate_time_bound(
        &self,
        timeframe: &TimeframeInfo,
        intent: &GoalIntent,
    ) -> Result<GeneratedSmartComponent<TimeConstraint>, GoalError> {
        let start_date = timeframe.start_date.unwrap_or_else(|| self.reference());
        let (end_date, end_source) = self.resolve_end(&start_date, timeframe, intent)?;

        let fractions: Vec<f64> = match timeframe.milestones.len() {
            0 => DEFAULT_MILESTONE_FRACTIONS.to_vec(),
            n => (1..=n).map(|k| k as f64 / (n + 1) as f64).collect(),
        };
        let mut milestones: Vec<Timestamp> = Vec::with_capacity(fractions.len());
        for fraction in fractions {
            let point = start_date.interpolate(&end_date, fraction);
            let floor = milestones.last().copied().unwrap_or(start_date);
            if point.is_after(&floor) && point.is_before(&end_date) {
                milestones.push(point);
            }
        }

        let mut confidence = 0.3;
        if timeframe.start_date.is_some() {
            confidence += 0.2;
        }
        if timeframe.end_date.is_some() {
            confidence += 0.3;
        }
        if timeframe.duration.is_some() {
            confidence += 0.2;
        }
        if !timeframe.milestones.is_empty() {
            confidence += 0.1;
        }
        if !timeframe.extracted_phrases.is_empty() {
            confidence += 0.1;
        }

        let reasoning = format!(
            "End date from {}; {} milestone(s) spread evenly across the window",
            end_source,
            milestones.len()
        );

        Ok(GeneratedSmartComponent::new(
            TimeConstraint {
                start_date,
                end_date,
                milestones,
            },
            ConfidenceLevel::from_score(confidence),
            reasoning,
        ))
    }

    /// Default window length in days after urgency scaling.
    pub fn default_window(domain: GoalDomain, urgency: Urgency) -> i64 {
        (f64::from(default_window_days(domain)) * urgency_window_factor(urgency)).round() as i64
    }

    /// Explicit end, then start plus the duration in days, then the
    /// default window. Ends not after the start are ignored.
    fn resolve_end(
        &self,
        start: &Timestamp,
        timeframe: &TimeframeInfo,
        intent: &GoalIntent,
    ) -> Result<(Timestamp, String), GoalError> {
        if let Some(end) = timeframe.end_date.filter(|end| end.is_after(start)) {
            return Ok((end, "the explicit end date".to_string()));
        }

        let duration_days = timeframe
            .duration
            .as_ref()
            .and_then(|duration| duration.days)
            .filter(|days| *days > 0);
        if let Some(days) = duration_days {
            if let Some(end) = start.checked_add_days(i64::from(days)) {
                return Ok((end, format!("a {}-day duration", days)));
            }
        }

        let days = Self::default_window(intent.domain, intent.urgency);
        start
            .checked_add_days(days)
            .map(|end| {
                (
                    end,
                    format!("the default {}-day {} window", days, intent.domain),
                )
            })
            .ok_or_else(|| {
                GoalError::unrealistic_timeframe(ExtractionFault::date_out_of_range(format!(
                    "{} days after {}",
                    days,
                    start.as_datetime()
                )))
            })
    }

    fn estimate_effort(domain: GoalDomain, urgency: Urgency) -> EffortEstimate {
        let raw = BASE_EFFORT_HOURS * effort_multiplier(domain) * urgency_effort_multiplier(urgency);
        let hours = (raw * 100.0).round() / 100.0;
        let days = (hours / WORKDAY_HOURS).ceil() as u32;
        EffortEstimate {
            hours,
            days,
            weeks: days.div_ceil(7),
        }
    }
}

fn triggered_tags<'a>(
    context: &'a str,
    table: &'static [(&'static [&'static str], &'static str)],
) -> impl Iterator<Item = &'static str> + 'a {
    table
        .iter()
        .filter(move |(triggers, _)| contains_any(context, triggers))
        .map(|(_, tag)| *tag)
}

fn dedup_in_order<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.iter().any(|existing| existing == item) {
            seen.push(item.to_string());
        }
    }
    seen
}
