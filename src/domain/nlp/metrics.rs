//! Metric Extractor - numeric targets with a guaranteed fallback.
//!
//! Tiers, each consulted only while the previous ones found nothing:
//! 1. currency amounts (`$1,500`)
//! 2. any number followed by a unit word (`20 pounds`, `3 times`)
//! 3. implicit targets for well-known goal phrasings
//! 4. a single completion percentage

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{ConfidenceLevel, ExtractionFault, GoalError};

use super::text::{normalize, parse_amount};

/// A suggested way of measuring progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSuggestion {
    pub name: String,
    pub unit: String,
    pub target_value: f64,
    pub confidence: ConfidenceLevel,
    pub reasoning: String,
}

impl MetricSuggestion {
    /// Creates a suggestion.
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        target_value: f64,
        confidence: ConfidenceLevel,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            target_value,
            confidence,
            reasoning: reasoning.into(),
        }
    }

    /// The last-resort completion metric.
    pub fn completion() -> Self {
        Self::new(
            "completion",
            "percent",
            100.0,
            ConfidenceLevel::Low,
            "No measurable target found; tracking completion percentage",
        )
    }
}

static CURRENCY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(\d+(?:,\d+)*(?:\.\d{1,2})?)").expect("currency regex is valid")
});

static NUMBER_WITH_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d+(?:\.\d+)?)\s*([a-z%]+)").expect("number-with-unit regex is valid")
});

/// Words that follow numbers without being units ("lose 20 in a month",
/// "by 2025 i hope").
const NOT_UNITS: &[&str] = &[
    "a", "an", "the", "in", "on", "at", "by", "for", "to", "of", "and", "or", "per", "each",
    "every", "more", "less", "i", "we", "you", "he", "she", "it", "they", "my", "our", "so",
    "if", "but", "then", "when", "is", "as",
];

/// Unit keyword prefixes mapped to a bucket name, checked in order.
const UNIT_BUCKETS: &[(&str, &[&str])] = &[
    ("percentage", &["%", "percent"]),
    ("weight", &["pound", "lb", "kg", "kilo"]),
    ("distance", &["mile", "km", "kilometer", "meter", "metre"]),
    ("money", &["dollar", "usd", "buck", "euro"]),
    ("time", &["hour", "hr", "minute", "min", "day", "week", "month", "year"]),
    (
        "count",
        &["time", "rep", "session", "book", "page", "chapter", "class", "lesson", "step"],
    ),
];

/// Bucket used for numbers whose unit is not in the table.
const UNCLASSIFIED_BUCKET: &str = "target";

/// An implicit target triggered by a common phrasing.
struct ImplicitMetric {
    matches: fn(&str) -> bool,
    name: &'static str,
    unit: &'static str,
    target_value: f64,
    reasoning: &'static str,
}

static IMPLICIT_METRICS: &[ImplicitMetric] = &[
    ImplicitMetric {
        matches: mentions_weight_loss,
        name: "weight_loss",
        unit: "pounds",
        target_value: 10.0,
        reasoning: "Weight loss goals are usually tracked in pounds lost",
    },
    ImplicitMetric {
        matches: mentions_savings,
        name: "savings",
        unit: "dollars",
        target_value: 1000.0,
        reasoning: "Savings goals are usually tracked as an amount saved",
    },
    ImplicitMetric {
        matches: mentions_reading_books,
        name: "books_read",
        unit: "books",
        target_value: 12.0,
        reasoning: "Reading goals are usually tracked as books finished",
    },
];

fn mentions_weight_loss(lower: &str) -> bool {
    lower.contains("lose weight") || lower.contains("weight loss")
}

fn mentions_savings(lower: &str) -> bool {
    lower.contains("save money") || lower.contains("savings")
}

fn mentions_reading_books(lower: &str) -> bool {
    lower.contains("read") && lower.contains("book")
}

/// Identifies measurable metrics in goal text.
pub struct MetricExtractor;

impl MetricExtractor {
    /// Returns at least one metric suggestion for the text.
    ///
    /// # Errors
    ///
    /// `UNMEASURABLE_GOAL` when an explicit number cannot be read.
    pub fn identify_metrics(text: &str) -> Result<Vec<MetricSuggestion>, GoalError> {
        let lower = normalize(text);

        let mut metrics = Self::explicit_metrics(&lower).map_err(GoalError::unmeasurable_goal)?;
        let tier = if !metrics.is_empty() {
            "explicit"
        } else {
            metrics = Self::implicit_metrics(&lower);
            if !metrics.is_empty() {
                "implicit"
            } else {
                metrics.push(MetricSuggestion::completion());
                "completion"
            }
        };

        debug!(count = metrics.len(), tier, "Identified metrics");
        Ok(metrics)
    }

    /// Tiers 1 and 2: currency amounts, then number/unit pairs that do not
    /// overlap a currency amount. `lower` must already be lower-cased.
    pub fn explicit_metrics(lower: &str) -> Result<Vec<MetricSuggestion>, ExtractionFault> {
        let mut metrics = Vec::new();
        let mut currency_spans = Vec::new();

        for caps in CURRENCY.captures_iter(lower) {
            let whole = &caps[0];
            let value = parse_amount(&caps[1])?;
            if let Some(m) = caps.get(0) {
                currency_spans.push(m.range());
            }
            if value <= 0.0 {
                continue;
            }
            metrics.push(MetricSuggestion::new(
                "money",
                "dollars",
                value,
                ConfidenceLevel::High,
                format!("Found explicit currency amount {}", whole),
            ));
        }

        for caps in NUMBER_WITH_UNIT.captures_iter(lower) {
            let (Some(number), Some(unit)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            if currency_spans
                .iter()
                .any(|span| span.contains(&number.start()))
            {
                continue;
            }
            let unit = unit.as_str();
            if NOT_UNITS.contains(&unit) {
                continue;
            }
            let value = parse_amount(number.as_str())?;
            if value <= 0.0 {
                continue;
            }
            let bucket = Self::classify_unit(unit);
            metrics.push(MetricSuggestion::new(
                bucket,
                unit,
                value,
                ConfidenceLevel::High,
                format!("Found explicit value {} {} ({})", number.as_str(), unit, bucket),
            ));
        }

        Ok(metrics)
    }

    /// Tier 3: implicit targets for common phrasings.
    fn implicit_metrics(lower: &str) -> Vec<MetricSuggestion> {
        IMPLICIT_METRICS
            .iter()
            .filter(|metric| (metric.matches)(lower))
            .map(|metric| {
                MetricSuggestion::new(
                    metric.name,
                    metric.unit,
                    metric.target_value,
                    ConfidenceLevel::Medium,
                    metric.reasoning,
                )
            })
            .collect()
    }

    /// Maps a unit word onto its bucket name.
    pub fn classify_unit(unit: &str) -> &'static str {
        UNIT_BUCKETS
            .iter()
            .find(|(_, prefixes)| prefixes.iter().any(|prefix| unit.starts_with(prefix)))
            .map(|(bucket, _)| *bucket)
            .unwrap_or(UNCLASSIFIED_BUCKET)
    }
}
