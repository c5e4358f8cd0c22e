//! Timeframe Parser - dates, durations, milestones and flexibility.
//!
//! Date and duration extraction are ordered fallback chains: each rule is
//! tried top to bottom and the first match wins. The only exception is the
//! "in N units" expression, which overrides any relative keyword.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{ExtractionFault, Flexibility, GoalError, Timestamp};

use super::text::{contains_any, normalize, parse_count};

/// A span of time read from the text.
///
/// `days` and `weeks` are absent when the text only gave an hourly rate
/// ("2 hours daily"); treat them as not applicable rather than zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDuration {
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks: Option<u32>,
}

impl GoalDuration {
    /// A total span of whole days.
    pub fn from_days(days: u32) -> Option<Self> {
        let hours = days.checked_mul(24)?;
        Some(Self {
            hours: f64::from(hours),
            days: Some(days),
            weeks: Some(days.div_ceil(7)),
        })
    }

    /// An hours-only record.
    pub fn hours_only(hours: f64) -> Self {
        Self {
            hours,
            days: None,
            weeks: None,
        }
    }
}

/// Everything the parser could find about when the goal happens.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeframeInfo {
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub duration: Option<GoalDuration>,
    pub milestones: Vec<String>,
    pub flexibility: Flexibility,
    pub extracted_phrases: Vec<String>,
}

/// A relative keyword and how to resolve it against "now".
struct RelativeDate {
    phrase: &'static str,
    resolve: fn(&Timestamp) -> Option<Timestamp>,
}

fn one_week_out(now: &Timestamp) -> Option<Timestamp> {
    now.checked_add_days(7)
}

fn one_month_out(now: &Timestamp) -> Option<Timestamp> {
    now.checked_add_months(1)
}

fn end_of_next_year(now: &Timestamp) -> Option<Timestamp> {
    now.on_calendar_day(1, 12, 31)
}

fn end_of_this_year(now: &Timestamp) -> Option<Timestamp> {
    now.on_calendar_day(0, 12, 31)
}

fn start_of_summer(now: &Timestamp) -> Option<Timestamp> {
    now.on_calendar_day(0, 6, 21)
}

/// Relative keywords in priority order.
static RELATIVE_DATES: &[RelativeDate] = &[
    RelativeDate {
        phrase: "next week",
        resolve: one_week_out,
    },
    RelativeDate {
        phrase: "next month",
        resolve: one_month_out,
    },
    RelativeDate {
        phrase: "next year",
        resolve: end_of_next_year,
    },
    RelativeDate {
        phrase: "this year",
        resolve: end_of_this_year,
    },
    RelativeDate {
        phrase: "by summer",
        resolve: start_of_summer,
    },
];

static IN_N_UNITS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bin\s+(\d+)\s+(day|week|month|year)s?\b").expect("in-units regex is valid")
});

static FOR_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bfor\s+(\d+)\s+(week|month|day)s?\b").expect("for-duration regex is valid")
});

static DAILY_RATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:spending\s+)?(\d+)\s+(hour|minute)s?\s+(?:daily|a day|per day|each day)\b")
        .expect("daily-rate regex is valid")
});

static GENERIC_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d+)\s+(hour|day|week)s?\b").expect("generic-duration regex is valid")
});

static MILESTONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bfirst\s+(.+?)(?:\s+then\b|\s+and\b|,|$)",
        r"\bthen\s+(.+?)(?:\s+and\b|,|$)",
        r"\bstep\s+\d+\s*:\s*(.+?)(?:,|;|\.|$)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("milestone regex is valid"))
    .collect()
});

static TIME_EXPRESSIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bby\s+\w+(?:\s+\d+)?",
        r"\bin\s+\d+\s+\w+",
        r"\bwithin\s+\d+\s+\w+",
        r"\bover\s+the\s+next\s+(?:\d+\s+)?\w+",
        r"\bnext\s+\w+",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("time expression regex is valid"))
    .collect()
});

const FIXED_CUES: &[&str] = &["exactly", "must", "deadline", "fixed", "strict"];
const VERY_FLEXIBLE_CUES: &[&str] = &["whenever", "eventually", "someday", "no rush"];
const FLEXIBLE_CUES: &[&str] = &["around", "approximately", "roughly", "flexible", "about"];

/// Parses timeframe information relative to a reference instant.
///
/// Without a fixed reference, every call resolves against the time of
/// that call.
#[derive(Debug, Clone)]
pub struct TimeframeParser {
    reference: Option<Timestamp>,
}

impl Default for TimeframeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeframeParser {
    /// Creates a parser that resolves relative dates against the current time.
    pub fn new() -> Self {
        Self { reference: None }
    }

    /// Creates a parser with a fixed reference instant.
    pub fn with_reference(reference: Timestamp) -> Self {
        Self {
            reference: Some(reference),
        }
    }

    /// The instant relative dates resolve against for a call made now.
    pub fn reference(&self) -> Timestamp {
        self.reference.unwrap_or_else(Timestamp::now)
    }

    /// Parses every timeframe signal in the text.
    ///
    /// # Errors
    ///
    /// `UNREALISTIC_TIMEFRAME` when a number does not fit or a date falls
    /// outside the calendar.
    pub fn parse_timeframes(&self, text: &str) -> Result<TimeframeInfo, GoalError> {
        let info = self.parse(text).map_err(GoalError::unrealistic_timeframe)?;
        debug!(
            has_end_date = info.end_date.is_some(),
            has_duration = info.duration.is_some(),
            milestones = info.milestones.len(),
            flexibility = %info.flexibility,
            "Parsed timeframe"
        );
        Ok(info)
    }

    fn parse(&self, text: &str) -> Result<TimeframeInfo, ExtractionFault> {
        let lower = normalize(text);
        let now = self.reference();

        let end_date = Self::resolve_end_date(&now, &lower)?;
        let start_date = end_date.map(|_| now);

        Ok(TimeframeInfo {
            start_date,
            end_date,
            duration: Self::extract_duration(&lower)?,
            milestones: Self::extract_milestones(&lower),
            flexibility: Self::determine_flexibility(&lower),
            extracted_phrases: Self::extract_phrases(&lower),
        })
    }

    fn resolve_end_date(now: &Timestamp, lower: &str) -> Result<Option<Timestamp>, ExtractionFault> {
        if let Some(caps) = IN_N_UNITS.captures(lower) {
            return Self::resolve_offset(now, &caps).map(Some);
        }

        match RELATIVE_DATES.iter().find(|rule| lower.contains(rule.phrase)) {
            Some(rule) => (rule.resolve)(now)
                .map(Some)
                .ok_or_else(|| ExtractionFault::date_out_of_range(rule.phrase)),
            None => Ok(None),
        }
    }

    fn resolve_offset(now: &Timestamp, caps: &Captures<'_>) -> Result<Timestamp, ExtractionFault> {
        let expression = &caps[0];
        let count = parse_count(&caps[1])?;
        let resolved = match &caps[2] {
            "day" => now.checked_add_days(i64::from(count)),
            "week" => now.checked_add_days(i64::from(count) * 7),
            "month" => now.checked_add_months(count),
            _ => count
                .checked_mul(12)
                .and_then(|months| now.checked_add_months(months)),
        };
        resolved.ok_or_else(|| ExtractionFault::date_out_of_range(expression))
    }

    fn extract_duration(lower: &str) -> Result<Option<GoalDuration>, ExtractionFault> {
        let rules: [(&Regex, DurationBuilder); 3] = [
            (&*FOR_DURATION, total_duration as DurationBuilder),
            (&*DAILY_RATE, daily_rate as DurationBuilder),
            (&*GENERIC_DURATION, generic_duration as DurationBuilder),
        ];

        for (pattern, build) in rules {
            if let Some(caps) = pattern.captures(lower) {
                let count = parse_count(&caps[1])?;
                return build(count, &caps[2])
                    .map(Some)
                    .ok_or_else(|| ExtractionFault::date_out_of_range(&caps[0]));
            }
        }
        Ok(None)
    }

    fn extract_milestones(lower: &str) -> Vec<String> {
        let mut found: Vec<(usize, String)> = MILESTONE_PATTERNS
            .iter()
            .flat_map(|pattern| pattern.captures_iter(lower))
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let phrase = caps
                    .get(1)?
                    .as_str()
                    .trim()
                    .trim_end_matches([',', '.'])
                    .trim_end()
                    .to_string();
                (!phrase.is_empty()).then_some((whole.start(), phrase))
            })
            .collect();
        found.sort_by_key(|(start, _)| *start);
        found.into_iter().map(|(_, phrase)| phrase).collect()
    }

    fn determine_flexibility(lower: &str) -> Flexibility {
        if contains_any(lower, FIXED_CUES) {
            Flexibility::Fixed
        } else if contains_any(lower, VERY_FLEXIBLE_CUES) {
            Flexibility::VeryFlexible
        } else if contains_any(lower, FLEXIBLE_CUES) {
            Flexibility::Flexible
        } else {
            Flexibility::default()
        }
    }

    fn extract_phrases(lower: &str) -> Vec<String> {
        TIME_EXPRESSIONS
            .iter()
            .flat_map(|pattern| pattern.find_iter(lower))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Builds a duration from a matched count and unit.
type DurationBuilder = fn(u32, &str) -> Option<GoalDuration>;

/// "for N weeks": a total span.
fn total_duration(count: u32, unit: &str) -> Option<GoalDuration> {
    let days = match unit {
        "week" => count.checked_mul(7)?,
        "month" => count.checked_mul(30)?,
        _ => count,
    };
    GoalDuration::from_days(days)
}

/// "2 hours daily": a per-day rate, hours only.
fn daily_rate(count: u32, unit: &str) -> Option<GoalDuration> {
    let hours = match unit {
        "minute" => f64::from(count) / 60.0,
        _ => f64::from(count),
    };
    Some(GoalDuration::hours_only(hours))
}

/// Bare "N hours/days/weeks".
fn generic_duration(count: u32, unit: &str) -> Option<GoalDuration> {
    match unit {
        "hour" => Some(GoalDuration::hours_only(f64::from(count))),
        "week" => GoalDuration::from_days(count.checked_mul(7)?),
        _ => GoalDuration::from_days(count),
    }
}
