//! Error types for the domain layer.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Internal faults raised while pulling structure out of text.
///
/// These never reach callers directly; each extractor wraps them in the
/// [`GoalError`] kind that belongs to its stage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionFault {
    #[error("'{raw}' is not a usable number: {reason}")]
    InvalidNumber { raw: String, reason: String },

    #[error("'{expression}' resolves to a date outside the supported calendar range")]
    DateOutOfRange { expression: String },

    #[error("offset {offset} does not fall on a character boundary")]
    ClauseBoundary { offset: usize },
}

impl ExtractionFault {
    /// Creates an invalid number fault.
    pub fn invalid_number(raw: impl Into<String>, reason: impl fmt::Display) -> Self {
        ExtractionFault::InvalidNumber {
            raw: raw.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates an out-of-range date fault.
    pub fn date_out_of_range(expression: impl Into<String>) -> Self {
        ExtractionFault::DateOutOfRange {
            expression: expression.into(),
        }
    }
}

/// The closed set of failure kinds surfaced by the goal pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalErrorKind {
    InsufficientDescription,
    AmbiguousIntent,
    UnrealisticTimeframe,
    UnmeasurableGoal,
    ValidationFailed,
}

impl fmt::Display for GoalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GoalErrorKind::InsufficientDescription => "INSUFFICIENT_DESCRIPTION",
            GoalErrorKind::AmbiguousIntent => "AMBIGUOUS_INTENT",
            GoalErrorKind::UnrealisticTimeframe => "UNREALISTIC_TIMEFRAME",
            GoalErrorKind::UnmeasurableGoal => "UNMEASURABLE_GOAL",
            GoalErrorKind::ValidationFailed => "VALIDATION_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Error carried out of the pipeline: a kind tag, a message, actionable
/// suggestions, a recoverable flag and an optional wrapped cause.
#[derive(Debug, Clone, Serialize)]
pub struct GoalError {
    pub kind: GoalErrorKind,
    pub message: String,
    pub suggestions: Vec<String>,
    pub recoverable: bool,
    #[serde(skip)]
    pub cause: Option<Arc<dyn Error + Send + Sync>>,
}

impl GoalError {
    /// Creates a new error without suggestions or cause.
    pub fn new(kind: GoalErrorKind, message: impl Into<String>, recoverable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestions: Vec::new(),
            recoverable,
            cause: None,
        }
    }

    /// The description was missing or too short to analyze.
    pub fn insufficient_description(min_chars: usize) -> Self {
        Self::new(
            GoalErrorKind::InsufficientDescription,
            format!(
                "Goal description must contain at least {} non-whitespace characters",
                min_chars
            ),
            true,
        )
        .with_suggestion("Describe what you want to achieve in a full sentence")
        .with_suggestion("Include a measurable target, for example 'lose 10 pounds'")
        .with_suggestion("Mention a timeframe, for example 'in 3 months'")
    }

    /// Intent parsing hit an internal fault.
    pub fn ambiguous_intent(cause: ExtractionFault) -> Self {
        Self::new(
            GoalErrorKind::AmbiguousIntent,
            "Could not determine what the goal is asking for",
            true,
        )
        .with_suggestion("Start with an action, for example 'I want to learn Spanish'")
        .with_suggestion("Keep the main goal in the first sentence")
        .with_cause(cause)
    }

    /// Timeframe parsing hit an internal fault.
    pub fn unrealistic_timeframe(cause: ExtractionFault) -> Self {
        Self::new(
            GoalErrorKind::UnrealisticTimeframe,
            "The timeframe in the description could not be resolved to real dates",
            true,
        )
        .with_suggestion("Use a timeframe such as 'in 3 months' or 'by next year'")
        .with_suggestion("Keep durations within a few years")
        .with_cause(cause)
    }

    /// Metric identification hit an internal fault.
    pub fn unmeasurable_goal(cause: ExtractionFault) -> Self {
        Self::new(
            GoalErrorKind::UnmeasurableGoal,
            "No usable measurement could be read from the description",
            true,
        )
        .with_suggestion("Add a number with a unit, for example '5 miles' or '$500'")
        .with_suggestion("Describe how you will know the goal is complete")
        .with_cause(cause)
    }

    /// Synthesized content failed validation and nothing useful can be built.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(GoalErrorKind::ValidationFailed, message, false)
            .with_suggestion("Rephrase the goal so it names both an action and an outcome")
    }

    /// Appends a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Attaches the underlying cause.
    pub fn with_cause(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }
}

impl From<ValidationError> for GoalError {
    fn from(err: ValidationError) -> Self {
        let message = err.to_string();
        GoalError::validation_failed(message).with_cause(err)
    }
}

impl fmt::Display for GoalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for GoalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn Error + 'static))
    }
}
