//! Intent Extractor - action, outcome, context and urgency of a goal.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{ExtractionFault, GoalDomain, GoalError, Urgency};

use super::domain_classifier::DomainClassifier;
use super::text::{contains_any, find_ignore_case, normalize, strip_punctuation};

/// Minimum trimmed length of a description we will try to interpret.
pub const MIN_DESCRIPTION_CHARS: usize = 3;

/// Action used when nothing in the text names one.
pub const DEFAULT_ACTION: &str = "achieve";

/// Verbs checked in order; the first one present as a substring wins.
const ACTION_VERBS: &[&str] = &[
    "learn", "study", "master", "run", "exercise", "train", "save", "earn", "invest", "pay off",
    "build", "create", "develop", "write", "lose", "gain", "improve", "increase", "decrease",
    "reduce", "complete", "finish", "achieve", "start", "begin", "read", "practice", "quit",
    "stop", "become",
];

const OUTCOME_WORD_LIMIT: usize = 5;
const FALLBACK_OUTCOME_WORDS: usize = 3;
const OUTCOME_STOP_WORDS: &[&str] = &[
    "i", "want", "need", "to", "would", "like", "the", "a", "an", "my", "and", "for", "will",
    "really", "going",
];

const HIGH_URGENCY: &[&str] = &["urgent", "asap", "immediately", "critical", "emergency"];
const MEDIUM_URGENCY: &[&str] = &["soon", "quickly", "fast", "priority", "important"];

/// Trigger words that append a fixed context tag.
const CONTEXT_TAGS: &[(&[&str], &str)] = &[
    (&["budget"], "budget-conscious"),
    (&["busy", "time"], "time-constrained"),
    (&["beginner"], "beginner-level"),
    (&["advanced"], "advanced-level"),
];

static WANT_TO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:want|need) to (\w+)").expect("want-to regex is valid"));

static CONTEXT_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:because|so that|in order to|for)\s+(.+?)(?:[.,;!?]|$)")
        .expect("context regex is valid")
});

/// Structured reading of what the goal is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalIntent {
    pub domain: GoalDomain,
    pub action: String,
    pub outcome: String,
    pub context: Vec<String>,
    pub urgency: Urgency,
}

/// Extracts a [`GoalIntent`] from free text.
#[derive(Debug, Clone)]
pub struct IntentExtractor {
    min_description_chars: usize,
}

impl Default for IntentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentExtractor {
    /// Creates an extractor with the default minimum description length.
    pub fn new() -> Self {
        Self {
            min_description_chars: MIN_DESCRIPTION_CHARS,
        }
    }

    /// Overrides the minimum trimmed description length.
    pub fn with_min_chars(mut self, min_description_chars: usize) -> Self {
        self.min_description_chars = min_description_chars.max(1);
        self
    }

    /// Extracts the intent of a goal description.
    ///
    /// # Errors
    ///
    /// - `INSUFFICIENT_DESCRIPTION` when the trimmed text is shorter than the
    ///   configured minimum.
    /// - `AMBIGUOUS_INTENT` when parsing hits an internal fault.
    pub fn extract_intent(&self, text: &str) -> Result<GoalIntent, GoalError> {
        if text.trim().chars().count() < self.min_description_chars {
            return Err(GoalError::insufficient_description(self.min_description_chars));
        }

        let intent = Self::parse(text).map_err(GoalError::ambiguous_intent)?;
        debug!(
            domain = %intent.domain,
            action = %intent.action,
            urgency = %intent.urgency,
            context_items = intent.context.len(),
            "Extracted goal intent"
        );
        Ok(intent)
    }

    fn parse(text: &str) -> Result<GoalIntent, ExtractionFault> {
        let lower = normalize(text);
        let action = Self::extract_action(&lower);
        let outcome = Self::extract_outcome(text, &action)?;

        Ok(GoalIntent {
            domain: DomainClassifier::classify_normalized(&lower),
            outcome,
            context: Self::extract_context(text, &lower),
            urgency: Self::determine_urgency(&lower),
            action,
        })
    }

    fn extract_action(lower: &str) -> String {
        if let Some(verb) = ACTION_VERBS.iter().find(|verb| lower.contains(*verb)) {
            return (*verb).to_string();
        }
        if let Some(caps) = WANT_TO.captures(lower) {
            return caps[1].to_string();
        }
        if contains_any(lower, &["more", "better"]) {
            return "improve".to_string();
        }
        if contains_any(lower, &["new", "start"]) {
            return "start".to_string();
        }
        DEFAULT_ACTION.to_string()
    }

    /// Takes up to five words following the action token, keeping the
    /// original casing. Falls back to keyword picking when the action was
    /// inferred and does not appear verbatim.
    fn extract_outcome(text: &str, action: &str) -> Result<String, ExtractionFault> {
        if let Some((_, end)) = find_ignore_case(text, action) {
            let rest = text
                .get(end..)
                .ok_or(ExtractionFault::ClauseBoundary { offset: end })?;
            let words: Vec<&str> = rest.split_whitespace().take(OUTCOME_WORD_LIMIT).collect();
            let outcome = strip_punctuation(&words.join(" "));
            if !outcome.is_empty() {
                return Ok(outcome);
            }
        }
        Ok(Self::fallback_outcome(text))
    }

    fn fallback_outcome(text: &str) -> String {
        text.split_whitespace()
            .map(strip_punctuation)
            .filter(|word| {
                !OUTCOME_STOP_WORDS.contains(&word.to_lowercase().as_str())
                    && word.chars().count() > 3
            })
            .take(FALLBACK_OUTCOME_WORDS)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn extract_context(text: &str, lower: &str) -> Vec<String> {
        let mut context: Vec<String> = CONTEXT_CLAUSE
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|phrase| !phrase.is_empty())
            .collect();

        for (triggers, tag) in CONTEXT_TAGS {
            if contains_any(lower, triggers) {
                context.push((*tag).to_string());
            }
        }
        context
    }

    fn determine_urgency(lower: &str) -> Urgency {
        if contains_any(lower, HIGH_URGENCY) {
            Urgency::High
        } else if contains_any(lower, MEDIUM_URGENCY) {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }
}
