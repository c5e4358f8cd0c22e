//! SMART Goal Validator - checks a draft against the SMART criteria.
//!
//! Every check that fails deducts from a score of 100 and records an issue
//! with a suggestion naming the fix. Checks that pass are listed as
//! strengths.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Flexibility;

use super::SmartGoalDraft;

/// Score a draft needs to count as valid unless configured otherwise.
pub const DEFAULT_PASS_SCORE: u8 = 70;

const SMART_PENALTY: u32 = 10;
const TIMELINE_PENALTY: u32 = 8;
const MILESTONE_PENALTY: u32 = 5;

const MIN_SPECIFIC_CHARS: usize = 10;
const MIN_WINDOW_DAYS: i64 = 7;
const MAX_MILESTONES: usize = 10;

/// Metric names that only track completion and carry no real target.
const COMPLETION_METRICS: &[&str] = &["completion", "completion_progress"];

/// Outcome of validating a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// 0 to 100.
    pub score: u8,
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Default)]
struct Findings {
    deductions: u32,
    issues: Vec<String>,
    strengths: Vec<String>,
    suggestions: Vec<String>,
}

impl Findings {
    fn check(&mut self, passed: bool, penalty: u32, strength: &str, issue: &str, suggestion: &str) {
        if passed {
            if !strength.is_empty() {
                self.strengths.push(strength.to_string());
            }
        } else {
            self.deductions += penalty;
            self.issues.push(issue.to_string());
            self.suggestions.push(suggestion.to_string());
        }
    }
}

/// Validates drafts against a pass score.
#[derive(Debug, Clone)]
pub struct SmartGoalValidator {
    pass_score: u8,
}

impl Default for SmartGoalValidator {
    fn default() -> Self {
        Self::new(DEFAULT_PASS_SCORE)
    }
}

impl SmartGoalValidator {
    /// Creates a validator; scores above 100 are treated as 100.
    pub fn new(pass_score: u8) -> Self {
        Self {
            pass_score: pass_score.min(100),
        }
    }

    pub fn pass_score(&self) -> u8 {
        self.pass_score
    }

    /// Scores the draft and lists what to improve.
    pub fn validate(&self, draft: &SmartGoalDraft) -> ValidationReport {
        let mut findings = Findings::default();

        findings.check(
            draft.specific.content.trim().chars().count() >= MIN_SPECIFIC_CHARS,
            SMART_PENALTY,
            "Goal statement is specific",
            "Goal statement is too short to be specific",
            "Describe exactly what you will do and what the result looks like",
        );
        findings.check(
            draft.measurable.content.iter().any(|metric| {
                metric.target_value > 0.0 && !COMPLETION_METRICS.contains(&metric.name.as_str())
            }),
            SMART_PENALTY,
            "Goal has a measurable target",
            "Goal lacks a concrete measurable target",
            "Add specific numbers or percentages to make the goal measurable",
        );
        findings.check(
            !draft.achievable.content.required_resources.is_empty(),
            SMART_PENALTY,
            "Required resources are identified",
            "No resources identified",
            "List the time, tools and support you will need",
        );
        findings.check(
            !draft.relevant.content.personal_values.is_empty(),
            SMART_PENALTY,
            "Goal is connected to personal values",
            "Goal is not connected to any personal value",
            "Explain why this goal matters to you",
        );
        findings.check(
            !draft.time_bound.content.milestones.is_empty(),
            SMART_PENALTY,
            "Milestones are scheduled",
            "No milestones scheduled",
            "Add intermediate milestones to track progress",
        );

        findings.check(
            draft.time_bound.content.span_days() >= MIN_WINDOW_DAYS,
            TIMELINE_PENALTY,
            "",
            "Timeline may be too aggressive (less than a week)",
            "Allow at least a week or break the goal into smaller steps",
        );
        findings.check(
            draft.analysis.timeframe.flexibility != Flexibility::VeryFlexible,
            TIMELINE_PENALTY,
            "",
            "Timeline is too vague",
            "Commit to a specific deadline",
        );
        findings.check(
            draft.time_bound.content.milestones.len() <= MAX_MILESTONES,
            MILESTONE_PENALTY,
            "",
            "Too many milestones to track",
            "Group milestones into at most 10 checkpoints",
        );

        let score = 100u32.saturating_sub(findings.deductions) as u8;
        ValidationReport {
            score,
            is_valid: score >= self.pass_score,
            issues: findings.issues,
            strengths: findings.strengths,
            suggestions: findings.suggestions,
        }
    }
}
