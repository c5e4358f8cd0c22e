//! Analysis Module - scoring, summarizing and validating goals.
//!
//! # Components
//!
//! - `ConfidenceScorer` - per-stage confidence scores and their mean
//! - `GoalAnalysis` - the combined extraction result with summary and advice
//! - `SmartGoalDraft` - an analysis plus its five SMART components
//! - `SmartGoalValidator` - SMART, timeline and milestone checks on a draft
//!
//! All functions are pure. Nothing here performs I/O.

mod draft;
mod goal_analysis;
mod scoring;
mod validator;

pub use draft::SmartGoalDraft;
pub use goal_analysis::{AnalysisParts, GoalAnalysis};
pub use scoring::{
    ConfidenceScorer, ScoreBreakdown, HIGH_CONFIDENCE_THRESHOLD, MEDIUM_CONFIDENCE_THRESHOLD,
    VAGUE_WORDS,
};
pub use validator::{SmartGoalValidator, ValidationReport, DEFAULT_PASS_SCORE};
