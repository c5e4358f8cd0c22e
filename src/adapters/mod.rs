//! Adapters - Implementations of port interfaces.
//!
//! - `rules` - Keyword, regex and template driven goal engine

pub mod rules;

pub use rules::{RuleBasedGoalAnalyzer, TemplateSmartGenerator};
