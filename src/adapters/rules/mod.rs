//! Rule-based adapters backed by the in-process goal engine.

mod goal_analyzer;
mod smart_generator;

pub use goal_analyzer::RuleBasedGoalAnalyzer;
pub use smart_generator::TemplateSmartGenerator;
