//! Application handlers.
//!
//! Command handlers that orchestrate the goal engine through its ports.

mod analyze_goal;
mod generate_smart_goal;

pub use analyze_goal::{AnalyzeGoalCommand, AnalyzeGoalHandler, DEFAULT_MAX_RECOMMENDATIONS};
pub use generate_smart_goal::{GenerateSmartGoalCommand, GenerateSmartGoalHandler};
