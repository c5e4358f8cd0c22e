//! Ports - Interfaces between the application layer and the goal engine.
//!
//! Following hexagonal architecture, ports define the contracts the
//! application handlers depend on. Adapters implement these ports.
//!
//! - `GoalTextAnalyzer` - Structured extraction from goal text
//! - `SmartComponentGenerator` - The five SMART component generators

mod goal_text_analyzer;
mod smart_component_generator;

pub use goal_text_analyzer::GoalTextAnalyzer;
pub use smart_component_generator::SmartComponentGenerator;
