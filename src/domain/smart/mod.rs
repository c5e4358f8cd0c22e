//! SMART component synthesis.
//!
//! Turns the extracted intent, timeframe and raw text into the five SMART
//! components, each wrapped in a [`GeneratedSmartComponent`] that records its
//! confidence and the path that produced it.

mod component;
mod synthesizer;
pub mod templates;

pub use component::{
    AchievabilityAssessment, DifficultyLevel, EffortEstimate, GeneratedSmartComponent,
    RelevanceContext, TimeConstraint,
};
pub use synthesizer::SmartSynthesizer;
