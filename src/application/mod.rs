//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers depend only on port traits, so any analyzer or generator
//! implementation can be plugged in.

pub mod handlers;

pub use handlers::{
    AnalyzeGoalCommand, AnalyzeGoalHandler, GenerateSmartGoalCommand, GenerateSmartGoalHandler,
    DEFAULT_MAX_RECOMMENDATIONS,
};
