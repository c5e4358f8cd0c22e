//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the goal analysis domain.

mod confidence;
mod errors;
mod flexibility;
mod goal_domain;
mod ids;
mod timestamp;
mod urgency;

pub use confidence::ConfidenceLevel;
pub use errors::{ExtractionFault, GoalError, GoalErrorKind, ValidationError};
pub use flexibility::Flexibility;
pub use goal_domain::GoalDomain;
pub use ids::UserId;
pub use timestamp::Timestamp;
pub use urgency::Urgency;
