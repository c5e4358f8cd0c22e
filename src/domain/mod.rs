//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `nlp` - Keyword and regex extractors over goal text
//! - `smart` - Template-driven synthesis of the five SMART components
//! - `analysis` - Scoring, analysis assembly and draft validation

pub mod analysis;
pub mod foundation;
pub mod nlp;
pub mod smart;
