//! Rule based extraction of structure from free-text goal descriptions.
//!
//! Every extractor is deterministic: keyword tables and regexes only.
//! Matching happens on a lower-cased copy of the input, while the original
//! casing is kept for outcome phrases.

mod constraints;
mod domain_classifier;
mod intent;
mod metrics;
pub(crate) mod text;
mod timeframe;

pub use constraints::{ConstraintExtractor, ConstraintInfo};
pub use domain_classifier::DomainClassifier;
pub use intent::{GoalIntent, IntentExtractor, DEFAULT_ACTION, MIN_DESCRIPTION_CHARS};
pub use metrics::{MetricExtractor, MetricSuggestion};
pub use timeframe::{GoalDuration, TimeframeInfo, TimeframeParser};
