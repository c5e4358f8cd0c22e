//! Constraint Extractor - time, resource, personal and preference tags.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::text::{contains_any, normalize};

/// Tags describing what limits or shapes the pursuit of a goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintInfo {
    pub time: Vec<String>,
    pub resource: Vec<String>,
    pub personal: Vec<String>,
    pub preference: Vec<String>,
}

impl ConstraintInfo {
    /// Total number of tags across all categories.
    pub fn count(&self) -> usize {
        self.time.len() + self.resource.len() + self.personal.len() + self.preference.len()
    }

    /// True when no category holds a tag.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

type TagTable = &'static [(&'static [&'static str], &'static str)];

const TIME_TAGS: TagTable = &[
    (&["deadline", "must be done by"], "strict deadline"),
    (&["busy", "limited time", "no time"], "limited availability"),
    (&["weekend"], "weekend availability"),
];

const RESOURCE_TAGS: TagTable = &[
    (&["budget", "cheap", "free", "afford"], "budget limitations"),
    (&["no equipment", "at home", "without equipment"], "limited equipment"),
    (&["alone", "by myself", "on my own"], "no external support"),
];

const PERSONAL_TAGS: TagTable = &[
    (&["beginner", "new to"], "beginner level"),
    (&["injury", "injured", "bad knee", "back pain"], "physical limitations"),
    (&["anxious", "anxiety", "nervous", "afraid"], "emotional barriers"),
    (&["lazy", "procrastinat", "motivation"], "motivation challenges"),
    (&["kids", "children", "family"], "family commitments"),
];

const PREFERENCE_TAGS: TagTable = &[
    (&["morning"], "morning schedule"),
    (&["evening", "night"], "evening schedule"),
    (&["outdoor", "outside"], "outdoor activities"),
    (&["group", "with friends", "team"], "group activities"),
    (&["online"], "digital tools"),
];

/// Keyword driven constraint tagging. Never fails.
pub struct ConstraintExtractor;

impl ConstraintExtractor {
    /// Extracts constraint tags; every category is present, possibly empty.
    pub fn extract_constraints(text: &str) -> ConstraintInfo {
        let lower = normalize(text);
        let info = ConstraintInfo {
            time: tags_for(&lower, TIME_TAGS),
            resource: tags_for(&lower, RESOURCE_TAGS),
            personal: tags_for(&lower, PERSONAL_TAGS),
            preference: tags_for(&lower, PREFERENCE_TAGS),
        };
        debug!(count = info.count(), "Extracted constraints");
        info
    }
}

fn tags_for(lower: &str, table: TagTable) -> Vec<String> {
    table
        .iter()
        .filter(|(triggers, _)| contains_any(lower, triggers))
        .map(|(_, tag)| (*tag).to_string())
        .collect()
}
