//! GoalDomain enum naming the life area a goal belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eleven life domains a goal can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalDomain {
    Fitness,
    Nutrition,
    Finance,
    Learning,
    Health,
    Sleep,
    Habits,
    Career,
    Social,
    Projects,
    Personal,
}

impl GoalDomain {
    /// Domain used when nothing in the text points anywhere else.
    pub const DEFAULT: GoalDomain = GoalDomain::Projects;

    /// Returns all domains in classification order.
    pub fn all() -> &'static [GoalDomain] {
        &[
            GoalDomain::Fitness,
            GoalDomain::Nutrition,
            GoalDomain::Finance,
            GoalDomain::Learning,
            GoalDomain::Health,
            GoalDomain::Sleep,
            GoalDomain::Habits,
            GoalDomain::Career,
            GoalDomain::Social,
            GoalDomain::Projects,
            GoalDomain::Personal,
        ]
    }

    /// Returns the serialized literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalDomain::Fitness => "fitness",
            GoalDomain::Nutrition => "nutrition",
            GoalDomain::Finance => "finance",
            GoalDomain::Learning => "learning",
            GoalDomain::Health => "health",
            GoalDomain::Sleep => "sleep",
            GoalDomain::Habits => "habits",
            GoalDomain::Career => "career",
            GoalDomain::Social => "social",
            GoalDomain::Projects => "projects",
            GoalDomain::Personal => "personal",
        }
    }
}

impl Default for GoalDomain {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for GoalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
