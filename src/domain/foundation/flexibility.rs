//! Flexibility of a goal's timeframe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How rigid the stated timeframe is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Flexibility {
    Fixed,
    #[default]
    Flexible,
    VeryFlexible,
}

impl Flexibility {
    /// Returns the serialized literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flexibility::Fixed => "fixed",
            Flexibility::Flexible => "flexible",
            Flexibility::VeryFlexible => "very_flexible",
        }
    }
}

impl fmt::Display for Flexibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
