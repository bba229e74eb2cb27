//! Task urgency classification.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Highest urgency.
    #[serde(rename = "Very Important")]
    VeryImportant,
    /// Default urgency selected by the creation form.
    #[default]
    #[serde(rename = "Important")]
    Important,
    /// Lowest urgency.
    #[serde(rename = "Not Important")]
    NotImportant,
}

impl Priority {
    /// All priorities, most urgent first.
    pub const ALL: [Self; 3] = [Self::VeryImportant, Self::Important, Self::NotImportant];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryImportant => "Very Important",
            Self::Important => "Important",
            Self::NotImportant => "Not Important",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value
            .trim()
            .chars()
            .map(|ch| match ch {
                '-' | '_' => ' ',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        match normalized.as_str() {
            "very important" => Ok(Self::VeryImportant),
            "important" => Ok(Self::Important),
            "not important" => Ok(Self::NotImportant),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
