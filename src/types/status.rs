use std::fmt;
use std::str::FromStr;

use super::error::ConfigurationError;

/// What a rule checks about its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FieldStatus {
    /// The field exists and holds at least one value.
    All,
    /// The field exists and holds no value.
    Empty,
    /// The field exists and one of its values equals the match value.
    Match,
}

/// How a [`ConditionSet`](super::ConditionSet) combines its conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Requirement {
    /// Every condition must pass.
    #[default]
    All,
    /// At least one condition must pass.
    Any,
}

impl FieldStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldStatus::All => "all",
            FieldStatus::Empty => "empty",
            FieldStatus::Match => "match",
        }
    }
}

impl Requirement {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Requirement::All => "all",
            Requirement::Any => "any",
        }
    }
}

impl FromStr for FieldStatus {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FieldStatus::All),
            "empty" => Ok(FieldStatus::Empty),
            "match" => Ok(FieldStatus::Match),
            other => Err(ConfigurationError::UnknownStatus {
                status: other.to_owned(),
            }),
        }
    }
}

impl FromStr for Requirement {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Requirement::All),
            "any" => Ok(Requirement::Any),
            other => Err(ConfigurationError::UnknownRequirement {
                requirement: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
