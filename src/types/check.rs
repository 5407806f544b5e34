use std::fmt;

use super::status::FieldStatus;

/// An unvalidated field check, as written in a builder closure or the DSL.
///
/// Turned into a [`Rule`](super::Rule) when the owning
/// [`ConditionSet`](super::ConditionSet) is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub field_name: String,
    pub status: FieldStatus,
    pub match_value: String,
}

/// Intermediate builder for a [`Check`]. Created by [`field()`].
#[derive(Debug, Clone)]
pub struct FieldCheck {
    name: String,
}

impl FieldCheck {
    /// The field holds at least one value.
    #[must_use]
    pub fn all(self) -> Check {
        self.check(FieldStatus::All, String::new())
    }

    /// The field exists and holds no value.
    #[must_use]
    pub fn empty(self) -> Check {
        self.check(FieldStatus::Empty, String::new())
    }

    /// One of the field's values equals `value`.
    #[must_use]
    pub fn matches(self, value: impl Into<String>) -> Check {
        self.check(FieldStatus::Match, value.into())
    }

    fn check(self, status: FieldStatus, match_value: String) -> Check {
        Check {
            field_name: self.name,
            status,
            match_value,
        }
    }
}

#[must_use]
pub fn field(name: &str) -> FieldCheck {
    FieldCheck {
        name: name.to_owned(),
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            FieldStatus::Match => write!(f, "{} match {:?}", self.field_name, self.match_value),
            status => write!(f, "{} {status}", self.field_name),
        }
    }
}
