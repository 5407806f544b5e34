use super::error::ConfigurationError;
use super::snapshot::FieldSnapshot;
use super::status::FieldStatus;

/// A validated, immutable field rule.
///
/// Construction fails fast with [`ConfigurationError`]; once a `Rule` exists,
/// evaluating it cannot fail.
///
/// # Example
///
/// ```
/// use entity_field_condition::{FieldSnapshot, Rule};
///
/// let rule = Rule::matching("color", "red").unwrap();
/// let snapshot = FieldSnapshot::new().set("color", ["blue", "red"]);
/// assert!(rule.evaluate(&snapshot));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RuleConfig", into = "RuleConfig")
)]
pub struct Rule {
    field_name: String,
    status: FieldStatus,
    match_value: String,
}

impl Rule {
    /// Build a rule from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyFieldName`] if `field_name` is empty.
    pub fn new(
        field_name: impl Into<String>,
        status: FieldStatus,
        match_value: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let field_name = field_name.into();
        if field_name.is_empty() {
            return Err(ConfigurationError::EmptyFieldName);
        }
        Ok(Self {
            field_name,
            status,
            match_value: match_value.into(),
        })
    }

    /// A rule that passes when the field holds at least one value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyFieldName`] if `field_name` is empty.
    pub fn all(field_name: impl Into<String>) -> Result<Self, ConfigurationError> {
        Self::new(field_name, FieldStatus::All, String::new())
    }

    /// A rule that passes when the field exists but holds nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyFieldName`] if `field_name` is empty.
    pub fn empty(field_name: impl Into<String>) -> Result<Self, ConfigurationError> {
        Self::new(field_name, FieldStatus::Empty, String::new())
    }

    /// A rule that passes when one of the field's values equals `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyFieldName`] if `field_name` is empty.
    pub fn matching(
        field_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Self::new(field_name, FieldStatus::Match, value)
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    #[must_use]
    pub fn status(&self) -> FieldStatus {
        self.status
    }

    /// The comparison value. Only consulted for [`FieldStatus::Match`].
    #[must_use]
    pub fn match_value(&self) -> &str {
        &self.match_value
    }

    /// Evaluate this rule against a field snapshot.
    /// Same as [`evaluate`](crate::evaluate).
    #[must_use]
    pub fn evaluate(&self, snapshot: &FieldSnapshot) -> bool {
        crate::evaluate::evaluate(self, snapshot)
    }
}

/// Raw rule configuration as a host stores it: three strings, unvalidated.
///
/// Defaults to an empty field name, status `"all"` and an empty value. Convert
/// with [`Rule::try_from`] to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RuleConfig {
    pub field_name: String,
    pub field_status: String,
    pub field_value: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            field_name: String::new(),
            field_status: FieldStatus::All.as_str().to_owned(),
            field_value: String::new(),
        }
    }
}

impl TryFrom<RuleConfig> for Rule {
    type Error = ConfigurationError;

    fn try_from(config: RuleConfig) -> Result<Self, Self::Error> {
        let status = config.field_status.parse::<FieldStatus>()?;
        Rule::new(config.field_name, status, config.field_value)
    }
}

impl From<Rule> for RuleConfig {
    fn from(rule: Rule) -> Self {
        Self {
            field_name: rule.field_name,
            field_status: rule.status.as_str().to_owned(),
            field_value: rule.match_value,
        }
    }
}
