use thiserror::Error;

/// Invalid rule or condition-set configuration.
///
/// Raised when a [`Rule`](super::Rule) is constructed or a
/// [`ConditionSet`](super::ConditionSet) is compiled, never during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("field name must not be empty")]
    EmptyFieldName,

    #[error("unknown field status '{status}'; expected one of: all, empty, match")]
    UnknownStatus { status: String },

    #[error("unknown requirement '{requirement}'; expected one of: all, any")]
    UnknownRequirement { requirement: String },

    #[error("no conditions defined; at least one condition is required")]
    NoConditions,

    #[error("duplicate condition name '{name}'")]
    DuplicateCondition { name: String },

    #[error("duplicate bundle '{bundle}'")]
    DuplicateBundle { bundle: String },

    #[error("undefined bundle '{bundle}' in condition '{condition}'")]
    UndefinedBundle { condition: String, bundle: String },

    #[error("condition '{condition}' has no field check")]
    MissingCheck { condition: String },

    #[error("undefined field '{field}' in condition '{condition}'")]
    UndefinedField { condition: String, field: String },
}
