//! Entity field conditions.
//!
//! Decide whether an entity's field is filled, empty, or holds a given value.
//! The host turns a live entity into a [`FieldSnapshot`] and asks a [`Rule`]
//! (or a [`ConditionEvaluator`] bound to a bundle, or a whole
//! [`ConditionSet`]) for a verdict.
//!
//! ```
//! use entity_field_condition::{evaluate, FieldSnapshot, Rule};
//!
//! let rule = Rule::empty("title").unwrap();
//! assert!(!evaluate(&rule, &FieldSnapshot::new()));
//! assert!(evaluate(&rule, &FieldSnapshot::new().set_empty("title")));
//! ```

mod compile;
mod error;
mod evaluate;
pub mod parse;
mod types;

pub use error::Error;
pub use evaluate::evaluate;
pub use types::{
    Bundle, Check, Condition, ConditionBuilder, ConditionEvaluator, ConditionSet,
    ConditionSetBuilder, ConfigurationError, EntityContext, EvaluationReport, FieldCheck,
    FieldMap, FieldSnapshot, FieldSource, FieldStatus, FieldValue, Requirement, Rule, RuleConfig,
    StaticFieldMap, field,
};
