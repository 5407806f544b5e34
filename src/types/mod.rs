mod bundle;
mod check;
mod condition;
mod condition_set;
mod context;
mod error;
mod evaluation_report;
mod evaluator;
mod field_map;
mod rule;
mod snapshot;
mod status;
mod value;

pub use bundle::Bundle;
pub(crate) use condition::CompiledCondition;
pub use check::{Check, FieldCheck, field};
pub use condition::Condition;
pub use condition_set::{ConditionBuilder, ConditionSet, ConditionSetBuilder};
pub use context::EntityContext;
pub use error::ConfigurationError;
pub use evaluation_report::EvaluationReport;
pub use evaluator::ConditionEvaluator;
pub use field_map::{FieldMap, StaticFieldMap};
pub use rule::{Rule, RuleConfig};
pub use snapshot::{FieldSnapshot, FieldSource};
pub use status::{FieldStatus, Requirement};
pub use value::FieldValue;
