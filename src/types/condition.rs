use super::check::Check;
use super::evaluator::ConditionEvaluator;

/// A named condition definition: which bundle it inspects and what it checks.
///
/// Conditions are created via [`ConditionSetBuilder`](super::ConditionSetBuilder)
/// or by parsing DSL text with [`ConditionSet::from_dsl()`](super::ConditionSet::from_dsl).
/// The check is `None` until set with
/// [`ConditionBuilder::when()`](super::condition_set::ConditionBuilder::when).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub name: String,
    pub bundle: String,
    pub check: Option<Check>,
    pub negate: bool,
}

/// A condition whose check has been validated into a
/// [`Rule`](super::Rule) and whose bundle has been resolved.
#[derive(Debug, Clone)]
pub(crate) struct CompiledCondition {
    pub(crate) name: String,
    pub(crate) evaluator: ConditionEvaluator,
}
