use std::fmt;
use std::time::Duration;

/// Detailed evaluation report returned by
/// [`ConditionSet::evaluate_detailed()`](super::condition_set::ConditionSet::evaluate_detailed).
///
/// Contains the combined result, which conditions passed, the evaluation
/// order, and the wall-clock duration of the evaluation.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    passed: bool,
    passed_conditions: Vec<String>,
    evaluation_order: Vec<String>,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(
        passed: bool,
        passed_conditions: Vec<String>,
        evaluation_order: Vec<String>,
        duration: Duration,
    ) -> Self {
        Self {
            passed,
            passed_conditions,
            evaluation_order,
            duration,
        }
    }

    /// The combined result, same as [`ConditionSet::evaluate()`](super::condition_set::ConditionSet::evaluate).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Names of conditions that passed (negation applied), in evaluation order.
    #[must_use]
    pub fn passed_conditions(&self) -> &[String] {
        &self.passed_conditions
    }

    /// All condition names in the order they were evaluated.
    #[must_use]
    pub fn evaluation_order(&self) -> &[String] {
        &self.evaluation_order
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "result: {}", self.passed)?;
        write!(f, ", passed: [{}]", self.passed_conditions.join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
