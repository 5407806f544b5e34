use std::fmt;

use super::bundle::Bundle;
use super::check::Check;
use super::condition::{CompiledCondition, Condition};
use super::context::EntityContext;
use super::error::ConfigurationError;
use super::evaluation_report::EvaluationReport;
use super::evaluator::ConditionEvaluator;
use super::field_map::FieldMap;
use super::status::Requirement;

/// Builder for constructing a [`ConditionSet`].
///
/// # Example
///
/// ```
/// use entity_field_condition::{field, ConditionSetBuilder, Requirement};
///
/// let set = ConditionSetBuilder::new()
///     .bundle("node", "Content")
///     .condition("has_title", "node", |c| c.when(field("title").all()))
///     .condition("red", "node", |c| c.when(field("color").matches("red")))
///     .require(Requirement::Any)
///     .compile()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConditionSetBuilder {
    bundles: Vec<Bundle>,
    conditions: Vec<Condition>,
    requirement: Requirement,
}

/// Intermediate builder passed to the condition definition closure.
#[derive(Debug)]
pub struct ConditionBuilder {
    check: Option<Check>,
    negate: bool,
}

impl ConditionSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a bundle that conditions may inspect.
    #[must_use]
    pub fn bundle(mut self, id: &str, label: &str) -> Self {
        self.bundles.push(Bundle::new(id, label));
        self
    }

    /// Define a condition on `bundle`. The closure must call `.when(check)`.
    ///
    /// If `.when()` is not called, compilation will fail with
    /// [`ConfigurationError::MissingCheck`].
    #[must_use]
    pub fn condition(
        mut self,
        name: &str,
        bundle: &str,
        f: impl FnOnce(ConditionBuilder) -> ConditionBuilder,
    ) -> Self {
        let builder = f(ConditionBuilder {
            check: None,
            negate: false,
        });
        self.conditions.push(Condition {
            name: name.to_owned(),
            bundle: bundle.to_owned(),
            check: builder.check,
            negate: builder.negate,
        });
        self
    }

    /// Set how conditions combine. Defaults to [`Requirement::All`].
    #[must_use]
    pub fn require(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Validate the definitions into an immutable `ConditionSet`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if validation fails.
    pub fn compile(self) -> Result<ConditionSet, ConfigurationError> {
        crate::compile::compile(self.bundles, &self.conditions, self.requirement, None)
    }

    /// Like [`compile()`](Self::compile), but also reject fields that `fields`
    /// does not list for the condition's bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if validation fails.
    pub fn compile_with_fields(
        self,
        fields: &impl FieldMap,
    ) -> Result<ConditionSet, ConfigurationError> {
        crate::compile::compile(
            self.bundles,
            &self.conditions,
            self.requirement,
            Some(fields as &dyn FieldMap),
        )
    }
}

impl ConditionBuilder {
    /// Set the field check for this condition.
    #[must_use]
    pub fn when(mut self, check: Check) -> Self {
        self.check = Some(check);
        self
    }

    /// Invert this condition's result.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.negate = !self.negate;
        self
    }
}

/// A compiled, immutable set of conditions. Thread-safe and designed to live
/// behind `Arc`.
#[derive(Debug)]
pub struct ConditionSet {
    pub(crate) conditions: Vec<CompiledCondition>,
    pub(crate) bundles: Vec<Bundle>,
    pub(crate) requirement: Requirement,
}

impl ConditionSet {
    /// Evaluate every condition against the entities in `ctx` and combine the
    /// results according to the set's [`Requirement`].
    #[must_use]
    pub fn evaluate(&self, ctx: &EntityContext) -> bool {
        crate::evaluate::evaluate_set(&self.conditions, self.requirement, ctx)
    }

    /// Evaluate with diagnostics.
    ///
    /// Returns an [`EvaluationReport`] with the result, which conditions
    /// passed, the evaluation order, and timing information.
    pub fn evaluate_detailed(&self, ctx: &EntityContext) -> EvaluationReport {
        crate::evaluate::evaluate_detailed(&self.conditions, self.requirement, ctx)
    }

    /// Parse DSL text and compile it into a `ConditionSet`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on parse or configuration failure.
    pub fn from_dsl(input: &str) -> Result<Self, crate::Error> {
        let parsed = crate::parse::parse(input)?;
        let set = crate::compile::compile(
            parsed.bundles,
            &parsed.conditions,
            parsed.requirement.unwrap_or_default(),
            None,
        )?;
        Ok(set)
    }

    /// Read a DSL file and compile it into a `ConditionSet`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`](crate::Error) on I/O, parse, or configuration failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::Error> {
        let input = std::fs::read_to_string(path)?;
        Self::from_dsl(&input)
    }

    #[must_use]
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    /// Condition names in definition (and evaluation) order.
    #[must_use]
    pub fn condition_names(&self) -> Vec<&str> {
        self.conditions.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a compiled condition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConditionEvaluator> {
        self.conditions
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.evaluator)
    }

    /// Declared bundles, in declaration order.
    #[must_use]
    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    /// `(name, summary)` for every condition, in definition order.
    #[must_use]
    pub fn summaries(&self) -> Vec<(&str, String)> {
        self.conditions
            .iter()
            .map(|c| (c.name.as_str(), c.evaluator.summary()))
            .collect()
    }
}

impl fmt::Display for ConditionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConditionSet({} conditions, {} bundles, require {})",
            self.conditions.len(),
            self.bundles.len(),
            self.requirement,
        )
    }
}
