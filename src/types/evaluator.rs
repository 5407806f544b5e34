use super::bundle::Bundle;
use super::context::EntityContext;
use super::field_map::FieldMap;
use super::rule::Rule;
use super::snapshot::FieldSnapshot;

/// A [`Rule`] bound to one bundle, optionally negated.
///
/// One evaluator is built per bundle it should inspect; it holds nothing but
/// its configuration and never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionEvaluator {
    bundle: Bundle,
    rule: Rule,
    negate: bool,
}

impl ConditionEvaluator {
    pub fn new(bundle: Bundle, rule: Rule) -> Self {
        Self {
            bundle,
            rule,
            negate: false,
        }
    }

    /// Return a copy with the negation flag flipped.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    #[must_use]
    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negate
    }

    /// Evaluate the rule against an entity snapshot. Negation is not applied.
    #[must_use]
    pub fn evaluate(&self, snapshot: &FieldSnapshot) -> bool {
        crate::evaluate::evaluate(&self.rule, snapshot)
    }

    /// Evaluate against whichever entity of this evaluator's bundle `ctx`
    /// provides, then apply negation. A missing entity evaluates to `false`.
    #[must_use]
    pub fn execute(&self, ctx: &EntityContext) -> bool {
        let result = match ctx.get(self.bundle.id()) {
            Some(snapshot) => self.evaluate(snapshot),
            None => {
                tracing::trace!(bundle = self.bundle.id(), "no entity for bundle");
                false
            }
        };
        result != self.negate
    }

    /// Human-readable label, derived from the bundle label only.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} field", self.bundle.label())
    }

    /// Field names selectable for this evaluator's bundle, sorted and
    /// de-duplicated.
    pub fn field_options(&self, fields: &impl FieldMap) -> Vec<String> {
        let mut names = fields.field_names(self.bundle.id());
        names.sort_unstable();
        names.dedup();
        names
    }
}
