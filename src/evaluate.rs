use std::time::Instant;

use crate::types::CompiledCondition;
use crate::{EntityContext, EvaluationReport, FieldSnapshot, FieldStatus, Requirement, Rule};

/// Decide whether `snapshot` satisfies `rule`.
///
/// A field missing from the snapshot never passes, whatever the status.
/// `Match` compares each value's string representation exactly and stops at
/// the first hit.
#[must_use]
pub fn evaluate(rule: &Rule, snapshot: &FieldSnapshot) -> bool {
    let Some(values) = snapshot.get(rule.field_name()) else {
        return false;
    };
    let is_empty = values.is_empty();

    match rule.status() {
        FieldStatus::Empty => is_empty,
        FieldStatus::All => !is_empty,
        FieldStatus::Match => {
            !is_empty && values.iter().any(|v| v.matches_str(rule.match_value()))
        }
    }
}

pub(crate) fn evaluate_set(
    conditions: &[CompiledCondition],
    requirement: Requirement,
    ctx: &EntityContext,
) -> bool {
    let mut results = conditions.iter().map(|c| {
        let passed = c.evaluator.execute(ctx);
        tracing::trace!(condition = %c.name, passed, "evaluated condition");
        passed
    });

    match requirement {
        Requirement::All => results.all(|passed| passed),
        Requirement::Any => results.any(|passed| passed),
    }
}

pub(crate) fn evaluate_detailed(
    conditions: &[CompiledCondition],
    requirement: Requirement,
    ctx: &EntityContext,
) -> EvaluationReport {
    let start = Instant::now();

    let mut passed_conditions = Vec::new();
    let mut evaluation_order = Vec::with_capacity(conditions.len());

    for c in conditions {
        evaluation_order.push(c.name.clone());
        if c.evaluator.execute(ctx) {
            passed_conditions.push(c.name.clone());
        }
    }

    let passed = match requirement {
        Requirement::All => passed_conditions.len() == conditions.len(),
        Requirement::Any => !passed_conditions.is_empty(),
    };

    let duration = start.elapsed();
    EvaluationReport::new(passed, passed_conditions, evaluation_order, duration)
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use crate::{
        field, ConditionSetBuilder, EntityContext, FieldSnapshot, FieldValue, Requirement, Rule,
    };

    #[test]
    fn empty_on_missing_field() {
        let rule = Rule::empty("title").unwrap();
        assert!(!evaluate(&rule, &FieldSnapshot::new()));
    }

    #[test]
    fn empty_on_empty_field() {
        let rule = Rule::empty("title").unwrap();
        assert!(evaluate(&rule, &FieldSnapshot::new().set_empty("title")));
    }

    #[test]
    fn empty_on_filled_field() {
        let rule = Rule::empty("title").unwrap();
        assert!(!evaluate(&rule, &FieldSnapshot::new().set("title", ["x"])));
    }

    #[test]
    fn all_on_filled_field() {
        let rule = Rule::all("title").unwrap();
        assert!(evaluate(&rule, &FieldSnapshot::new().set("title", ["Hello"])));
        assert!(!evaluate(&rule, &FieldSnapshot::new().set_empty("title")));
        assert!(!evaluate(&rule, &FieldSnapshot::new()));
    }

    #[test]
    fn all_counts_empty_string_as_a_value() {
        let rule = Rule::all("title").unwrap();
        assert!(evaluate(&rule, &FieldSnapshot::new().set("title", [""])));
    }

    #[test]
    fn match_any_value() {
        let snap = FieldSnapshot::new().set("color", ["blue", "red"]);
        assert!(evaluate(&Rule::matching("color", "red").unwrap(), &snap));
        assert!(evaluate(&Rule::matching("color", "blue").unwrap(), &snap));
        assert!(!evaluate(&Rule::matching("color", "green").unwrap(), &snap));
    }

    #[test]
    fn match_on_empty_field() {
        let rule = Rule::matching("color", "red").unwrap();
        assert!(!evaluate(&rule, &FieldSnapshot::new().set_empty("color")));
    }

    #[test]
    fn match_empty_value_needs_an_empty_string_item() {
        let rule = Rule::matching("color", "").unwrap();
        assert!(!evaluate(&rule, &FieldSnapshot::new().set_empty("color")));
        assert!(evaluate(&rule, &FieldSnapshot::new().set("color", [""])));
    }

    #[test]
    fn match_is_case_sensitive_and_untrimmed() {
        let snap = FieldSnapshot::new().set("color", ["Red", " red "]);
        assert!(!evaluate(&Rule::matching("color", "red").unwrap(), &snap));
        assert!(evaluate(&Rule::matching("color", " red ").unwrap(), &snap));
    }

    #[test]
    fn match_uses_string_representation() {
        let snap = FieldSnapshot::new().set(
            "mixed",
            [FieldValue::Int(42), FieldValue::Bool(true), FieldValue::Float(1.5)],
        );
        assert!(evaluate(&Rule::matching("mixed", "42").unwrap(), &snap));
        assert!(evaluate(&Rule::matching("mixed", "1").unwrap(), &snap));
        assert!(evaluate(&Rule::matching("mixed", "1.5").unwrap(), &snap));
        assert!(!evaluate(&Rule::matching("mixed", "42.0").unwrap(), &snap));
    }

    #[test]
    fn other_fields_do_not_leak() {
        let snap = FieldSnapshot::new().set("body", ["red"]);
        assert!(!evaluate(&Rule::matching("color", "red").unwrap(), &snap));
        assert!(!evaluate(&Rule::all("color").unwrap(), &snap));
    }

    #[test]
    fn set_any_and_all() {
        let ctx = EntityContext::new().with(
            "node",
            FieldSnapshot::new().set("title", ["Hi"]).set_empty("image"),
        );
        let build = |req| {
            ConditionSetBuilder::new()
                .bundle("node", "Content")
                .condition("has_title", "node", |c| c.when(field("title").all()))
                .condition("has_image", "node", |c| c.when(field("image").all()))
                .require(req)
                .compile()
                .unwrap()
        };
        assert!(!build(Requirement::All).evaluate(&ctx));
        assert!(build(Requirement::Any).evaluate(&ctx));
    }

    #[test]
    fn set_negated_condition() {
        let ctx = EntityContext::new().with("node", FieldSnapshot::new().set_empty("image"));
        let set = ConditionSetBuilder::new()
            .bundle("node", "Content")
            .condition("has_image", "node", |c| c.when(field("image").all()).negate())
            .compile()
            .unwrap();
        assert!(set.evaluate(&ctx));
    }

    #[test]
    fn set_missing_entity() {
        let set = ConditionSetBuilder::new()
            .bundle("node", "Content")
            .condition("no_image", "node", |c| c.when(field("image").empty()))
            .compile()
            .unwrap();
        assert!(!set.evaluate(&EntityContext::new()));
    }

    #[test]
    fn detailed_report_lists_passed_conditions() {
        let ctx = EntityContext::new().with(
            "node",
            FieldSnapshot::new().set("title", ["Hi"]).set_empty("image"),
        );
        let set = ConditionSetBuilder::new()
            .bundle("node", "Content")
            .condition("has_title", "node", |c| c.when(field("title").all()))
            .condition("has_image", "node", |c| c.when(field("image").all()))
            .condition("no_image", "node", |c| c.when(field("image").empty()))
            .compile()
            .unwrap();

        let report = set.evaluate_detailed(&ctx);
        assert!(!report.passed());
        assert_eq!(report.passed_conditions(), &["has_title", "no_image"]);
        assert_eq!(
            report.evaluation_order(),
            &["has_title", "has_image", "no_image"]
        );
        assert_eq!(report.passed(), set.evaluate(&ctx));
    }
}
