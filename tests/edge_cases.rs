use entity_field_condition::{
    evaluate, field, Bundle, ConditionEvaluator, ConditionSetBuilder, ConfigurationError,
    EntityContext, FieldSnapshot, FieldValue, Requirement, Rule,
};

#[test]
fn single_condition_set() {
    let set = ConditionSetBuilder::new()
        .bundle("node", "Content")
        .condition("only", "node", |c| c.when(field("title").all()))
        .compile()
        .unwrap();

    let ctx = EntityContext::new().with("node", FieldSnapshot::new().set("title", ["x"]));
    assert!(set.evaluate(&ctx));
}

#[test]
fn empty_snapshot_fails_every_status() {
    let snap = FieldSnapshot::new();
    assert!(!evaluate(&Rule::all("f").unwrap(), &snap));
    assert!(!evaluate(&Rule::empty("f").unwrap(), &snap));
    assert!(!evaluate(&Rule::matching("f", "").unwrap(), &snap));
}

#[test]
fn many_values_match_last() {
    let values: Vec<String> = (0..1000).map(|i| format!("v{i}")).collect();
    let snap = FieldSnapshot::new().set("tags", values.iter().map(String::as_str));
    assert!(evaluate(&Rule::matching("tags", "v999").unwrap(), &snap));
    assert!(!evaluate(&Rule::matching("tags", "v1000").unwrap(), &snap));
}

#[test]
fn unicode_values_compare_exactly() {
    let snap = FieldSnapshot::new().set("name", ["Zoë", "東京"]);
    assert!(evaluate(&Rule::matching("name", "東京").unwrap(), &snap));
    assert!(!evaluate(&Rule::matching("name", "Zoe").unwrap(), &snap));
}

#[test]
fn match_value_with_whitespace() {
    let snap = FieldSnapshot::new().set("code", ["a b", "\tc"]);
    assert!(evaluate(&Rule::matching("code", "a b").unwrap(), &snap));
    assert!(evaluate(&Rule::matching("code", "\tc").unwrap(), &snap));
    assert!(!evaluate(&Rule::matching("code", "c").unwrap(), &snap));
}

#[test]
fn match_value_ignored_for_other_statuses() {
    let snap = FieldSnapshot::new().set("title", ["Hello"]);
    let rule = Rule::new("title", entity_field_condition::FieldStatus::All, "nope").unwrap();
    assert!(evaluate(&rule, &snap));
}

#[test]
fn float_values_use_shortest_representation() {
    let snap = FieldSnapshot::new().set("price", [FieldValue::Float(3.0)]);
    assert!(evaluate(&Rule::matching("price", "3").unwrap(), &snap));
    assert!(!evaluate(&Rule::matching("price", "3.0").unwrap(), &snap));
}

#[test]
fn field_names_are_case_sensitive() {
    let snap = FieldSnapshot::new().set("Title", ["x"]);
    assert!(!evaluate(&Rule::all("title").unwrap(), &snap));
}

#[test]
fn evaluator_on_other_bundle_sees_no_entity() {
    let eval = ConditionEvaluator::new(Bundle::new("user", "User"), Rule::all("name").unwrap());
    let ctx = EntityContext::new().with("node", FieldSnapshot::new().set("name", ["x"]));
    assert!(!eval.execute(&ctx));
}

#[test]
fn conditions_on_several_bundles() {
    let set = ConditionSetBuilder::new()
        .bundle("node", "Content")
        .bundle("user", "User")
        .condition("published_by", "node", |c| c.when(field("uid").matches("7")))
        .condition("editor", "user", |c| c.when(field("roles").matches("editor")))
        .compile()
        .unwrap();

    let node = FieldSnapshot::new().set("uid", [7_i64]);
    let user = FieldSnapshot::new().set("roles", ["authenticated", "editor"]);
    let ctx = EntityContext::new().with("node", node.clone()).with("user", user);
    assert!(set.evaluate(&ctx));

    let ctx = EntityContext::new().with("node", node);
    assert!(!set.evaluate(&ctx));
}

#[test]
fn any_with_every_condition_failing() {
    let set = ConditionSetBuilder::new()
        .bundle("node", "Content")
        .condition("a", "node", |c| c.when(field("x").all()))
        .condition("b", "node", |c| c.when(field("y").all()))
        .require(Requirement::Any)
        .compile()
        .unwrap();
    assert!(!set.evaluate(&EntityContext::new()));
}

#[test]
fn double_negation_in_builder_cancels() {
    let set = ConditionSetBuilder::new()
        .bundle("node", "Content")
        .condition("c", "node", |c| c.when(field("x").all()).negate().negate())
        .compile()
        .unwrap();
    assert!(!set.get("c").unwrap().is_negated());
}

#[test]
fn first_configuration_error_is_reported() {
    let result = ConditionSetBuilder::new()
        .condition("c", "node", |c| c.when(field("").all()))
        .compile();
    assert!(matches!(
        result,
        Err(ConfigurationError::UndefinedBundle { .. })
    ));
}

#[test]
fn evaluate_detailed_without_entities() {
    let set = ConditionSetBuilder::new()
        .bundle("node", "Content")
        .condition("c", "node", |c| c.when(field("x").empty()).negate())
        .compile()
        .unwrap();
    let report = set.evaluate_detailed(&EntityContext::new());
    assert!(report.passed());
    assert_eq!(report.passed_conditions(), &["c"]);
}
