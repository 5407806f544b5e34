use entity_field_condition::{evaluate, FieldSnapshot, FieldStatus, Rule};

#[test]
fn empty_rule_on_entity_without_field() {
    let rule = Rule::new("title", FieldStatus::Empty, "").unwrap();
    assert!(!evaluate(&rule, &FieldSnapshot::new()));
}

#[test]
fn empty_rule_on_empty_field() {
    let rule = Rule::new("title", FieldStatus::Empty, "").unwrap();
    let snapshot = FieldSnapshot::new().set_empty("title");
    assert!(evaluate(&rule, &snapshot));
}

#[test]
fn all_rule_on_filled_field() {
    let rule = Rule::new("title", FieldStatus::All, "").unwrap();
    let snapshot = FieldSnapshot::new().set("title", ["Hello"]);
    assert!(evaluate(&rule, &snapshot));
}

#[test]
fn match_rule_finds_second_value() {
    let rule = Rule::new("color", FieldStatus::Match, "red").unwrap();
    let snapshot = FieldSnapshot::new().set("color", ["blue", "red"]);
    assert!(evaluate(&rule, &snapshot));
}

#[test]
fn match_rule_without_matching_value() {
    let rule = Rule::new("color", FieldStatus::Match, "green").unwrap();
    let snapshot = FieldSnapshot::new().set("color", ["blue", "red"]);
    assert!(!evaluate(&rule, &snapshot));
}

#[test]
fn match_rule_on_empty_field() {
    let rule = Rule::new("color", FieldStatus::Match, "red").unwrap();
    let snapshot = FieldSnapshot::new().set_empty("color");
    assert!(!evaluate(&rule, &snapshot));
}

#[test]
fn rule_method_agrees_with_free_function() {
    let rule = Rule::matching("color", "red").unwrap();
    let snapshot = FieldSnapshot::new().set("color", ["red"]);
    assert_eq!(rule.evaluate(&snapshot), evaluate(&rule, &snapshot));
}
