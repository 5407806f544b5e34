use entity_field_condition::{Bundle, ConditionEvaluator, EntityContext, FieldSnapshot, Rule};

fn main() {
    let rule = Rule::matching("field_color", "red").expect("invalid rule");
    let condition = ConditionEvaluator::new(Bundle::new("node", "Content"), rule);

    println!("{}", condition.summary());

    let article = FieldSnapshot::new()
        .set("title", ["Hello"])
        .set("field_color", ["blue", "red"]);
    let ctx = EntityContext::new().with("node", article);

    if condition.execute(&ctx) {
        println!("Condition passed.");
    } else {
        println!("Condition failed.");
    }
}
