use entity_field_condition::{field, ConditionSetBuilder, EntityContext, FieldSnapshot, Requirement};

fn main() {
    let set = ConditionSetBuilder::new()
        .bundle("node", "Content")
        .bundle("user", "User")
        .condition("has_image", "node", |c| c.when(field("field_image").all()))
        .condition("tagged_news", "node", |c| {
            c.when(field("field_tags").matches("news"))
        })
        .condition("is_editor", "user", |c| c.when(field("roles").matches("editor")))
        .require(Requirement::Any)
        .compile()
        .expect("failed to compile conditions");

    let ctx = EntityContext::new()
        .with(
            "node",
            FieldSnapshot::new()
                .set_empty("field_image")
                .set("field_tags", ["sports", "news"]),
        )
        .with("user", FieldSnapshot::new().set("roles", ["authenticated"]));

    let report = set.evaluate_detailed(&ctx);
    println!("{report}");
    for (name, summary) in set.summaries() {
        let passed = report.passed_conditions().iter().any(|p| p == name);
        println!("  {name} ({summary}): {passed}");
    }
}
