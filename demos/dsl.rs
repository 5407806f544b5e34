use entity_field_condition::{ConditionSet, EntityContext, FieldSnapshot};

fn main() {
    let dsl = r#"
bundle node "Content"
require all

condition has_title on node:
    title all
condition not_draft on node:
    NOT moderation_state match "draft"
"#;

    let set = ConditionSet::from_dsl(dsl).expect("failed to compile conditions");
    println!("{set}");

    let ctx = EntityContext::new().with(
        "node",
        FieldSnapshot::new()
            .set("title", ["Release notes"])
            .set("moderation_state", ["published"]),
    );
    println!("visible: {}", set.evaluate(&ctx));
}
