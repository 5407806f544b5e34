use std::sync::Arc;
use std::thread;

use entity_field_condition::{field, ConditionSetBuilder, EntityContext, FieldSnapshot};

fn main() {
    let set = Arc::new(
        ConditionSetBuilder::new()
            .bundle("node", "Content")
            .condition("featured", "node", |c| {
                c.when(field("field_flags").matches("featured"))
            })
            .compile()
            .expect("failed to compile conditions"),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                let mut snapshot = FieldSnapshot::new();
                snapshot.push("field_flags", "promoted");
                if i % 2 == 0 {
                    snapshot.push("field_flags", "featured");
                }
                let ctx = EntityContext::new().with("node", snapshot);
                println!("Thread {i}: {}", set.evaluate(&ctx));
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
