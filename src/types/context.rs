use std::collections::HashMap;

use super::snapshot::FieldSnapshot;

/// The entities available to a [`ConditionSet`](super::ConditionSet) at
/// evaluation time, keyed by bundle id.
///
/// A condition whose bundle has no entry here sees no entity and does not pass.
#[derive(Debug, Clone, Default)]
pub struct EntityContext {
    entities: HashMap<String, FieldSnapshot>,
}

impl EntityContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the entity snapshot for a bundle, replacing any previous one.
    #[must_use]
    pub fn with(mut self, bundle: &str, snapshot: FieldSnapshot) -> Self {
        self.insert(bundle, snapshot);
        self
    }

    pub fn insert(&mut self, bundle: &str, snapshot: FieldSnapshot) {
        self.entities.insert(bundle.to_owned(), snapshot);
    }

    #[must_use]
    pub fn get(&self, bundle: &str) -> Option<&FieldSnapshot> {
        self.entities.get(bundle)
    }
}
