use std::collections::HashMap;

use super::value::FieldValue;

/// Read-only view of one entity's fields, keyed by field name.
///
/// Each field maps to its items in order. An empty sequence is an empty
/// field; a missing key is a field the entity does not have.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSnapshot {
    fields: HashMap<String, Vec<FieldValue>>,
}

/// A host entity that can describe its own fields.
///
/// Implement this for whatever the host uses to represent a loaded entity and
/// build snapshots with [`FieldSnapshot::from_source`].
pub trait FieldSource {
    /// Names of the fields this entity has.
    fn field_names(&self) -> Vec<String>;

    /// Items of `field`, in order. Empty for an empty field.
    fn field_items(&self, field: &str) -> Vec<FieldValue>;
}

impl FieldSnapshot {
    /// Create a snapshot with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize a snapshot from a host entity.
    pub fn from_source(source: &impl FieldSource) -> Self {
        source
            .field_names()
            .into_iter()
            .map(|name| {
                let items = source.field_items(&name);
                (name, items)
            })
            .collect()
    }

    /// Set a field's items, replacing any previous ones.
    #[must_use]
    pub fn set<V: Into<FieldValue>>(
        mut self,
        field: &str,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.insert(field, values.into_iter().map(Into::into).collect());
        self
    }

    /// Declare a field that exists but holds no items.
    #[must_use]
    pub fn set_empty(mut self, field: &str) -> Self {
        self.insert(field, Vec::new());
        self
    }

    /// Set a field's items (mutable reference version).
    pub fn insert(&mut self, field: &str, values: Vec<FieldValue>) {
        self.fields.insert(field.to_owned(), values);
    }

    /// Append one item to a field, creating the field if needed.
    pub fn push(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.fields
            .entry(field.to_owned())
            .or_default()
            .push(value.into());
    }

    /// Items of a field, or `None` if the entity has no such field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[FieldValue]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields (not items).
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldValue])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl FromIterator<(String, Vec<FieldValue>)> for FieldSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, Vec<FieldValue>)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
