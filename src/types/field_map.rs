use std::collections::HashMap;

/// Lookup of the field names defined on a bundle.
///
/// The host supplies this explicitly; nothing in this crate reaches into
/// global state for schema information. Any `Fn(&str) -> Vec<String>` is a
/// `FieldMap`.
pub trait FieldMap {
    /// Field names of `bundle`, in no particular order. Unknown bundles yield
    /// an empty list.
    fn field_names(&self, bundle: &str) -> Vec<String>;
}

impl<F> FieldMap for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn field_names(&self, bundle: &str) -> Vec<String> {
        self(bundle)
    }
}

/// An in-memory [`FieldMap`] filled by registration.
#[derive(Debug, Clone, Default)]
pub struct StaticFieldMap {
    bundles: HashMap<String, Vec<String>>,
}

impl StaticFieldMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `field` on `bundle`. Registering the same pair twice is a no-op.
    #[must_use]
    pub fn field(mut self, bundle: &str, field: &str) -> Self {
        self.register(bundle, field);
        self
    }

    /// Register several fields on `bundle` at once.
    #[must_use]
    pub fn fields<'a>(mut self, bundle: &str, fields: impl IntoIterator<Item = &'a str>) -> Self {
        for field in fields {
            self.register(bundle, field);
        }
        self
    }

    pub fn register(&mut self, bundle: &str, field: &str) {
        let names = self.bundles.entry(bundle.to_owned()).or_default();
        if !names.iter().any(|n| n == field) {
            names.push(field.to_owned());
        }
    }

    /// Number of bundles with at least one registered field.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

impl FieldMap for StaticFieldMap {
    fn field_names(&self, bundle: &str) -> Vec<String> {
        self.bundles.get(bundle).cloned().unwrap_or_default()
    }
}
