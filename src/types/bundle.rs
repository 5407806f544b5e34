use std::fmt;

/// A named entity sub-type (a content type, a vocabulary, ...).
///
/// The id selects which entity an evaluator inspects; the label is only used
/// for human-readable summaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bundle {
    id: String,
    label: String,
}

impl Bundle {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}
