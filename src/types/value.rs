use std::fmt;

/// A single item of a (possibly multi-valued) entity field.
///
/// Matching compares the item's string representation, so the variant only
/// matters for how that representation is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A boolean, rendered as `1` or `0`.
    Bool(bool),
    /// A UTF-8 string, rendered verbatim.
    String(String),
}

impl FieldValue {
    /// Exact, case-sensitive comparison of this value's string representation
    /// against `expected`.
    #[must_use]
    pub fn matches_str(&self, expected: &str) -> bool {
        match self {
            FieldValue::String(s) => s == expected,
            FieldValue::Bool(true) => expected == "1",
            FieldValue::Bool(false) => expected == "0",
            other => other.to_string() == expected,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{}", u8::from(*v)),
            FieldValue::String(v) => f.write_str(v),
        }
    }
}
