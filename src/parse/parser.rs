use crate::{Bundle, Condition, Requirement};

/// The result of parsing DSL text, before validation.
#[derive(Debug)]
pub struct ParsedConditionSet {
    pub bundles: Vec<Bundle>,
    pub requirement: Option<Requirement>,
    pub conditions: Vec<Condition>,
}
