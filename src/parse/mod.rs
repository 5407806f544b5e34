//! Text form of a condition set.
//!
//! ```text
//! # Teaser visibility
//! bundle node "Content"
//! require any
//!
//! condition has_title on node:
//!     title all
//! condition not_red on node:
//!     NOT color match "red"
//! ```

mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::ParsedConditionSet;

/// Parse DSL text into a [`ParsedConditionSet`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid DSL syntax.
pub fn parse(input: &str) -> Result<ParsedConditionSet, ParseError> {
    use winnow::Parser;
    grammar::parse_condition_set
        .parse(input)
        .map_err(|e| ParseError::new(e.offset(), e.inner().to_string()))
}
