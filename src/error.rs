use thiserror::Error;

use crate::parse::ParseError;
use crate::ConfigurationError;

/// Unified error type covering parsing, configuration, and I/O.
///
/// Returned by convenience methods like [`ConditionSet::from_dsl()`](crate::ConditionSet::from_dsl)
/// and [`ConditionSet::from_file()`](crate::ConditionSet::from_file).
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
