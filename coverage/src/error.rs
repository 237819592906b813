use thiserror::Error;

use crate::types::Type;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoverageError {
    #[error("Unknown type: {0:?}")]
    InvalidType(String),

    #[error("A Pokemon must have at least one type")]
    EmptyTypeSet,

    #[error("A Pokemon has at most two types, got {0}")]
    TooManyTypes(usize),

    #[error("Type listed twice: {0}")]
    DuplicateType(Type),

    #[error("Not a type multiplier: {0}")]
    InvalidMultiplier(f32),
}
