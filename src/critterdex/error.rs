use crate::model::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DexError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database format error: {0}")]
    Codec(#[from] CodecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input closed")]
    InputClosed,
}

/// Rejected field values. Raised before anything touches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be an integer")]
    NotAnInteger(Field),

    #[error("{0} must be a positive integer")]
    NotPositive(Field),

    #[error("{0} cannot be empty")]
    Empty(Field),

    #[error("{field} cannot contain {found:?}")]
    ForbiddenCharacter { field: Field, found: char },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NotAnInteger(field)
            | ValidationError::NotPositive(field)
            | ValidationError::Empty(field) => *field,
            ValidationError::ForbiddenCharacter { field, .. } => *field,
        }
    }
}

/// Failures while parsing a database file. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("line {line}: expected 5 fields separated by '|'")]
    MalformedRow { line: usize },

    #[error("line {line}: bad {field}: {reason}")]
    InvalidField {
        line: usize,
        field: Field,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DexError>;
