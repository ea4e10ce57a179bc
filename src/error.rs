//! Error types for seqlab

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqError {
    #[error("{container} index out of range: {index}")]
    IndexOutOfRange { container: &'static str, index: isize },

    #[error("value not found: {0} not in list")]
    ValueNotFound(String),

    #[error("pop from empty list")]
    PopFromEmpty,

    #[error("'tuple' object does not support item {0}")]
    ImmutableMutation(&'static str),

    #[error("unpacking count mismatch: expected {expected} values, got {found}")]
    UnpackMismatch { expected: usize, found: usize },

    #[error("'{op}' not supported between instances of '{left}' and '{right}'")]
    Incomparable {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("unsupported operand for sum: '{0}'")]
    NotNumeric(&'static str),

    #[error("{0}() arg is an empty sequence")]
    EmptySequence(&'static str),

    #[error("slice step cannot be zero")]
    ZeroStep,

    #[error("Invalid slice: {0}")]
    InvalidSlice(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown lesson: {0}. Run `seqlab lessons` to list them")]
    UnknownLesson(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SeqError {
    /// True for the failure demonstrated by writing into a tuple.
    pub fn is_immutable_mutation(&self) -> bool {
        matches!(self, SeqError::ImmutableMutation(_))
    }
}

pub type Result<T> = std::result::Result<T, SeqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immutable_mutation_message() {
        let err = SeqError::ImmutableMutation("assignment");
        assert_eq!(
            err.to_string(),
            "'tuple' object does not support item assignment"
        );
        assert!(err.is_immutable_mutation());
    }

    #[test]
    fn test_unpack_mismatch_message() {
        let err = SeqError::UnpackMismatch { expected: 2, found: 3 };
        assert!(err.to_string().contains("expected 2 values, got 3"));
        assert!(!err.is_immutable_mutation());
    }
}
