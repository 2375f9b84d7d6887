use thiserror::Error;

/// Errors that abort construction of a [`TurtleReader`](crate::TurtleReader).
///
/// A statement that simply has no complete predicate/object pair is not an
/// error; it contributes no triples.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed @prefix statement: {statement:?}")]
    Format { statement: String },

    #[error("prefix {label:?} is already registered")]
    DuplicatePrefix { label: String },

    #[error("input ends without a final '.': {statement:?}")]
    UnterminatedStatement { statement: String },

    #[error("cannot build prefix pattern: {0}")]
    Pattern(#[from] regex::Error),
}
