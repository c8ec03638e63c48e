use thiserror::Error;

/// Everything that can stop a run. None of these are retried.
#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("expected an integer at token {position}, found '{token}'")]
    InputFormat { token: String, position: usize },

    #[error("input ended after {read} of {expected} integers")]
    InputExhausted { expected: usize, read: usize },

    #[error("invalid array size: {0}")]
    InvalidSize(i64),

    #[error("array of length {len} has no odd index to average")]
    NoOddIndex { len: usize },

    #[error("factorial of negative value {value} at index {index} is undefined")]
    InvalidArgument { value: i64, index: usize },

    #[error("factorial of {value} at index {index} overflows 128 bits")]
    FactorialOverflow { value: i64, index: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProcessorError>;
