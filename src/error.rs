use thiserror::Error;

/// Errors produced by the command parser, task list and storage layer.
///
/// Validation-style variants carry the exact message shown to the user;
/// `MalformedRecord` is only ever handled internally during load.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Command syntax or semantics wrong; the message is user-facing.
    #[error("{0}")]
    Validation(String),

    /// Task number is not a positive integer.
    #[error("Task number must be a positive integer.")]
    BadTaskNumber,

    /// Task number outside [1, size].
    #[error("That task number does not exist.")]
    TaskNumberOutOfRange,

    /// Date/time input matched none of the accepted shapes.
    #[error("Cannot parse date/time. Use yyyy-MM-dd[ HHmm] or d/M/yyyy[ HHmm].")]
    UnparsableDate,

    /// Input line matched no known command.
    #[error("Unknown command. Type 'list' to see your tasks or 'bye' to exit.")]
    UnknownCommand,

    /// Bad line in the backing store; recovered during load, never user-facing.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// I/O failure while reading or writing the backing store.
    #[error("Storage error: {0}")]
    Persistence(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;

impl TaskError {
    pub fn validation(msg: impl Into<String>) -> Self {
        TaskError::Validation(msg.into())
    }
}
