use thiserror::Error;

pub type Result<T> = std::result::Result<T, InvalidInputError>;

/// The only way an invocation can fail. Both variants are the same kind of
/// failure and differ only in the message handed back to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("Missing 'input' in event")]
    MissingField,

    #[error("Invalid input")]
    InvalidValue,
}
