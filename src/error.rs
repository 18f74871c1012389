use thiserror::Error;

/// Errors raised while parsing host-supplied input (CLI arguments)
///
/// The picker itself has no failure modes; only the strings a user types
/// on the command line can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}': expected YYYY-MM")]
    InvalidMonth(String),
}

/// Result type for input parsing
pub type InputResult<T> = Result<T, InputError>;
