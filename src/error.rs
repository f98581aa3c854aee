use thiserror::Error;

/// Errors raised by environment construction and stepping. All are fatal to
/// the call that produced them; nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridNavError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Discrete action encoding outside the recognized range.
    #[error("invalid action: {0} is not in the discrete space 0..4")]
    InvalidAction(i64),

    #[error("invalid state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, GridNavError>;
