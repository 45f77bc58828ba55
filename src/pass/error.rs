//! Generation errors.

use thiserror::Error;

/// Why a length from the user was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("Invalid input for password length. Please enter an integer.")]
    NotAnInteger(String),

    #[error("Password length must be a positive number.")]
    Negative(i64),

    #[error("Password length must be a positive number.")]
    Zero,

    #[error("Password length {length} exceeds the maximum of {max}.")]
    TooLong { length: usize, max: usize },
}

/// Recoverable outcomes of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("At least one character type (letters, numbers, or symbols) must be selected.")]
    EmptyCharset,

    #[error(transparent)]
    InvalidLength(#[from] LengthError),
}
