//! Length input validation at the user boundary.

use super::LengthError;

/// Default threshold above which callers warn before generating.
pub const LARGE_LENGTH: usize = 1_000_000;

/// Parse a user-supplied length into a positive value no greater than `max`.
pub fn parse(input: &str, max: usize) -> Result<usize, LengthError> {
    let input = input.trim();
    let value: i64 = input
        .parse()
        .map_err(|_| LengthError::NotAnInteger(input.to_string()))?;

    if value < 0 {
        return Err(LengthError::Negative(value));
    }

    let length = usize::try_from(value).map_err(|_| LengthError::NotAnInteger(input.to_string()))?;
    check(length, max)
}

/// Check an already-numeric length against the positive/maximum rules.
pub fn check(length: usize, max: usize) -> Result<usize, LengthError> {
    match length {
        0 => Err(LengthError::Zero),
        n if n > max => Err(LengthError::TooLong { length: n, max }),
        n => Ok(n),
    }
}

/// Whether `length` is big enough to warrant a memory/time warning.
pub fn is_large(length: usize, threshold: usize) -> bool {
    length > threshold
}
