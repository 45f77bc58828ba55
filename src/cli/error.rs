use std::io;
use std::process::ExitCode;

use thiserror::Error;

use crate::pass::{GenerateError, LengthError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Number of passwords must be at least 1.")]
    ZeroCount,

    #[error("Failed to write passwords: {0}")]
    Io(#[from] io::Error),
}

impl From<LengthError> for Error {
    fn from(e: LengthError) -> Self {
        Error::Generate(e.into())
    }
}

impl Error {
    /// 2 for rejected input, 1 for I/O failures.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Io(_) => ExitCode::FAILURE,
            Error::Generate(_) | Error::ZeroCount => ExitCode::from(2),
        }
    }
}
