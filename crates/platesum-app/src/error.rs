//! Application errors.

use std::{io, process::ExitCode};

use platesum_core::PlateError;
use platesum_generator::PrefixError;

/// Errors reported by the `platesum` binary.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// The plate prefix is malformed.
    #[display("{_0}")]
    Prefix(PrefixError),
    /// The plate number is malformed.
    #[display("{_0}")]
    Plate(PlateError),
    /// `sum` was given blank text.
    #[display("please enter a string to calculate the sum")]
    #[from(skip)]
    EmptySumInput,
    /// Writing the report failed.
    #[display("failed to write output: {_0}")]
    Io(io::Error),
    /// Encoding the JSON report failed.
    #[display("failed to encode JSON output: {_0}")]
    Json(serde_json::Error),
}

impl AppError {
    /// Returns the process exit code: 2 for invalid input, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Prefix(_) | Self::Plate(_) | Self::EmptySumInput => ExitCode::from(2),
            Self::Io(_) | Self::Json(_) => ExitCode::FAILURE,
        }
    }
}
