//! Error type for the convenience functions.

use std::fmt;

use sml_parse::ReadError;
use sml_value::ValueError;

/// Anything the convenience functions can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The markup could not be read.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// The document doesn't hold a value, or the value can't be written.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// The output sink refused a write.
    #[error("failed to write output")]
    Fmt(#[from] fmt::Error),
}

/// Result type for the convenience functions.
pub type Result<T> = std::result::Result<T, Error>;
