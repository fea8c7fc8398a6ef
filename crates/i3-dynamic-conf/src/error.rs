//! Error handling for the i3-dynamic-conf binary.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Convenient result type for the binary.
pub type Result<T> = result::Result<T, Error>;

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum Error {
    /// Loading, validating, or rendering the spec failed.
    #[error("{}", .0.pretty())]
    Spec(#[from] i3conf::Error),
    /// Writing the generated config failed.
    #[error("io error at {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// Writing to stdout failed.
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),
}
