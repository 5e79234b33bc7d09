//! Error types for token path and account mode resolution.

use std::io;

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Resolution error types.
///
/// Missing or malformed environment variables are never errors; only the
/// underlying working-directory and home-directory lookups can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The invoking user's home directory could not be determined.
    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    /// The current working directory could not be read.
    #[error("Could not read the current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// A string is not a valid account mode.
    #[error("Invalid account mode: {0:?} (expected \"test\" or \"normal\")")]
    InvalidAccountMode(String),
}
