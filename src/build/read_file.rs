//! Read the source document.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// List of errors for this module.
#[derive(Debug, Error)]
pub enum ReadFileError {
    /// Provides a file path to the context of an existing error.
    #[error("file {path:?}")]
    WithFile {
        /// Source error.
        source: std::io::Error,
        /// File path.
        path: PathBuf,
    },
}

/// Read the source document in memory.
pub fn read(path: impl AsRef<Path>) -> Result<String, ReadFileError> {
    let path = path.as_ref();

    std::fs::read_to_string(path).map_err(|source| ReadFileError::WithFile {
        source,
        path: path.to_owned(),
    })
}
