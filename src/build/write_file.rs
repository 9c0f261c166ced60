//! Write the built document.

use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

/// List of errors for this module.
#[derive(Debug, Error)]
pub enum WriteFileError {
    /// Provides a file path to the context of an existing error.
    #[error("file {path:?}")]
    WithFile {
        /// Source error.
        source: std::io::Error,
        /// File path.
        path: PathBuf,
    },
}

/// Write the built document, creating parent directories as needed.
pub fn write(path: impl AsRef<Path>, content: impl AsRef<str>) -> Result<(), WriteFileError> {
    let path = path.as_ref();

    info!("Writing {:?}", path);

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| WriteFileError::WithFile {
            source,
            path: dir.to_owned(),
        })?;
    }

    std::fs::write(path, content.as_ref()).map_err(|source| WriteFileError::WithFile {
        source,
        path: path.to_owned(),
    })
}
