//! Errors raised while loading PHP files.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a file's contents. Parsing itself never fails.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path is not a directory.
    #[error("directory not found: {}", path.display())]
    NotADirectory { path: PathBuf },
}
