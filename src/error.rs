//! Error types shared across the crate.
//!
//! Every source reader reports failures through [`AuditError`]; the command
//! layer decides whether a failure is recoverable. In the coverage check it
//! always is: the failing source simply contributes an empty set.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or decoding an input document.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The named input file does not exist.
    #[error("{}: file not found", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but is not valid JSON.
    #[error("error parsing JSON from {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other I/O failure while reading or writing the file.
    #[error("unexpected error with {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AuditError {
    /// Classify an I/O error against the path it occurred on.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            AuditError::NotFound { path }
        } else {
            AuditError::Io { path, source }
        }
    }
}

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, AuditError>;
