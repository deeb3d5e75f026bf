//! Error types for gradlestub-core

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in core operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("version descriptor '{0}' has no Java version")]
    MissingJavaVersion(String),

    #[error("Failed to parse version descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("{op} failed for '{path}': {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CoreError {
    /// Attach the offending path and operation to an IO error
    pub(crate) fn io(op: &'static str, path: &std::path::Path, source: std::io::Error) -> Self {
        CoreError::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}
