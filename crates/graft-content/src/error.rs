//! Error types for graft-content

use std::path::PathBuf;

/// Result type for graft-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving directives against their targets
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] graft_parse::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot fetch '{target}' with this content source")]
    UnsupportedTarget { target: String },

    #[error("export region '{region}' not found in '{file}'")]
    ExportNotFound { region: String, file: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
