//! Error types for graft-parse

/// Result type for graft-parse operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scanning a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported file type: '{extension}'")]
    UnsupportedFormat { extension: String },

    #[error("no file content found")]
    NoInput,

    #[error("duplicated marker within a single file: '{name}' has already been processed")]
    DuplicatedMarker { name: String },

    /// Per-directive failures, collected across the whole document in
    /// first-seen order.
    #[error("invalid markers: {}", join_errors(.0))]
    Parse(Vec<graft_marker::Error>),
}

fn join_errors(errors: &[graft_marker::Error]) -> String {
    errors
        .iter()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
