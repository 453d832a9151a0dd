//! Error types for graft-marker

/// Result type for graft-marker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a raw marker into a directive
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("marker name is missing")]
    MissingName,

    #[error("marker '{name}' must be a begin/end pair")]
    NoMatchingMarker { name: String },

    #[error("invalid syntax for '{name}': {reason}")]
    InvalidSyntax { name: String, reason: String },

    #[error("invalid path: {reason}")]
    InvalidPath { reason: String },

    #[error("invalid import target URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    pub fn syntax(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
