//! Error types for graft-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from scanning the document
    #[error(transparent)]
    Parse(#[from] graft_parse::Error),

    /// Error from resolving directives
    #[error(transparent)]
    Content(#[from] graft_content::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
