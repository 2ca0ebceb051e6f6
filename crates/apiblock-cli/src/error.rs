//! Error types for apiblock-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations.
///
/// The rewriting core itself never fails; only reading and writing documents
/// can.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
