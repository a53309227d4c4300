//! Error types for docs-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from docs-core
    #[error(transparent)]
    Core(#[from] docs_core::Error),

    /// Error from docs-fs
    #[error(transparent)]
    Fs(#[from] docs_fs::Error),

    /// Error from docs-versions
    #[error(transparent)]
    Versions(#[from] docs_versions::Error),

    /// Report or frontmatter output could not be serialized
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize output: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
