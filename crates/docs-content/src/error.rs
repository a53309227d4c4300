//! Error types for docs-content

/// Result type for docs-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in docs-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {format} content: {message}")]
    ParseError { format: String, message: String },

    #[error("Failed to render {format} content: {message}")]
    RenderError { format: String, message: String },

    #[error("Frontmatter must be a mapping, found {found}")]
    FrontmatterNotMapping { found: String },

    #[error("Frontmatter key `{key}` must be {expected}")]
    InvalidField { key: String, expected: String },

    #[error("Generated-content delimiter appears {count} times, expected at most once")]
    MultipleDelimiters { count: usize },
}

impl Error {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn render(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RenderError {
            format: format.into(),
            message: message.into(),
        }
    }
}
