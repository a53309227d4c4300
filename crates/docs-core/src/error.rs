//! Error types for docs-core

use std::path::PathBuf;

/// Result type for docs-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing a content directory.
///
/// Every variant aborts the run; nothing is retried or rolled back.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file contains the generated-content delimiter more than once
    #[error("{path} has multiple comment delimiters ({count} found)")]
    MultipleDelimiters { path: PathBuf, count: usize },

    /// A directory index has no `children` property
    #[error("No children property found in {path}")]
    MissingChildren { path: PathBuf },

    /// A file listed on disk vanished before its versions could be read
    #[error("File {path} does not exist while assembling directory index.md files to create parent version")]
    MissingSourceFile { path: PathBuf },

    /// A file has no `versions` frontmatter
    #[error("Frontmatter in {path} does not contain versions")]
    MissingVersions { path: PathBuf },

    /// A directory vanished before it could be listed
    #[error("Directory {path} did not exist when attempting to get directory info")]
    DirectoryMissing { path: PathBuf },

    /// The frontmatter defaults carry no `autogenerated` pipeline tag
    #[error("Frontmatter defaults must set `autogenerated` to the pipeline tag")]
    MissingAutogeneratedTag,

    /// A content file could not be parsed
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: docs_content::Error,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from docs-fs
    #[error(transparent)]
    Fs(#[from] docs_fs::Error),

    /// Content error from docs-content
    #[error(transparent)]
    Content(#[from] docs_content::Error),

    /// Versions error from docs-versions
    #[error(transparent)]
    Versions(#[from] docs_versions::Error),

    /// Directory traversal error
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl Error {
    pub(crate) fn parse(path: impl Into<PathBuf>, source: docs_content::Error) -> Self {
        match source {
            docs_content::Error::MultipleDelimiters { count } => Self::MultipleDelimiters {
                path: path.into(),
                count,
            },
            source => Self::Parse {
                path: path.into(),
                source,
            },
        }
    }
}
