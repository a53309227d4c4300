//! Error types for docs-versions

/// Result type for docs-versions operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or compressing versions
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A concrete version identifier is not part of the catalog.
    #[error("unknown version '{version}'")]
    UnknownVersion { version: String },

    /// A release number cannot be read as a version.
    #[error("invalid release '{release}': {source}")]
    InvalidRelease {
        release: String,
        #[source]
        source: semver::Error,
    },

    /// A range expression cannot be parsed.
    #[error("invalid version range '{range}': {reason}")]
    InvalidRange { range: String, reason: String },

    /// The `versions` frontmatter is not a mapping.
    #[error("versions frontmatter must be a mapping of product to range")]
    VersionsNotMapping,

    /// A single entry of the `versions` frontmatter has the wrong shape.
    #[error("invalid versions frontmatter for '{key}': {reason}")]
    InvalidVersionsValue { key: String, reason: String },

    /// The catalog itself is inconsistent.
    #[error("invalid version catalog: {reason}")]
    InvalidCatalog { reason: String },
}
