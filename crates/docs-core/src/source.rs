//! Generated documents handed to the synchronizer by a pipeline

use std::collections::BTreeMap;

use docs_content::Frontmatter;
use docs_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::Result;

/// One generated page.
///
/// Serialized as `{ "data": {...}, "content": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    #[serde(rename = "data", alias = "frontmatter")]
    pub frontmatter: Frontmatter,
    /// Markdown written below the generated-content delimiter
    #[serde(default)]
    pub content: String,
}

impl SourceDocument {
    pub fn new(frontmatter: Frontmatter, content: impl Into<String>) -> Self {
        Self {
            frontmatter,
            content: content.into(),
        }
    }
}

/// Generated pages keyed by path relative to the repository root
pub type SourceContent = BTreeMap<String, SourceDocument>;

/// Load generated content from a JSON or YAML file.
pub fn load_source_content(path: &NormalizedPath) -> Result<SourceContent> {
    Ok(ConfigStore::new().load(path)?)
}
