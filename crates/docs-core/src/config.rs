//! Pipeline configuration
//!
//! A pipeline config names the directory a pipeline owns, the frontmatter
//! template stamped onto synthesized indexes, and optional child ordering
//! overrides. It can be written as TOML, JSON or YAML:
//!
//! ```toml
//! target_directory = "content/rest"
//! short_title = true
//!
//! [frontmatter_defaults]
//! autogenerated = "rest"
//!
//! [index_order."content/rest/index.md"]
//! startsWith = ["overview", "guides"]
//! ```

use std::collections::BTreeMap;

use docs_content::Frontmatter;
use docs_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Directory holding the site's content, relative to the repository root
pub const DEFAULT_CONTENT_ROOT: &str = "content";

/// Ordering override for one directory index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexOrderEntry {
    /// Children placed first, in this order
    #[serde(default, alias = "startsWith")]
    pub starts_with: Vec<String>,
}

impl IndexOrderEntry {
    pub fn starts_with<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            starts_with: children.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordering overrides keyed by index file path relative to the repository
/// root (e.g. `content/rest/index.md`)
pub type IndexOrder = BTreeMap<String, IndexOrderEntry>;

/// Configuration for one automated pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory owned by the pipeline, relative to the repository root
    #[serde(alias = "targetDirectory")]
    pub target_directory: String,

    /// Frontmatter merged into every synthesized `index.md`
    #[serde(alias = "frontmatterDefaults", alias = "frontmatter")]
    pub frontmatter_defaults: Frontmatter,

    #[serde(default, alias = "indexOrder")]
    pub index_order: IndexOrder,

    /// Give synthesized indexes a `shortTitle` equal to the directory name
    #[serde(default, alias = "shortTitle")]
    pub short_title: bool,

    #[serde(default = "default_content_root", alias = "contentRoot")]
    pub content_root: String,
}

fn default_content_root() -> String {
    DEFAULT_CONTENT_ROOT.to_string()
}

impl PipelineConfig {
    pub fn new(target_directory: impl Into<String>, frontmatter_defaults: Frontmatter) -> Self {
        Self {
            target_directory: target_directory.into(),
            frontmatter_defaults,
            index_order: IndexOrder::new(),
            short_title: false,
            content_root: default_content_root(),
        }
    }

    /// Load and validate a pipeline config from a TOML, JSON or YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// frontmatter defaults carry no `autogenerated` tag.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let config: Self = ConfigStore::new().load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// The pipeline tag that marks files owned by this pipeline
    pub fn pipeline_tag(&self) -> Result<&str> {
        self.frontmatter_defaults
            .autogenerated()
            .filter(|tag| !tag.is_empty())
            .ok_or(Error::MissingAutogeneratedTag)
    }

    pub fn validate(&self) -> Result<()> {
        self.pipeline_tag().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_aliases() {
        let json = r#"{
            "targetDirectory": "content/webhooks",
            "frontmatterDefaults": { "autogenerated": "webhooks" },
            "indexOrder": { "content/webhooks/index.md": { "startsWith": ["about"] } },
            "shortTitle": true
        }"#;
        let config: PipelineConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.target_directory, "content/webhooks");
        assert_eq!(config.pipeline_tag().unwrap(), "webhooks");
        assert_eq!(
            config.index_order["content/webhooks/index.md"].starts_with,
            vec!["about"]
        );
        assert!(config.short_title);
        assert_eq!(config.content_root, "content");
    }

    #[test]
    fn test_missing_tag_is_rejected() {
        let config = PipelineConfig::new("content/rest", Frontmatter::new());
        assert!(matches!(config.validate(), Err(Error::MissingAutogeneratedTag)));
    }
}
