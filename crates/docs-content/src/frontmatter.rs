//! Order-preserving frontmatter mapping
//!
//! Frontmatter is kept as a YAML mapping rather than a typed struct so that
//! keys added by hand survive a read-modify-write cycle untouched and in
//! their original position.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};

/// Frontmatter key holding the product versions a page applies to
pub const VERSIONS_KEY: &str = "versions";
/// Frontmatter key naming the pipeline that owns a file
pub const AUTOGENERATED_KEY: &str = "autogenerated";
/// Frontmatter key listing the children of a directory index
pub const CHILDREN_KEY: &str = "children";
/// Frontmatter key holding the page title
pub const TITLE_KEY: &str = "title";
/// Frontmatter key holding the abbreviated title used in navigation
pub const SHORT_TITLE_KEY: &str = "shortTitle";

/// Ordered frontmatter key/value document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frontmatter(Mapping);

impl Frontmatter {
    /// Create an empty frontmatter document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML frontmatter block.
    ///
    /// An empty or `null` block yields empty frontmatter.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let value: Value =
            serde_yaml::from_str(source).map_err(|e| Error::parse("YAML", e.to_string()))?;
        match value {
            Value::Null => Ok(Self::new()),
            Value::Mapping(mapping) => Ok(Self(mapping)),
            other => Err(Error::FrontmatterNotMapping {
                found: describe(&other).to_string(),
            }),
        }
    }

    /// Render as a YAML block (empty string when there are no keys)
    pub fn to_yaml(&self) -> Result<String> {
        if self.0.is_empty() {
            return Ok(String::new());
        }
        serde_yaml::to_string(&self.0).map_err(|e| Error::render("YAML", e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a key. An existing key keeps its position in the document.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(Value::String(key.to_string()), value.into())
    }

    /// Keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().filter_map(Value::as_str)
    }

    /// Copy every key of `other` into this document, overwriting on conflict.
    pub fn merge(&mut self, other: &Frontmatter) {
        for (key, value) in other.0.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// The raw `versions` value
    pub fn versions(&self) -> Option<&Value> {
        self.get(VERSIONS_KEY)
    }

    /// Clone this document with only the `versions` key replaced.
    pub fn with_versions(&self, versions: Value) -> Self {
        let mut updated = self.clone();
        updated.insert(VERSIONS_KEY, versions);
        updated
    }

    /// The pipeline tag, when present and a string
    pub fn autogenerated(&self) -> Option<&str> {
        self.get(AUTOGENERATED_KEY).and_then(Value::as_str)
    }

    /// Whether the document carries a truthy `autogenerated` value.
    pub fn is_autogenerated(&self) -> bool {
        match self.get(AUTOGENERATED_KEY) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(tag)) => !tag.is_empty(),
            Some(_) => true,
        }
    }

    /// The `children` list of a directory index.
    ///
    /// Returns `Ok(None)` when the key is absent and an error when it is not
    /// a sequence of strings.
    pub fn children(&self) -> Result<Option<Vec<String>>> {
        let Some(value) = self.get(CHILDREN_KEY) else {
            return Ok(None);
        };
        let invalid = || Error::InvalidField {
            key: CHILDREN_KEY.to_string(),
            expected: "a list of strings".to_string(),
        };
        let items = value.as_sequence().ok_or_else(invalid)?;
        items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    pub fn set_children(&mut self, children: Vec<String>) {
        let sequence = children.into_iter().map(Value::String).collect();
        self.insert(CHILDREN_KEY, Value::Sequence(sequence));
    }
}

impl From<Mapping> for Frontmatter {
    fn from(mapping: Mapping) -> Self {
        Self(mapping)
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
