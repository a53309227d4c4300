//! Forward-slash paths shared by every pipeline crate

use std::fmt;
use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Content paths are compared as strings all over the pipeline (source
/// document keys, index-order overrides, the content root), so they are
/// normalized once here and converted to platform-native form only at I/O
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Converts backslashes to forward slashes, then drops empty and `.`
    /// components so `./content//rest/` and `content/rest` compare equal.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        let segments: Vec<&str> = raw
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect();

        let inner = if raw.starts_with('/') {
            format!("/{}", segments.join("/"))
        } else if segments.is_empty() && !raw.is_empty() {
            ".".to_string()
        } else {
            segments.join("/")
        };
        Self { inner }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Platform-native form for I/O calls.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append `segment`, which may itself contain several components.
    ///
    /// Joining onto `.` or an empty path yields `segment` unchanged.
    pub fn join(&self, segment: &str) -> Self {
        match self.inner.as_str() {
            "" | "." => Self::new(segment),
            base => Self::new(format!("{base}/{segment}")),
        }
    }

    /// The enclosing directory; a single relative component lives in `.`.
    pub fn parent(&self) -> Option<Self> {
        let head = match self.inner.as_str() {
            "" | "." | "/" => return None,
            inner => match inner.rsplit_once('/') {
                Some(("", _)) => "/",
                Some((head, _)) => head,
                None => ".",
            },
        };
        Some(Self {
            inner: head.to_string(),
        })
    }

    /// Last component, `None` for `/`.
    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Text after the last dot of the file name; dotfiles have none.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rsplit_once('.') {
            Some((stem, extension)) if !stem.is_empty() => Some(extension),
            _ => None,
        }
    }

    /// Express this path relative to `base`.
    ///
    /// Returns `None` when `base` is not a prefix of this path on a
    /// component boundary.
    pub fn relative_to(&self, base: &NormalizedPath) -> Option<&str> {
        match base.inner.as_str() {
            "" | "." => Some(&self.inner),
            "/" => self.inner.strip_prefix('/'),
            prefix => {
                let rest = self.inner.strip_prefix(prefix)?;
                if rest.is_empty() {
                    Some(rest)
                } else {
                    rest.strip_prefix('/')
                }
            }
        }
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_dropped() {
        assert_eq!(NormalizedPath::new("content/rest/").as_str(), "content/rest");
        assert_eq!(NormalizedPath::new("/").as_str(), "/");
    }

    #[test]
    fn test_backslashes_normalized() {
        let path = NormalizedPath::new(r"content\rest\index.md");
        assert_eq!(path.as_str(), "content/rest/index.md");
    }

    #[test]
    fn test_parent_and_file_name() {
        let path = NormalizedPath::new("/site/content/rest");
        assert_eq!(path.parent(), Some(NormalizedPath::new("/site/content")));
        assert_eq!(path.file_name(), Some("rest"));
        assert_eq!(NormalizedPath::new("/site").parent(), Some(NormalizedPath::new("/")));
        assert_eq!(NormalizedPath::new("content").parent(), Some(NormalizedPath::new(".")));
        assert_eq!(NormalizedPath::new(".").parent(), None);
        assert_eq!(NormalizedPath::new("/").parent(), None);
    }

    #[test]
    fn test_dot_and_empty_components_dropped() {
        assert_eq!(NormalizedPath::new("./content/rest/a.md").as_str(), "content/rest/a.md");
        assert_eq!(NormalizedPath::new("content//rest/./a.md").as_str(), "content/rest/a.md");
        assert_eq!(NormalizedPath::new("/site//content/").as_str(), "/site/content");
        assert_eq!(NormalizedPath::new("./").as_str(), ".");
        assert_eq!(NormalizedPath::new("").as_str(), "");
        assert_eq!(
            NormalizedPath::new("/site").join("./content/rest"),
            NormalizedPath::new("/site/content/rest")
        );
    }

    #[test]
    fn test_extension() {
        assert_eq!(NormalizedPath::new("pipeline.toml").extension(), Some("toml"));
        assert_eq!(NormalizedPath::new("a/b.c/config").extension(), None);
        assert_eq!(NormalizedPath::new(".hidden").extension(), None);
    }

    #[test]
    fn test_relative_to() {
        let base = NormalizedPath::new("/tmp/site");
        let path = NormalizedPath::new("/tmp/site/content/index.md");
        assert_eq!(path.relative_to(&base), Some("content/index.md"));
        assert_eq!(base.relative_to(&base), Some(""));

        let sibling = NormalizedPath::new("/tmp/site-other/content");
        assert_eq!(sibling.relative_to(&base), None);
    }

    #[test]
    fn test_join() {
        assert_eq!(NormalizedPath::new(".").join("content/rest").as_str(), "content/rest");
        assert_eq!(NormalizedPath::new("/").join("content").as_str(), "/content");
        assert_eq!(NormalizedPath::new("/site").join("index.md").as_str(), "/site/index.md");
    }
}
