//! [`TestContentTree`] builder for synchronizer test scenarios.

use std::fs;
use std::path::Path;

use docs_content::{MarkdownDocument, join_generated};
use docs_fs::NormalizedPath;
use tempfile::TempDir;

/// A temporary repository root with helpers for writing and inspecting
/// Markdown pages.
///
/// # Example
///
/// ```rust,no_run
/// use docs_test_utils::TestContentTree;
///
/// let tree = TestContentTree::new();
/// tree.write_page("content/rest/a.md", "autogenerated: rest\nversions:\n  fpt: '*'\n", "Body");
/// tree.assert_file_exists("content/rest/a.md");
/// ```
pub struct TestContentTree {
    temp_dir: TempDir,
}

impl Default for TestContentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContentTree {
    /// Create an empty repository root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestContentTree::new: failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The root as a `NormalizedPath`, ready for the synchronizer.
    pub fn normalized_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Write raw text to `path` (relative to the root), creating parents.
    pub fn write_raw(&self, path: &str, text: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Could not create {}: {e}", parent.display()));
        }
        fs::write(&full_path, text)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", full_path.display()));
    }

    /// Write a page with YAML frontmatter and a body.
    pub fn write_page(&self, path: &str, frontmatter_yaml: &str, body: &str) {
        self.write_raw(path, &format!("---\n{frontmatter_yaml}---\n{body}"));
    }

    /// Write a page whose body is `manual`, the delimiter, then `generated`.
    pub fn write_generated_page(&self, path: &str, frontmatter_yaml: &str, manual: &str, generated: &str) {
        self.write_page(path, frontmatter_yaml, &join_generated(manual, generated));
    }

    /// Write a directory's `index.md`.
    pub fn write_index(&self, directory: &str, frontmatter_yaml: &str) {
        self.write_page(&format!("{directory}/index.md"), frontmatter_yaml, "");
    }

    pub fn create_dir(&self, path: &str) {
        let full_path = self.root().join(path);
        fs::create_dir_all(&full_path)
            .unwrap_or_else(|e| panic!("Could not create {}: {e}", full_path.display()));
    }

    /// Read a file as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Could not read file {}: {e}", full_path.display()))
    }

    /// Read and parse a Markdown page.
    ///
    /// # Panics
    /// Panics if the file cannot be read or parsed.
    pub fn read_page(&self, path: &str) -> MarkdownDocument {
        MarkdownDocument::parse(&self.read(path))
            .unwrap_or_else(|e| panic!("Could not parse {path}: {e}"))
    }

    /// The `children` list of a directory's `index.md`.
    ///
    /// # Panics
    /// Panics if the index is missing or has no valid `children` list.
    pub fn children(&self, directory: &str) -> Vec<String> {
        let path = format!("{directory}/index.md");
        self.read_page(&path)
            .frontmatter
            .children()
            .unwrap_or_else(|e| panic!("Invalid children in {path}: {e}"))
            .unwrap_or_else(|| panic!("No children in {path}"))
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
