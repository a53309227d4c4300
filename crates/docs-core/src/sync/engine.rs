//! ContentSynchronizer implementation
//!
//! Reconciles a pipeline's generated documents against the content tree on
//! disk in four steps: prune stale generated files, upsert every generated
//! document, rebuild directory indexes bottom-up, and refresh the parent
//! index of the target directory.

use std::path::Path;

use docs_content::{Frontmatter, MarkdownDocument};
use docs_fs::NormalizedPath;
use docs_versions::{ApplicableVersions, VersionCatalog};

use crate::config::{DEFAULT_CONTENT_ROOT, IndexOrder, PipelineConfig};
use crate::source::SourceContent;
use crate::{Error, Result};

use super::directory::{DirectoryScope, IndexSettings};
use super::report::SyncReport;

/// Engine that keeps a pipeline-owned content directory in sync with the
/// documents the pipeline generated.
///
/// The catalog and resolver are read-only collaborators; the synchronizer
/// holds no state between runs.
pub struct ContentSynchronizer<'a> {
    /// Repository root; relative paths resolve against it
    root: NormalizedPath,
    /// The site's content root, whose index lists children without `/`
    content_root: NormalizedPath,
    catalog: &'a VersionCatalog,
    resolver: &'a dyn ApplicableVersions,
    /// Give synthesized indexes a `shortTitle`
    short_title: bool,
}

impl<'a> ContentSynchronizer<'a> {
    /// Create a synchronizer rooted at `root` that resolves versions with
    /// `catalog`.
    ///
    /// A relative root is made absolute against the working directory so
    /// absolute and relative source keys land on the same files.
    pub fn new(root: NormalizedPath, catalog: &'a VersionCatalog) -> Self {
        let root = std::path::absolute(root.to_native())
            .map(NormalizedPath::new)
            .unwrap_or(root);
        let content_root = root.join(DEFAULT_CONTENT_ROOT);
        Self {
            root,
            content_root,
            catalog,
            resolver: catalog,
            short_title: false,
        }
    }

    /// Create a synchronizer with the content root and title options of a
    /// pipeline config.
    pub fn from_config(root: NormalizedPath, catalog: &'a VersionCatalog, config: &PipelineConfig) -> Self {
        Self::new(root, catalog)
            .with_content_root(&config.content_root)
            .with_short_title(config.short_title)
    }

    /// Replace the resolver used to expand `versions` frontmatter.
    pub fn with_resolver(mut self, resolver: &'a dyn ApplicableVersions) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_content_root(mut self, content_root: &str) -> Self {
        self.content_root = self.resolve(content_root);
        self
    }

    pub fn with_short_title(mut self, short_title: bool) -> Self {
        self.short_title = short_title;
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn content_root(&self) -> &NormalizedPath {
        &self.content_root
    }

    /// Run one pipeline described by `config`.
    pub fn sync(&self, config: &PipelineConfig, source: &SourceContent) -> Result<SyncReport> {
        self.update_content_directory(
            &config.target_directory,
            source,
            &config.frontmatter_defaults,
            &config.index_order,
        )
    }

    /// Reconcile `target_directory` with `source`.
    ///
    /// Afterwards the target tree holds exactly the source documents plus
    /// files not tagged with this pipeline's `autogenerated` value, every
    /// directory has an `index.md` listing its children, and directories
    /// left without entries are gone.
    ///
    /// # Errors
    ///
    /// A missing tag or a source document without `versions` fails before
    /// anything is touched. Later errors fail fast; files already written
    /// stay written.
    pub fn update_content_directory(
        &self,
        target_directory: &str,
        source: &SourceContent,
        frontmatter_defaults: &Frontmatter,
        index_order: &IndexOrder,
    ) -> Result<SyncReport> {
        let tag = frontmatter_defaults
            .autogenerated()
            .filter(|tag| !tag.is_empty())
            .ok_or(Error::MissingAutogeneratedTag)?;

        for (path, document) in source {
            if document.frontmatter.versions().is_none() {
                return Err(Error::MissingVersions {
                    path: self.resolve(path).to_native(),
                });
            }
        }

        let target = self.resolve(target_directory);
        let mut report = SyncReport::new();

        tracing::info!(directory = %target, documents = source.len(), tag, "Synchronizing content directory");

        if target.exists() {
            self.prune_stale_files(&target, tag, source, &mut report)?;
        } else {
            docs_fs::io::create_dir_all(&target)?;
        }

        for (path, document) in source {
            self.upsert_document(&self.resolve(path), document, &mut report)?;
        }

        let settings = IndexSettings {
            defaults: frontmatter_defaults,
            index_order,
        };
        self.update_directory(&target, &settings, DirectoryScope::Recursive, &mut report)?;

        // The parent only needs its children list refreshed
        if let Some(parent) = target.parent() {
            self.update_directory(&parent, &settings, DirectoryScope::RootOnly, &mut report)?;
        }

        tracing::info!(%report, "Content directory synchronized");
        Ok(report)
    }

    pub(crate) fn catalog(&self) -> &VersionCatalog {
        self.catalog
    }

    pub(crate) fn resolver(&self) -> &dyn ApplicableVersions {
        self.resolver
    }

    pub(crate) fn short_title(&self) -> bool {
        self.short_title
    }

    /// Resolve a path relative to the repository root.
    pub(crate) fn resolve(&self, path: &str) -> NormalizedPath {
        if Path::new(path).is_absolute() {
            NormalizedPath::new(path)
        } else {
            self.root.join(path)
        }
    }

    /// Render a path relative to the repository root for reports and
    /// ordering lookups.
    pub(crate) fn display(&self, path: &NormalizedPath) -> String {
        path.relative_to(&self.root)
            .unwrap_or(path.as_str())
            .to_string()
    }

    pub(crate) fn read_document(&self, path: &NormalizedPath) -> Result<MarkdownDocument> {
        let text = docs_fs::io::read_text(path)?;
        MarkdownDocument::parse(&text).map_err(|e| Error::parse(path.to_native(), e))
    }

    pub(crate) fn write_document(&self, path: &NormalizedPath, document: &MarkdownDocument) -> Result<()> {
        let text = document.render()?;
        docs_fs::io::write_text(path, &text)?;
        Ok(())
    }
}
