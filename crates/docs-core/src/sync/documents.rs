//! Pruning and upserting of generated pages

use std::collections::HashSet;

use docs_content::{MarkdownDocument, join_generated, split_generated};
use docs_fs::NormalizedPath;
use walkdir::WalkDir;

use crate::source::{SourceContent, SourceDocument};
use crate::{Error, Result};

use super::engine::ContentSynchronizer;
use super::report::{SyncAction, SyncReport};
use super::{INDEX_FILE, README_FILE};

impl ContentSynchronizer<'_> {
    /// Delete Markdown files tagged with `tag` that the source no longer
    /// produces. Files owned by other pipelines or written by hand stay.
    pub(crate) fn prune_stale_files(
        &self,
        target: &NormalizedPath,
        tag: &str,
        source: &SourceContent,
        report: &mut SyncReport,
    ) -> Result<()> {
        let keep: HashSet<NormalizedPath> = source.keys().map(|path| self.resolve(path)).collect();

        for entry in WalkDir::new(target.to_native()).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !name.ends_with(".md") || name == INDEX_FILE || name == README_FILE {
                continue;
            }

            let path = NormalizedPath::new(entry.path());
            if keep.contains(&path) {
                continue;
            }

            let document = self.read_document(&path)?;
            if document.frontmatter.autogenerated() != Some(tag) {
                tracing::debug!(path = %path, "Keeping file not owned by this pipeline");
                continue;
            }

            docs_fs::io::remove_file(&path)?;
            report.record(SyncAction::Deleted(self.display(&path)));
        }

        Ok(())
    }

    /// Write one generated page, keeping any text above the delimiter.
    pub(crate) fn upsert_document(
        &self,
        path: &NormalizedPath,
        source: &SourceDocument,
        report: &mut SyncReport,
    ) -> Result<()> {
        let versions = source
            .frontmatter
            .versions()
            .ok_or_else(|| Error::MissingVersions { path: path.to_native() })?;

        if !path.exists() {
            if let Some(parent) = path.parent() {
                docs_fs::io::create_dir_all(&parent)?;
            }
            let document = MarkdownDocument::new(
                source.frontmatter.clone(),
                join_generated("", &source.content),
            );
            self.write_document(path, &document)?;
            report.record(SyncAction::Created(self.display(path)));
            return Ok(());
        }

        let existing = self.read_document(path)?;
        let split = split_generated(&existing.body).map_err(|e| Error::parse(path.to_native(), e))?;

        if split.generated == Some(source.content.as_str())
            && existing.frontmatter.versions() == Some(versions)
        {
            report.record(SyncAction::Unchanged(self.display(path)));
            return Ok(());
        }

        let document = MarkdownDocument::new(
            existing.frontmatter.with_versions(versions.clone()),
            join_generated(split.manual, &source.content),
        );
        self.write_document(path, &document)?;
        report.record(SyncAction::Updated(self.display(path)));
        Ok(())
    }
}
