//! Post-order rebuild of directory `index.md` files

use std::collections::BTreeSet;

use docs_content::frontmatter::{SHORT_TITLE_KEY, TITLE_KEY};
use docs_content::{Frontmatter, MarkdownDocument};
use docs_fs::NormalizedPath;
use docs_fs::io::DirEntry;
use docs_versions::{convert_versions_to_frontmatter, version_spec_to_yaml};
use serde_yaml::Value;

use crate::config::{IndexOrder, IndexOrderEntry};
use crate::{Error, Result};

use super::engine::ContentSynchronizer;
use super::report::{SyncAction, SyncReport};
use super::{EARLY_ACCESS_DIR, INDEX_FILE, README_FILE};

/// Whether a directory survived its index pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryOutcome {
    Retained,
    Removed,
}

/// How far an index pass reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DirectoryScope {
    /// Recurse into subdirectories, recompute versions and remove empty
    /// directories
    Recursive,
    /// Only refresh this directory's children list
    RootOnly,
}

/// Inputs shared by every directory in one run
pub(crate) struct IndexSettings<'s> {
    pub(crate) defaults: &'s Frontmatter,
    pub(crate) index_order: &'s IndexOrder,
}

impl ContentSynchronizer<'_> {
    pub(crate) fn update_directory(
        &self,
        directory: &NormalizedPath,
        settings: &IndexSettings<'_>,
        scope: DirectoryScope,
        report: &mut SyncReport,
    ) -> Result<DirectoryOutcome> {
        let entries = self.list_entries(directory)?;

        let entries = match scope {
            DirectoryScope::RootOnly => entries,
            DirectoryScope::Recursive => {
                if entries.is_empty() {
                    return self.remove_directory(directory, report);
                }

                let mut surviving = Vec::with_capacity(entries.len());
                for entry in entries {
                    if entry.is_dir {
                        let child = directory.join(&entry.name);
                        let outcome = self.update_directory(&child, settings, scope, report)?;
                        if outcome == DirectoryOutcome::Removed {
                            continue;
                        }
                    }
                    surviving.push(entry);
                }

                if surviving.is_empty() {
                    return self.remove_directory(directory, report);
                }
                surviving
            }
        };

        self.update_index(directory, &entries, settings, scope, report)?;
        Ok(DirectoryOutcome::Retained)
    }

    /// Entries of `directory` other than its index and README.
    fn list_entries(&self, directory: &NormalizedPath) -> Result<Vec<DirEntry>> {
        if !directory.is_dir() {
            return Err(Error::DirectoryMissing {
                path: directory.to_native(),
            });
        }
        let mut entries = docs_fs::io::list_dir(directory)?;
        entries.retain(|entry| entry.name != INDEX_FILE && entry.name != README_FILE);
        Ok(entries)
    }

    fn remove_directory(&self, directory: &NormalizedPath, report: &mut SyncReport) -> Result<DirectoryOutcome> {
        docs_fs::io::remove_dir_all(directory)?;
        report.record(SyncAction::DirectoryRemoved(self.display(directory)));
        Ok(DirectoryOutcome::Removed)
    }

    fn update_index(
        &self,
        directory: &NormalizedPath,
        entries: &[DirEntry],
        settings: &IndexSettings<'_>,
        scope: DirectoryScope,
        report: &mut SyncReport,
    ) -> Result<()> {
        let index_path = directory.join(INDEX_FILE);
        let at_content_root = *directory == *self.content_root();

        let mut index = if index_path.exists() {
            self.read_document(&index_path)?
        } else {
            self.synthesize_index(directory, settings.defaults)
        };

        let listed: Vec<String> = index
            .frontmatter
            .children()
            .map_err(|e| Error::parse(index_path.to_native(), e))?
            .ok_or_else(|| Error::MissingChildren {
                path: index_path.to_native(),
            })?
            .iter()
            .map(|child| strip_child_prefix(child).to_string())
            .collect();

        let compared = |name: &str| !(at_content_root && name == EARLY_ACCESS_DIR);
        let on_disk: Vec<String> = entries
            .iter()
            .map(child_name)
            .filter(|name| compared(name.as_str()))
            .collect();
        let in_index: Vec<&String> = listed.iter().filter(|name| compared(name.as_str())).collect();

        let added: Vec<String> = on_disk
            .iter()
            .filter(|name| !in_index.contains(name))
            .cloned()
            .collect();
        let removed: Vec<String> = in_index
            .iter()
            .filter(|name| !on_disk.contains(name))
            .map(|name| (*name).clone())
            .collect();

        if added.is_empty() && removed.is_empty() {
            report.record(SyncAction::IndexUnchanged(self.display(&index_path)));
            return Ok(());
        }

        tracing::debug!(
            index = %index_path,
            added = ?added,
            removed = ?removed,
            "Index children changed"
        );

        if scope == DirectoryScope::Recursive {
            let versions = self.aggregate_versions(directory, entries)?;
            if index.frontmatter.versions() != Some(&versions) {
                index.frontmatter = index.frontmatter.with_versions(versions);
            }
        }

        let relative_index = self.display(&index_path);
        let autogenerated = index.frontmatter.is_autogenerated();
        let order = settings.index_order.get(&relative_index).or_else(|| {
            settings
                .index_order
                .iter()
                .find(|(key, _)| NormalizedPath::new(key.as_str()).as_str() == relative_index)
                .map(|(_, entry)| entry)
        });
        let children = order_children(&listed, &added, &removed, order, autogenerated);

        let prefix = if at_content_root { "" } else { "/" };
        index
            .frontmatter
            .set_children(children.into_iter().map(|child| format!("{prefix}{child}")).collect());

        self.write_document(&index_path, &index)?;
        report.record(SyncAction::IndexWritten(relative_index));
        Ok(())
    }

    /// A fresh index for a directory that has none yet.
    fn synthesize_index(&self, directory: &NormalizedPath, defaults: &Frontmatter) -> MarkdownDocument {
        let name = directory.file_name().unwrap_or_default();

        let mut frontmatter = Frontmatter::new();
        frontmatter.insert(TITLE_KEY, name);
        frontmatter.merge(defaults);
        frontmatter.set_children(Vec::new());
        if self.short_title() {
            frontmatter.insert(SHORT_TITLE_KEY, name);
        }

        MarkdownDocument::new(frontmatter, "")
    }

    /// Union of the versions of every direct file and every child index,
    /// compressed back into frontmatter form.
    fn aggregate_versions(&self, directory: &NormalizedPath, entries: &[DirEntry]) -> Result<Value> {
        let mut applicable = BTreeSet::new();

        for entry in entries {
            let path = if entry.is_dir {
                directory.join(&entry.name).join(INDEX_FILE)
            } else {
                directory.join(&entry.name)
            };

            if !path.exists() {
                return Err(Error::MissingSourceFile {
                    path: path.to_native(),
                });
            }

            let document = self.read_document(&path)?;
            let versions = document
                .frontmatter
                .versions()
                .ok_or_else(|| Error::MissingVersions {
                    path: path.to_native(),
                })?;
            applicable.extend(self.resolver().applicable_versions(versions)?);
        }

        let spec = convert_versions_to_frontmatter(self.catalog(), &applicable)?;
        Ok(version_spec_to_yaml(&spec))
    }
}

/// Compute the new `children` order of an index.
///
/// Children that disappeared are dropped and new ones appended. Indexes
/// owned by a pipeline are then sorted, with any `startsWith` override
/// placed first; hand-maintained indexes keep their order.
pub fn order_children(
    previous: &[String],
    added: &[String],
    removed: &[String],
    order: Option<&IndexOrderEntry>,
    autogenerated: bool,
) -> Vec<String> {
    let mut children: Vec<String> = previous
        .iter()
        .filter(|child| !removed.contains(child))
        .chain(added)
        .cloned()
        .collect();

    if !autogenerated {
        return children;
    }

    children.sort();

    let Some(order) = order else {
        return children;
    };

    // Override entries that are not on disk are skipped
    let mut ordered: Vec<String> = Vec::with_capacity(children.len());
    for child in &order.starts_with {
        if children.contains(child) && !ordered.contains(child) {
            ordered.push(child.clone());
        }
    }
    children.retain(|child| !ordered.contains(child));
    ordered.extend(children);
    ordered
}

/// Name of an entry as listed in `children`
fn child_name(entry: &DirEntry) -> String {
    if entry.is_dir {
        entry.name.clone()
    } else {
        entry
            .name
            .strip_suffix(".md")
            .unwrap_or(&entry.name)
            .to_string()
    }
}

fn strip_child_prefix(child: &str) -> &str {
    child.strip_prefix('/').unwrap_or(child)
}
