//! Record of what a synchronization run did

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single filesystem decision made during a run.
///
/// Paths are relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "path", rename_all = "snake_case")]
pub enum SyncAction {
    /// A generated page was written for the first time
    Created(String),
    /// A generated page was rewritten
    Updated(String),
    /// A generated page already matched its source
    Unchanged(String),
    /// A stale generated page was removed
    Deleted(String),
    /// A directory `index.md` was written
    IndexWritten(String),
    /// A directory `index.md` already listed its children
    IndexUnchanged(String),
    /// A directory with no remaining entries was removed
    DirectoryRemoved(String),
}

impl SyncAction {
    pub fn path(&self) -> &str {
        match self {
            Self::Created(path)
            | Self::Updated(path)
            | Self::Unchanged(path)
            | Self::Deleted(path)
            | Self::IndexWritten(path)
            | Self::IndexUnchanged(path)
            | Self::DirectoryRemoved(path) => path,
        }
    }

    /// True when the action touched the filesystem
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged(_) | Self::IndexUnchanged(_))
    }
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created(path) => write!(f, "Created {path}"),
            Self::Updated(path) => write!(f, "Updated {path}"),
            Self::Unchanged(path) => write!(f, "Unchanged {path}"),
            Self::Deleted(path) => write!(f, "Deleted {path}"),
            Self::IndexWritten(path) => write!(f, "Wrote index {path}"),
            Self::IndexUnchanged(path) => write!(f, "Index unchanged {path}"),
            Self::DirectoryRemoved(path) => write!(f, "Removed directory {path}"),
        }
    }
}

/// Report from a synchronization run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Actions in the order they were taken
    pub actions: Vec<SyncAction>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: SyncAction) {
        tracing::debug!(%action, "sync action");
        self.actions.push(action);
    }

    /// Actions that touched the filesystem
    pub fn changes(&self) -> impl Iterator<Item = &SyncAction> {
        self.actions.iter().filter(|action| action.is_change())
    }

    /// Number of files or directories written or removed
    pub fn change_count(&self) -> usize {
        self.changes().count()
    }

    /// True when the run left the tree untouched
    pub fn is_noop(&self) -> bool {
        self.change_count() == 0
    }

    pub fn count(&self, predicate: impl Fn(&SyncAction) -> bool) -> usize {
        self.actions.iter().filter(|action| predicate(action)).count()
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} updated, {} deleted, {} unchanged, {} indexes written, {} directories removed",
            self.count(|a| matches!(a, SyncAction::Created(_))),
            self.count(|a| matches!(a, SyncAction::Updated(_))),
            self.count(|a| matches!(a, SyncAction::Deleted(_))),
            self.count(|a| matches!(a, SyncAction::Unchanged(_))),
            self.count(|a| matches!(a, SyncAction::IndexWritten(_))),
            self.count(|a| matches!(a, SyncAction::DirectoryRemoved(_))),
        )
    }
}
