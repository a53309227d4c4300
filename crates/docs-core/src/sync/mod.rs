//! ContentSynchronizer for reconciling generated documents with the
//! content tree
//!
//! This module provides:
//! - **engine**: the four-step `update_content_directory` run
//! - **documents**: stale-file pruning and generated-page upserts
//! - **directory**: post-order `index.md` rebuilds and child ordering
//! - **report**: the per-run action log

mod directory;
mod documents;
mod engine;
mod report;

pub use directory::{DirectoryOutcome, order_children};
pub use engine::ContentSynchronizer;
pub use report::{SyncAction, SyncReport};

pub(crate) const INDEX_FILE: &str = "index.md";
pub(crate) const README_FILE: &str = "README.md";
/// Excluded from the content root's children comparison
pub(crate) const EARLY_ACCESS_DIR: &str = "early-access";
