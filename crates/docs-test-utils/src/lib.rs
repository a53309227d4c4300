//! Shared test utilities for the docs-pipeline workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`catalog`]: synthetic version catalogs
//! - [`tree`]: [`TestContentTree`] builder for content trees on disk

pub mod catalog;
pub mod tree;

pub use catalog::{GHES_RELEASES, ghes_catalog, frontmatter};
pub use tree::TestContentTree;
