//! Content synchronizer for the docs automated pipelines
//!
//! This crate coordinates the Layer 0 crates to keep a pipeline-owned
//! slice of the content tree in step with the pipeline's output:
//!
//! - **Pruning**: generated pages the pipeline no longer produces are deleted
//! - **Upserts**: generated pages are rewritten below the delimiter only
//! - **Indexes**: every directory's `index.md` lists its children and the
//!   union of their versions
//!
//! # Architecture
//!
//! ```text
//!                    docs-cli
//!                        |
//!                    docs-core
//!                        |
//!         +--------------+--------------+
//!         |              |              |
//!      docs-fs     docs-content   docs-versions
//! ```
//!
//! # Example
//!
//! ```no_run
//! use docs_core::{ContentSynchronizer, PipelineConfig, load_source_content};
//! use docs_fs::{ConfigStore, NormalizedPath};
//! use docs_versions::VersionCatalog;
//!
//! fn example() -> docs_core::Result<()> {
//!     let root = NormalizedPath::new(".");
//!     let catalog: VersionCatalog = ConfigStore::new().load(&root.join("versions.toml"))?;
//!     let config = PipelineConfig::load(&root.join("pipelines/rest.toml"))?;
//!     let source = load_source_content(&root.join("build/rest.json"))?;
//!
//!     let report = ContentSynchronizer::from_config(root, &catalog, &config).sync(&config, &source)?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod source;
pub mod sync;

pub use config::{DEFAULT_CONTENT_ROOT, IndexOrder, IndexOrderEntry, PipelineConfig};
pub use error::{Error, Result};
pub use source::{SourceContent, SourceDocument, load_source_content};
pub use sync::{ContentSynchronizer, DirectoryOutcome, SyncAction, SyncReport, order_children};
