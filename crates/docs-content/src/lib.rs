//! Content parsing and editing for the docs content pipelines
//!
//! Provides the Markdown-with-frontmatter codec used to read and write
//! content files, an order-preserving [`Frontmatter`] mapping, and the
//! delimiter that separates hand-written prose from pipeline output.

pub mod document;
pub mod error;
pub mod frontmatter;
pub mod generated;

pub use document::MarkdownDocument;
pub use error::{Error, Result};
pub use frontmatter::Frontmatter;
pub use generated::{GENERATED_DELIMITER, GeneratedSplit, join_generated, split_generated};
