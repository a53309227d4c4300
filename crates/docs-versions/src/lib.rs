//! Product versions for the docs content pipelines
//!
//! Every page declares the products it applies to in its `versions`
//! frontmatter, for example:
//!
//! ```yaml
//! versions:
//!   fpt: '*'
//!   ghes: '>=3.4 <=3.6'
//! ```
//!
//! This crate covers both directions of that encoding:
//!
//! - [`ApplicableVersions`] expands a `versions` mapping into concrete
//!   version identifiers such as `enterprise-server@3.5`, using a
//!   [`VersionCatalog`] and [`VersionRange`] expressions;
//! - [`convert_versions_to_frontmatter`] compresses a set of concrete
//!   identifiers back into the most compact mapping.

pub mod applicable;
pub mod catalog;
pub mod compress;
pub mod error;
pub mod range;

pub use applicable::ApplicableVersions;
pub use catalog::{DocsVersion, ProductPlan, VersionCatalog};
pub use compress::{VersionSpec, convert_versions_to_frontmatter, version_spec_to_yaml};
pub use error::{Error, Result};
pub use range::VersionRange;
