//! Synthetic version catalogs.

use docs_content::Frontmatter;
use docs_versions::{ProductPlan, VersionCatalog};

/// Releases of the synthetic `enterprise-server` plan
pub const GHES_RELEASES: [&str; 5] = ["3.3", "3.4", "3.5", "3.6", "3.7"];

/// A catalog with two rolling plans (`fpt`, `ghec`) and one numbered plan
/// (`ghes`, releases 3.3 to 3.7).
///
/// # Panics
/// Panics if the catalog fails validation.
pub fn ghes_catalog() -> VersionCatalog {
    VersionCatalog::new(vec![
        ProductPlan::rolling("free-pro-team", "fpt"),
        ProductPlan::rolling("enterprise-cloud", "ghec"),
        ProductPlan::numbered("enterprise-server", "ghes", GHES_RELEASES),
    ])
    .expect("ghes_catalog: synthetic catalog should be valid")
}

/// Parse YAML frontmatter for a fixture.
///
/// # Panics
/// Panics if `yaml` is not a YAML mapping.
pub fn frontmatter(yaml: &str) -> Frontmatter {
    Frontmatter::from_yaml(yaml)
        .unwrap_or_else(|e| panic!("frontmatter: invalid fixture YAML {yaml:?}: {e}"))
}
