//! The catalog of product plans and their releases.
//!
//! A catalog file lists every plan the site publishes:
//!
//! ```toml
//! [[plans]]
//! plan = "free-pro-team"
//! short_name = "fpt"
//!
//! [[plans]]
//! plan = "enterprise-server"
//! short_name = "ghes"
//! numbered = true
//! releases = ["3.3", "3.4", "3.5", "3.6", "3.7"]
//! ```
//!
//! Each plan expands to concrete versions named `plan@release`. Plans
//! without numbered releases have a single rolling release, `latest`.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::range::normalize_version;

/// Release name used by plans without numbered releases
pub const LATEST_RELEASE: &str = "latest";

/// One product plan of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPlan {
    /// Plan identifier, e.g. `enterprise-server`
    pub plan: String,
    /// Frontmatter key, e.g. `ghes`
    #[serde(alias = "shortName")]
    pub short_name: String,
    /// Human readable title, e.g. `Enterprise Server`
    #[serde(default, alias = "planTitle", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether releases are sequential numbers
    #[serde(default, alias = "hasNumberedReleases")]
    pub numbered: bool,
    /// Supported releases; ignored for rolling plans
    #[serde(default)]
    pub releases: Vec<String>,
}

impl ProductPlan {
    /// A plan with a single rolling release
    pub fn rolling(plan: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            plan: plan.into(),
            short_name: short_name.into(),
            title: None,
            numbered: false,
            releases: Vec::new(),
        }
    }

    /// A plan with numbered releases
    pub fn numbered<I, S>(plan: impl Into<String>, short_name: impl Into<String>, releases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            plan: plan.into(),
            short_name: short_name.into(),
            title: None,
            numbered: true,
            releases: releases.into_iter().map(Into::into).collect(),
        }
    }
}

/// A concrete version such as `enterprise-server@3.5`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsVersion {
    /// Full identifier, `plan@release`
    pub version: String,
    pub plan: String,
    pub short_name: String,
    pub release: String,
    pub has_numbered_releases: bool,
}

/// Validated set of product plans.
///
/// Numbered releases are kept sorted ascending by version number, so
/// `3.10` sorts after `3.9`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct VersionCatalog {
    plans: Vec<ProductPlan>,
}

/// On-disk shape of a catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    plans: Vec<ProductPlan>,
}

impl TryFrom<CatalogFile> for VersionCatalog {
    type Error = Error;

    fn try_from(file: CatalogFile) -> Result<Self> {
        Self::new(file.plans)
    }
}

impl From<VersionCatalog> for CatalogFile {
    fn from(catalog: VersionCatalog) -> Self {
        Self {
            plans: catalog.plans,
        }
    }
}

impl VersionCatalog {
    /// Build a catalog, validating and sorting releases.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` for duplicate plans or short names, or a
    /// numbered plan without releases, and `InvalidRelease` for a release
    /// that is not a version number.
    pub fn new(plans: Vec<ProductPlan>) -> Result<Self> {
        let mut seen_plans = HashSet::new();
        let mut seen_short = HashSet::new();
        let mut validated = Vec::with_capacity(plans.len());

        for mut plan in plans {
            if !seen_plans.insert(plan.plan.clone()) {
                return Err(Error::InvalidCatalog {
                    reason: format!("plan '{}' is listed twice", plan.plan),
                });
            }
            if !seen_short.insert(plan.short_name.clone()) {
                return Err(Error::InvalidCatalog {
                    reason: format!("short name '{}' is used twice", plan.short_name),
                });
            }

            if plan.numbered {
                if plan.releases.is_empty() {
                    return Err(Error::InvalidCatalog {
                        reason: format!("numbered plan '{}' has no releases", plan.plan),
                    });
                }
                let mut keyed = Vec::with_capacity(plan.releases.len());
                for release in plan.releases.drain(..) {
                    let version =
                        normalize_version(&release).map_err(|source| Error::InvalidRelease {
                            release: release.clone(),
                            source,
                        })?;
                    keyed.push((version, release));
                }
                keyed.sort_by(|a, b| a.0.cmp(&b.0));
                keyed.dedup_by(|a, b| a.0.cmp(&b.0) == Ordering::Equal);
                plan.releases = keyed.into_iter().map(|(_, release)| release).collect();
            } else {
                plan.releases = vec![LATEST_RELEASE.to_string()];
            }

            validated.push(plan);
        }

        Ok(Self { plans: validated })
    }

    /// Plans in catalog order
    pub fn plans(&self) -> &[ProductPlan] {
        &self.plans
    }

    /// Look up a plan by its frontmatter short name
    pub fn plan_by_short_name(&self, short_name: &str) -> Option<&ProductPlan> {
        self.plans.iter().find(|p| p.short_name == short_name)
    }

    /// Look up a plan by short name or full plan identifier
    pub fn resolve_plan(&self, name: &str) -> Option<&ProductPlan> {
        self.plans
            .iter()
            .find(|p| p.short_name == name || p.plan == name)
    }

    /// Concrete versions of a single plan
    pub fn versions_of(&self, plan: &ProductPlan) -> Vec<DocsVersion> {
        plan.releases
            .iter()
            .map(|release| to_version(plan, release))
            .collect()
    }

    /// Look up a concrete version identifier such as `enterprise-server@3.5`
    pub fn get(&self, version: &str) -> Option<DocsVersion> {
        let (plan_name, release) = version.split_once('@')?;
        let plan = self.plans.iter().find(|p| p.plan == plan_name)?;
        plan.releases
            .iter()
            .find(|r| r.as_str() == release)
            .map(|r| to_version(plan, r))
    }

    /// Newest release of a plan
    pub fn latest_release<'a>(&self, plan: &'a ProductPlan) -> Option<&'a str> {
        plan.releases.last().map(String::as_str)
    }
}

fn to_version(plan: &ProductPlan, release: &str) -> DocsVersion {
    DocsVersion {
        version: format!("{}@{}", plan.plan, release),
        plan: plan.plan.clone(),
        short_name: plan.short_name.clone(),
        release: release.to_string(),
        has_numbered_releases: plan.numbered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> VersionCatalog {
        VersionCatalog::new(vec![
            ProductPlan::rolling("free-pro-team", "fpt"),
            ProductPlan::numbered("enterprise-server", "ghes", ["3.10", "3.9", "3.8"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_numbered_releases_sorted_numerically() {
        let catalog = catalog();
        let ghes = catalog.plan_by_short_name("ghes").unwrap();
        assert_eq!(ghes.releases, vec!["3.8", "3.9", "3.10"]);
        assert_eq!(catalog.latest_release(ghes), Some("3.10"));
    }

    #[test]
    fn test_rolling_plan_has_latest() {
        let catalog = catalog();
        let version = catalog.get("free-pro-team@latest").unwrap();
        assert_eq!(version.short_name, "fpt");
        assert!(!version.has_numbered_releases);
    }

    #[test]
    fn test_get_unknown() {
        let catalog = catalog();
        assert!(catalog.get("enterprise-server@2.0").is_none());
        assert!(catalog.get("github-ae@latest").is_none());
        assert!(catalog.get("no-at-sign").is_none());
    }

    #[test]
    fn test_versions_of_follow_catalog_order() {
        let catalog = catalog();
        let ids: Vec<String> = catalog
            .plans()
            .iter()
            .flat_map(|plan| catalog.versions_of(plan))
            .map(|v| v.version)
            .collect();
        assert_eq!(
            ids,
            vec![
                "free-pro-team@latest",
                "enterprise-server@3.8",
                "enterprise-server@3.9",
                "enterprise-server@3.10",
            ]
        );
    }

    #[test]
    fn test_duplicate_short_name_rejected() {
        let result = VersionCatalog::new(vec![
            ProductPlan::rolling("free-pro-team", "fpt"),
            ProductPlan::rolling("enterprise-cloud", "fpt"),
        ]);
        assert!(matches!(result, Err(Error::InvalidCatalog { .. })));
    }

    #[test]
    fn test_invalid_release_rejected() {
        let result = VersionCatalog::new(vec![ProductPlan::numbered(
            "enterprise-server",
            "ghes",
            ["3.x"],
        )]);
        assert!(matches!(result, Err(Error::InvalidRelease { .. })));
    }

    #[test]
    fn test_resolve_plan_by_either_name() {
        let catalog = catalog();
        assert_eq!(catalog.resolve_plan("ghes").unwrap().plan, "enterprise-server");
        assert_eq!(catalog.resolve_plan("enterprise-server").unwrap().short_name, "ghes");
        assert!(catalog.resolve_plan("ghae").is_none());
    }
}
