//! Expansion of `versions` frontmatter into concrete versions.

use serde_yaml::Value;

use crate::catalog::VersionCatalog;
use crate::error::{Error, Result};
use crate::range::VersionRange;

/// Resolves a `versions` frontmatter mapping into concrete version
/// identifiers (`plan@release`).
///
/// The synchronizer only depends on this trait, so tests can swap in a
/// synthetic resolver.
pub trait ApplicableVersions {
    fn applicable_versions(&self, versions: &Value) -> Result<Vec<String>>;
}

impl ApplicableVersions for VersionCatalog {
    /// Keys that do not name a plan (such as `feature`) are skipped with a
    /// warning. Rolling plans apply whenever their key is present.
    fn applicable_versions(&self, versions: &Value) -> Result<Vec<String>> {
        let mapping = versions.as_mapping().ok_or(Error::VersionsNotMapping)?;
        let mut applicable = Vec::new();

        for plan in self.plans() {
            let Some(raw) = mapping.get(plan.short_name.as_str()) else {
                continue;
            };
            let range_str = range_string(&plan.short_name, raw)?;

            if !plan.numbered {
                applicable.extend(self.versions_of(plan).into_iter().map(|v| v.version));
                continue;
            }

            let range = VersionRange::parse(&range_str)?;
            applicable.extend(
                self.versions_of(plan)
                    .into_iter()
                    .filter(|v| range.satisfies(&v.release))
                    .map(|v| v.version),
            );
        }

        for key in mapping.keys() {
            let known = key
                .as_str()
                .is_some_and(|k| self.plan_by_short_name(k).is_some());
            if !known {
                tracing::warn!(key = ?key, "Ignoring unknown product in versions frontmatter");
            }
        }

        Ok(applicable)
    }
}

/// Read a frontmatter range value, accepting bare numbers such as `3.5`.
fn range_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::InvalidVersionsValue {
            key: key.to_string(),
            reason: "expected a range string such as '*' or '>=3.4'".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductPlan;
    use pretty_assertions::assert_eq;

    fn catalog() -> VersionCatalog {
        VersionCatalog::new(vec![
            ProductPlan::rolling("free-pro-team", "fpt"),
            ProductPlan::rolling("enterprise-cloud", "ghec"),
            ProductPlan::numbered("enterprise-server", "ghes", ["3.3", "3.4", "3.5", "3.6", "3.7"]),
        ])
        .unwrap()
    }

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_star_expands_every_release() {
        let versions = catalog()
            .applicable_versions(&yaml("fpt: '*'\nghes: '*'\n"))
            .unwrap();
        assert_eq!(
            versions,
            vec![
                "free-pro-team@latest",
                "enterprise-server@3.3",
                "enterprise-server@3.4",
                "enterprise-server@3.5",
                "enterprise-server@3.6",
                "enterprise-server@3.7",
            ]
        );
    }

    #[test]
    fn test_range_filters_numbered_releases() {
        let versions = catalog()
            .applicable_versions(&yaml("ghec: '*'\nghes: '>=3.5'\n"))
            .unwrap();
        assert_eq!(
            versions,
            vec![
                "enterprise-cloud@latest",
                "enterprise-server@3.5",
                "enterprise-server@3.6",
                "enterprise-server@3.7",
            ]
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let versions = catalog()
            .applicable_versions(&yaml("feature: some-flag\nfpt: '*'\n"))
            .unwrap();
        assert_eq!(versions, vec!["free-pro-team@latest"]);
    }

    #[test]
    fn test_non_mapping_rejected() {
        let err = catalog().applicable_versions(&yaml("'*'")).unwrap_err();
        assert!(matches!(err, Error::VersionsNotMapping));
    }

    #[test]
    fn test_invalid_range_value() {
        let err = catalog()
            .applicable_versions(&yaml("ghes:\n  - 3.4\n"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidVersionsValue { .. }));
    }
}
