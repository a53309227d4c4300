//! Versions command implementation

use docs_fs::{ConfigStore, NormalizedPath};
use docs_versions::{VersionCatalog, convert_versions_to_frontmatter};

use crate::cli::VersionsArgs;
use crate::error::{CliError, Result};

/// Run the versions command
///
/// Prints the `versions` frontmatter that covers exactly the given versions.
pub fn run_versions(args: &VersionsArgs) -> Result<()> {
    let catalog: VersionCatalog = ConfigStore::new().load(&NormalizedPath::new(&args.catalog))?;
    let ids = resolve_version_ids(&catalog, &args.versions)?;
    let spec = convert_versions_to_frontmatter(&catalog, &ids)?;

    print!("{}", serde_yaml::to_string(&spec)?);
    Ok(())
}

/// Rewrite `short@release` identifiers to the catalog's `plan@release` form.
pub fn resolve_version_ids(catalog: &VersionCatalog, versions: &[String]) -> Result<Vec<String>> {
    versions
        .iter()
        .map(|version| {
            let (name, release) = version.split_once('@').ok_or_else(|| {
                CliError::user(format!(
                    "Invalid version '{version}', expected <plan>@<release>"
                ))
            })?;
            let plan = catalog
                .resolve_plan(name)
                .ok_or_else(|| CliError::user(format!("Unknown product '{name}'")))?;
            Ok(format!("{}@{}", plan.plan, release))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docs_test_utils::ghes_catalog;

    #[test]
    fn test_short_names_resolve_to_plans() {
        let catalog = ghes_catalog();
        let ids = resolve_version_ids(
            &catalog,
            &["ghes@3.4".to_string(), "free-pro-team@latest".to_string()],
        )
        .unwrap();
        assert_eq!(ids, vec!["enterprise-server@3.4", "free-pro-team@latest"]);
    }

    #[test]
    fn test_unknown_product_is_a_user_error() {
        let catalog = ghes_catalog();
        let err = resolve_version_ids(&catalog, &["ghae@1.0".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
        assert!(err.to_string().contains("ghae"));
    }

    #[test]
    fn test_missing_release_is_a_user_error() {
        let catalog = ghes_catalog();
        let err = resolve_version_ids(&catalog, &["ghes".to_string()]).unwrap_err();
        assert!(err.to_string().contains("<plan>@<release>"));
    }
}
