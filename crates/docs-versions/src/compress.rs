//! Compression of concrete versions into `versions` frontmatter.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::catalog::VersionCatalog;
use crate::error::{Error, Result};

/// Compact `versions` frontmatter: short name to range, sorted by key.
pub type VersionSpec = BTreeMap<String, String>;

/// Range matching every release of a plan
pub const ALL_RELEASES: &str = "*";

/// Collapse concrete versions into the most compact frontmatter.
///
/// Rolling plans map to `*` when present. For numbered plans every release
/// of the catalog gets a slot, marked when referenced:
///
/// - every slot marked: `*`
/// - one contiguous run: `>=first` when earlier releases are missing and
///   `<=last` when later releases are missing (`>=3.4 <=3.6` when both)
/// - gaps inside the run: `=3.3 || =3.5`
///
/// Plans with no referenced release get no key at all.
///
/// # Errors
///
/// Returns `UnknownVersion` for an identifier that is not in the catalog.
///
/// # Examples
///
/// ```
/// use docs_versions::{ProductPlan, VersionCatalog, convert_versions_to_frontmatter};
///
/// let catalog = VersionCatalog::new(vec![
///     ProductPlan::rolling("free-pro-team", "fpt"),
///     ProductPlan::numbered("enterprise-server", "ghes", ["3.3", "3.4", "3.5"]),
/// ])
/// .unwrap();
///
/// let spec = convert_versions_to_frontmatter(
///     &catalog,
///     ["free-pro-team@latest", "enterprise-server@3.4", "enterprise-server@3.5"],
/// )
/// .unwrap();
/// assert_eq!(spec["fpt"], "*");
/// assert_eq!(spec["ghes"], ">=3.4");
/// ```
pub fn convert_versions_to_frontmatter<I, S>(catalog: &VersionCatalog, versions: I) -> Result<VersionSpec>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut spec = VersionSpec::new();
    let mut slots: BTreeMap<String, Vec<bool>> = BTreeMap::new();

    for version in versions {
        let version = version.as_ref();
        let docs_version = catalog.get(version).ok_or_else(|| Error::UnknownVersion {
            version: version.to_string(),
        })?;

        if !docs_version.has_numbered_releases {
            spec.insert(docs_version.short_name, ALL_RELEASES.to_string());
            continue;
        }

        let plan = catalog
            .plan_by_short_name(&docs_version.short_name)
            .ok_or_else(|| Error::UnknownVersion {
                version: version.to_string(),
            })?;
        let index = plan
            .releases
            .iter()
            .position(|r| *r == docs_version.release)
            .ok_or_else(|| Error::UnknownVersion {
                version: version.to_string(),
            })?;

        let present = slots
            .entry(docs_version.short_name)
            .or_insert_with(|| vec![false; plan.releases.len()]);
        present[index] = true;
    }

    for (short_name, present) in slots {
        let Some(plan) = catalog.plan_by_short_name(&short_name) else {
            continue;
        };
        if let Some(range) = compress_releases(&plan.releases, &present) {
            spec.insert(short_name, range);
        }
    }

    Ok(spec)
}

/// Build the range string for one numbered plan.
///
/// Returns `None` when no slot is marked.
fn compress_releases(releases: &[String], present: &[bool]) -> Option<String> {
    let first = present.iter().position(|p| *p)?;
    let last = present.iter().rposition(|p| *p)?;

    if first == 0 && last == present.len() - 1 && present.iter().all(|p| *p) {
        return Some(ALL_RELEASES.to_string());
    }

    let continuous = present[first..=last].iter().all(|p| *p);
    if !continuous {
        let enumerated: Vec<String> = releases
            .iter()
            .zip(present)
            .filter(|(_, p)| **p)
            .map(|(release, _)| format!("={release}"))
            .collect();
        return Some(enumerated.join(" || "));
    }

    let mut bounds = Vec::with_capacity(2);
    if first > 0 {
        bounds.push(format!(">={}", releases[first]));
    }
    if last < present.len() - 1 {
        bounds.push(format!("<={}", releases[last]));
    }
    Some(bounds.join(" "))
}

/// Convert a `VersionSpec` into a YAML mapping for frontmatter.
pub fn version_spec_to_yaml(spec: &VersionSpec) -> Value {
    let mut mapping = Mapping::new();
    for (short_name, range) in spec {
        mapping.insert(Value::String(short_name.clone()), Value::String(range.clone()));
    }
    Value::Mapping(mapping)
}
