//! Version range expressions used in `versions` frontmatter.
//!
//! The syntax follows npm-style ranges as written by docs authors:
//!
//! - `*` matches every release
//! - comparators `>=`, `<=`, `>`, `<`, `=`, `!=` (a bare version implies `=`)
//! - space-separated comparators must all match (`>=3.4 <=3.6`)
//! - `||` separates alternatives (`=3.3 || =3.5`)
//!
//! Releases are written `major.minor`; a missing patch component is read
//! as `0`.
//!
//! # Examples
//!
//! ```
//! use docs_versions::VersionRange;
//!
//! let range = VersionRange::parse(">=3.4 <=3.6").unwrap();
//! assert!(range.satisfies("3.5"));
//! assert!(!range.satisfies("3.7"));
//!
//! let gaps = VersionRange::parse("=3.3 || =3.5").unwrap();
//! assert!(gaps.satisfies("3.3"));
//! assert!(!gaps.satisfies("3.4"));
//! ```

use crate::error::{Error, Result};

/// A single version comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompareOp {
    /// `>=`
    Gte,
    /// `>`
    Gt,
    /// `<=`
    Lte,
    /// `<`
    Lt,
    /// `=`
    Eq,
    /// `!=`
    Ne,
}

impl CompareOp {
    /// Split a leading operator off `s`.
    fn strip(s: &str) -> (Option<Self>, &str) {
        if let Some(rest) = s.strip_prefix("!=") {
            (Some(Self::Ne), rest)
        } else if let Some(rest) = s.strip_prefix(">=") {
            (Some(Self::Gte), rest)
        } else if let Some(rest) = s.strip_prefix("<=") {
            (Some(Self::Lte), rest)
        } else if let Some(rest) = s.strip_prefix('>') {
            (Some(Self::Gt), rest)
        } else if let Some(rest) = s.strip_prefix('<') {
            (Some(Self::Lt), rest)
        } else if let Some(rest) = s.strip_prefix('=') {
            (Some(Self::Eq), rest)
        } else {
            (None, s)
        }
    }
}

/// An operator paired with a version.
#[derive(Debug, Clone)]
struct Comparator {
    op: CompareOp,
    version: semver::Version,
}

impl Comparator {
    fn matches(&self, candidate: &semver::Version) -> bool {
        match self.op {
            CompareOp::Gte => candidate >= &self.version,
            CompareOp::Gt => candidate > &self.version,
            CompareOp::Lte => candidate <= &self.version,
            CompareOp::Lt => candidate < &self.version,
            CompareOp::Eq => candidate == &self.version,
            CompareOp::Ne => candidate != &self.version,
        }
    }
}

/// A parsed range expression.
///
/// Holds a list of alternatives; each alternative is a list of comparators
/// that must all match. An empty alternative (from `*`) matches everything.
#[derive(Debug, Clone)]
pub struct VersionRange {
    alternatives: Vec<Vec<Comparator>>,
    raw: String,
}

impl VersionRange {
    /// Parse a range expression.
    pub fn parse(range: &str) -> Result<Self> {
        let raw = range.trim().to_string();
        if raw.is_empty() {
            return Err(Error::InvalidRange {
                range: raw,
                reason: "empty range".to_string(),
            });
        }

        let mut alternatives = Vec::new();
        for alternative in raw.split("||") {
            let alternative = alternative.trim();
            if alternative.is_empty() {
                return Err(Error::InvalidRange {
                    range: raw.clone(),
                    reason: "empty alternative around `||`".to_string(),
                });
            }
            alternatives.push(parse_conjunction(alternative, &raw)?);
        }

        Ok(Self { alternatives, raw })
    }

    /// Check a release string such as `3.5` against this range.
    ///
    /// Returns `false` if the release cannot be parsed.
    pub fn satisfies(&self, release: &str) -> bool {
        match normalize_version(release) {
            Ok(version) => self.satisfies_version(&version),
            Err(_) => false,
        }
    }

    /// Check a parsed version against this range.
    pub fn satisfies_version(&self, version: &semver::Version) -> bool {
        self.alternatives
            .iter()
            .any(|all| all.iter().all(|comparator| comparator.matches(version)))
    }

    /// Return the original range string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_conjunction(alternative: &str, raw: &str) -> Result<Vec<Comparator>> {
    if alternative == "*" {
        return Ok(Vec::new());
    }

    let mut comparators = Vec::new();
    let mut tokens = alternative.split_whitespace();
    while let Some(token) = tokens.next() {
        let (op, rest) = CompareOp::strip(token);
        // Allow `>= 3.4` with a space after the operator
        let version_str = if rest.is_empty() && op.is_some() {
            tokens.next().ok_or_else(|| Error::InvalidRange {
                range: raw.to_string(),
                reason: format!("operator `{token}` is missing a version"),
            })?
        } else {
            rest
        };

        let version = normalize_version(version_str).map_err(|e| Error::InvalidRange {
            range: raw.to_string(),
            reason: format!("invalid version '{version_str}': {e}"),
        })?;
        comparators.push(Comparator {
            op: op.unwrap_or(CompareOp::Eq),
            version,
        });
    }
    Ok(comparators)
}

/// Normalize a release string to semver by appending `.0` for missing patch.
///
/// - `"3.12"` -> `3.12.0`
/// - `"3.12.1"` -> `3.12.1`
/// - `"3"` -> error
pub(crate) fn normalize_version(s: &str) -> std::result::Result<semver::Version, semver::Error> {
    let s = s.trim();

    if let Ok(v) = semver::Version::parse(s) {
        return Ok(v);
    }

    semver::Version::parse(&format!("{s}.0"))
}
