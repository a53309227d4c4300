//! Boundary between hand-written and pipeline-generated content
//!
//! Every generated file carries [`GENERATED_DELIMITER`] exactly once. Text
//! above it belongs to writers; text below it is replaced on every run.

use crate::error::{Error, Result};

/// Marker inserted once per generated file
pub const GENERATED_DELIMITER: &str =
    "\n<!-- Content after this section is automatically generated -->\n";

/// A body split at the generated-content delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedSplit<'a> {
    /// Text above the delimiter (the whole body when there is no delimiter)
    pub manual: &'a str,
    /// Text below the delimiter, `None` when the delimiter is absent
    pub generated: Option<&'a str>,
}

/// Split a body at the delimiter.
///
/// # Errors
///
/// Returns `MultipleDelimiters` when the delimiter occurs more than once.
///
/// # Examples
///
/// ```
/// use docs_content::{GENERATED_DELIMITER, split_generated};
///
/// let body = format!("Intro{}Generated", GENERATED_DELIMITER);
/// let split = split_generated(&body).unwrap();
/// assert_eq!(split.manual, "Intro");
/// assert_eq!(split.generated, Some("Generated"));
/// ```
pub fn split_generated(body: &str) -> Result<GeneratedSplit<'_>> {
    let count = body.matches(GENERATED_DELIMITER).count();
    if count > 1 {
        return Err(Error::MultipleDelimiters { count });
    }

    match body.split_once(GENERATED_DELIMITER) {
        Some((manual, generated)) => Ok(GeneratedSplit {
            manual,
            generated: Some(generated),
        }),
        None => Ok(GeneratedSplit {
            manual: body,
            generated: None,
        }),
    }
}

/// Build a body from manual text and freshly generated content.
pub fn join_generated(manual: &str, generated: &str) -> String {
    let mut out = String::with_capacity(manual.len() + GENERATED_DELIMITER.len() + generated.len());
    out.push_str(manual);
    out.push_str(GENERATED_DELIMITER);
    out.push_str(generated);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_without_delimiter() {
        let split = split_generated("Only prose\n").unwrap();
        assert_eq!(split.manual, "Only prose\n");
        assert_eq!(split.generated, None);
    }

    #[test]
    fn test_split_with_empty_manual() {
        let body = join_generated("", "## Endpoints\n");
        let split = split_generated(&body).unwrap();
        assert_eq!(split.manual, "");
        assert_eq!(split.generated, Some("## Endpoints\n"));
    }

    #[test]
    fn test_two_delimiters_rejected() {
        let body = format!("a{d}b{d}c", d = GENERATED_DELIMITER);
        let err = split_generated(&body).unwrap_err();
        assert!(matches!(err, Error::MultipleDelimiters { count: 2 }));
    }
}
