//! Markdown documents with a YAML frontmatter block
//!
//! Files look like:
//!
//! ```text
//! ---
//! title: Artifacts
//! versions:
//!   fpt: '*'
//! ---
//! Body text
//! ```
//!
//! The body is kept byte-for-byte, so `parse` followed by `render` only ever
//! reformats the frontmatter block.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::frontmatter::Frontmatter;

/// Opening fence, frontmatter text, and closing fence at the start of a file
static FRONTMATTER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)\A---[ \t]*\r?\n(.*?)^---[ \t]*(?:\r?\n|\z)")
        .expect("Invalid frontmatter regex")
});

/// A Markdown file split into frontmatter and body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkdownDocument {
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl MarkdownDocument {
    pub fn new(frontmatter: Frontmatter, body: impl Into<String>) -> Self {
        Self {
            frontmatter,
            body: body.into(),
        }
    }

    /// Split a file into frontmatter and body.
    ///
    /// A file without a leading `---` fence has empty frontmatter and its
    /// whole text as body. An opening fence without a closing one is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use docs_content::MarkdownDocument;
    ///
    /// let doc = MarkdownDocument::parse("---\ntitle: Hello\n---\nBody\n").unwrap();
    /// assert_eq!(doc.frontmatter.get("title").and_then(|v| v.as_str()), Some("Hello"));
    /// assert_eq!(doc.body, "Body\n");
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        if let Some(captures) = FRONTMATTER_BLOCK.captures(source) {
            let whole = captures.get(0).map_or(0..0, |m| m.range());
            let yaml = captures.get(1).map_or("", |m| m.as_str());
            let frontmatter = Frontmatter::from_yaml(yaml)?;
            return Ok(Self::new(frontmatter, &source[whole.end..]));
        }

        let first_line = source.lines().next().unwrap_or("");
        if first_line.trim_end() == "---" {
            return Err(Error::parse("frontmatter", "missing closing `---` fence"));
        }

        Ok(Self::new(Frontmatter::new(), source))
    }

    /// Render back to file text.
    pub fn render(&self) -> Result<String> {
        let yaml = self.frontmatter.to_yaml()?;
        let mut out = String::with_capacity(yaml.len() + self.body.len() + 8);
        out.push_str("---\n");
        out.push_str(&yaml);
        if !yaml.is_empty() && !yaml.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("---\n");
        out.push_str(&self.body);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_without_frontmatter() {
        let doc = MarkdownDocument::parse("# Title\n\nText\n").unwrap();
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, "# Title\n\nText\n");
    }

    #[test]
    fn test_parse_empty_frontmatter() {
        let doc = MarkdownDocument::parse("---\n---\nBody").unwrap();
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_parse_crlf_fences() {
        let doc = MarkdownDocument::parse("---\r\ntitle: Hi\r\n---\r\nBody\r\n").unwrap();
        assert_eq!(doc.frontmatter.get("title").and_then(|v| v.as_str()), Some("Hi"));
        assert_eq!(doc.body, "Body\r\n");
    }

    #[test]
    fn test_unclosed_fence_is_error() {
        assert!(MarkdownDocument::parse("---\ntitle: Hi\nBody\n").is_err());
    }

    #[test]
    fn test_dashes_inside_body_are_kept() {
        let source = "---\ntitle: Hi\n---\nIntro\n---\nMore\n";
        let doc = MarkdownDocument::parse(source).unwrap();
        assert_eq!(doc.body, "Intro\n---\nMore\n");
    }

    #[test]
    fn test_render_parse_preserves_body_and_order() {
        let source = "---\ntitle: Artifacts\nintro: Use the REST API\nversions:\n  fpt: '*'\n---\n\nManual text\n";
        let doc = MarkdownDocument::parse(source).unwrap();
        let rendered = doc.render().unwrap();
        let reparsed = MarkdownDocument::parse(&rendered).unwrap();

        assert_eq!(reparsed, doc);
        let keys: Vec<&str> = reparsed.frontmatter.keys().collect();
        assert_eq!(keys, vec!["title", "intro", "versions"]);
    }

    #[test]
    fn test_render_is_stable() {
        let doc = MarkdownDocument::parse("---\ntitle: x\nchildren:\n  - /a\n---\nbody").unwrap();
        let once = doc.render().unwrap();
        let twice = MarkdownDocument::parse(&once).unwrap().render().unwrap();
        assert_eq!(once, twice);
    }
}
