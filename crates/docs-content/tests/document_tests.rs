//! Integration tests for the Markdown frontmatter codec and the generated
//! section delimiter.

use docs_content::{
    Frontmatter, GENERATED_DELIMITER, MarkdownDocument, join_generated, split_generated,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

const EXISTING_PAGE: &str = "---\ntitle: Artifacts\nshortTitle: Artifacts\nintro: Use the REST API to interact with artifacts.\nversions:\n  fpt: '*'\n  ghes: '>=3.4'\nautogenerated: rest\n---\n\nHand-written introduction.\n\n<!-- Content after this section is automatically generated -->\n## List artifacts\n";

#[test]
fn test_existing_page_splits_into_manual_and_generated() {
    let doc = MarkdownDocument::parse(EXISTING_PAGE).unwrap();
    let split = split_generated(&doc.body).unwrap();

    assert_eq!(split.manual, "\nHand-written introduction.\n");
    assert_eq!(split.generated, Some("## List artifacts\n"));
    assert_eq!(doc.frontmatter.autogenerated(), Some("rest"));
}

#[test]
fn test_rebuilding_body_only_changes_generated_tail() {
    let doc = MarkdownDocument::parse(EXISTING_PAGE).unwrap();
    let split = split_generated(&doc.body).unwrap();

    let new_body = join_generated(split.manual, "## List workflow artifacts\n");
    let updated = MarkdownDocument::new(doc.frontmatter.clone(), new_body);
    let rendered = updated.render().unwrap();

    assert!(rendered.contains("Hand-written introduction."));
    assert!(rendered.contains("## List workflow artifacts"));
    assert!(!rendered.contains("## List artifacts\n"));
    assert_eq!(rendered.matches(GENERATED_DELIMITER).count(), 1);
}

#[rstest]
#[case("no frontmatter at all\n", 0)]
#[case("---\ntitle: One\n---\n", 1)]
#[case("---\ntitle: One\nversions:\n  fpt: '*'\n---\nbody", 2)]
fn test_key_counts(#[case] source: &str, #[case] keys: usize) {
    let doc = MarkdownDocument::parse(source).unwrap();
    assert_eq!(doc.frontmatter.keys().count(), keys);
}

#[test]
fn test_frontmatter_deserializes_from_json_in_order() {
    let fm: Frontmatter =
        serde_json::from_str(r#"{"title": "Zeta", "versions": {"fpt": "*"}, "autogenerated": "rest"}"#)
            .unwrap();
    let keys: Vec<&str> = fm.keys().collect();
    assert_eq!(keys, vec!["title", "versions", "autogenerated"]);
}

proptest! {
    #[test]
    fn test_body_survives_render_parse(body in "\\PC*") {
        let mut fm = Frontmatter::new();
        fm.insert("title", "Generated page");
        let doc = MarkdownDocument::new(fm, body.clone());

        let rendered = doc.render().unwrap();
        let parsed = MarkdownDocument::parse(&rendered).unwrap();

        prop_assert_eq!(parsed.body, body);
    }

    #[test]
    fn test_join_then_split_roundtrip(manual in "[a-zA-Z0-9 \n#]*", generated in "[a-zA-Z0-9 \n#]*") {
        let body = join_generated(&manual, &generated);
        let split = split_generated(&body).unwrap();
        prop_assert_eq!(split.manual, manual.as_str());
        prop_assert_eq!(split.generated, Some(generated.as_str()));
    }
}
