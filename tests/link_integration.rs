//! S3: link and image labels are scope-aware — a `]` closes the
//! innermost label even when nested inside emphasis, and an unclosed
//! label falls back to literal text rather than consuming the rest of
//! the paragraph.

use tapedown::ast::block::Block;
use tapedown::ast::inline::Inline;
use tapedown::parse;

fn first_paragraph_inlines(source: &str) -> Vec<Inline> {
    let (document, _) = parse(source);
    match &document.unwrap().blocks[0] {
        Block::Paragraph(p) => p.content.clone(),
        other => panic!("expected Paragraph, got {other:?}"),
    }
}

#[test]
fn s3_link_with_title_parses_destination_and_title() {
    let content = first_paragraph_inlines("[docs](https://example.com \"Docs\")\n");
    match &content[0] {
        Inline::Link(l) => {
            assert_eq!(l.destination.target.text(), "https://example.com");
            assert_eq!(l.destination.title.as_ref().unwrap().value.text(), "Docs");
        }
        other => panic!("expected Link, got {other:?}"),
    }
}

#[test]
fn s3_image_is_distinguished_from_link_by_leading_bang() {
    let content = first_paragraph_inlines("![alt](/pic.png)\n");
    assert!(matches!(content[0], Inline::Image(_)));
}

#[test]
fn s3_label_with_nested_emphasis_still_closes_on_its_own_bracket() {
    let content = first_paragraph_inlines("[*emphasized*](/x)\n");
    match &content[0] {
        Inline::Link(l) => {
            assert_eq!(l.label.value.len(), 1);
            assert!(matches!(l.label.value[0], Inline::Emphasis(_)));
        }
        other => panic!("expected Link, got {other:?}"),
    }
}

#[test]
fn s3_unclosed_bracket_is_literal_text_not_a_link() {
    let content = first_paragraph_inlines("[oops no close\n");
    assert!(content.iter().all(|i| !matches!(i, Inline::Link(_))));
}
