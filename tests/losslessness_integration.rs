//! S1: every character of the source survives somewhere in the parsed
//! tree, even when the grammar doesn't recognize a given span as a
//! structured construct.

use tapedown::ast::block::Block;
use tapedown::parse;

#[test]
fn s1_plain_paragraph_round_trips_through_inline_text() {
    let source = "Alpha beta gamma.\n";
    let (document, state) = parse(source);
    let document = document.expect("a plain paragraph should always parse");
    assert!(state.tape.is_empty(), "parser should consume the whole source");

    let Block::Paragraph(paragraph) = &document.blocks[0] else {
        panic!("expected a single paragraph block");
    };
    let reconstructed: String = paragraph
        .content
        .iter()
        .map(|inline| match inline {
            tapedown::ast::inline::Inline::Text(t) => t.text(),
            tapedown::ast::inline::Inline::SoftBreak(t) => t.text(),
            other => panic!("unexpected inline node in a plain paragraph: {other:?}"),
        })
        .collect();
    assert_eq!(reconstructed, "Alpha beta gamma.\n");
}

#[test]
fn s1_heading_marker_and_content_are_both_preserved() {
    let (document, _) = parse("### Section Title\n");
    let document = document.unwrap();
    match &document.blocks[0] {
        Block::Heading(h) => {
            assert_eq!(h.marker.text(), "###");
            assert_eq!(h.level, 3);
        }
        other => panic!("expected Heading, got {other:?}"),
    }
}

#[test]
fn s1_unrecognized_special_characters_survive_as_literal_text() {
    let (document, _) = parse("a _ b ` c\n");
    let document = document.unwrap();
    match &document.blocks[0] {
        Block::Paragraph(p) => {
            let text: String = p
                .content
                .iter()
                .map(|inline| match inline {
                    tapedown::ast::inline::Inline::Text(t) => t.text(),
                    tapedown::ast::inline::Inline::SoftBreak(t) => t.text(),
                    other => panic!("did not expect structured inline here: {other:?}"),
                })
                .collect();
            assert_eq!(text, "a _ b ` c\n");
        }
        other => panic!("expected Paragraph, got {other:?}"),
    }
}
