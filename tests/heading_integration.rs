//! Headings recognize levels 1 through 6 and reject anything deeper,
//! falling back to an ordinary paragraph.

use tapedown::ast::block::Block;
use tapedown::parse;

#[test]
fn headings_one_through_six_are_all_recognized() {
    for level in 1..=6 {
        let marker = "#".repeat(level);
        let source = format!("{marker} Heading\n");
        let (document, _) = parse(&source);
        match &document.unwrap().blocks[0] {
            Block::Heading(h) => assert_eq!(h.level, level),
            other => panic!("expected Heading at level {level}, got {other:?}"),
        }
    }
}

#[test]
fn seven_hashes_is_a_paragraph_not_a_heading() {
    let (document, _) = parse("####### Too Deep\n");
    assert!(matches!(document.unwrap().blocks[0], Block::Paragraph(_)));
}
