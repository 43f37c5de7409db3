//! Inline code spans never parse their own body for further inline
//! structure, and a longer backtick fence can safely wrap a shorter one.

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
fn code_span_body_is_opaque_to_emphasis_markers() {
    let content = first_paragraph_inlines("`*not emphasis*`\n");
    match &content[0] {
        Inline::Code(d) => assert_eq!(d.value.text(), "*not emphasis*"),
        other => panic!("expected Code, got {other:?}"),
    }
}

#[test]
fn double_backtick_fence_can_contain_a_single_backtick() {
    let content = first_paragraph_inlines("``a ` b``\n");
    match &content[0] {
        Inline::Code(d) => {
            assert_eq!(d.open.text(), "``");
            assert_eq!(d.value.text(), "a ` b");
        }
        other => panic!("expected Code, got {other:?}"),
    }
}
