//! Highlight (`==`), strikethrough (`~~`), subscript (`~`), and
//! superscript (`^`) are independent delimited-run productions, and
//! strikethrough's two-character marker must be tried before the
//! one-character subscript marker so `~~text~~` doesn't parse as a
//! subscript run followed by stray tildes.

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
fn highlight_wraps_marked_text() {
    let content = first_paragraph_inlines("==important==\n");
    assert_eq!(content.len(), 1);
    assert!(matches!(content[0], Inline::Highlight(_)));
}

#[test]
fn strikethrough_is_not_shadowed_by_subscript() {
    let content = first_paragraph_inlines("~~gone~~\n");
    assert_eq!(content.len(), 1);
    match &content[0] {
        Inline::Strikethrough(d) => assert_eq!(d.value.len(), 1),
        other => panic!("expected Strikethrough, got {other:?}"),
    }
}

#[test]
fn subscript_and_superscript_use_single_character_delimiters() {
    let content = first_paragraph_inlines("H~2~O is ^super^\n");
    assert!(content.iter().any(|i| matches!(i, Inline::Sub(_))));
    assert!(content.iter().any(|i| matches!(i, Inline::Sup(_))));
}

#[test]
fn unterminated_highlight_falls_back_to_literal_text() {
    let content = first_paragraph_inlines("a == b\n");
    assert!(content.iter().all(|i| !matches!(i, Inline::Highlight(_))));
}
