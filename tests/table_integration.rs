//! S6: tables require a header row immediately followed by a valid
//! dash/colon separator row; the separator row fixes each column's
//! alignment for the body rows that follow.

use tapedown::ast::block::{Alignment, Block};
use tapedown::parse;

#[test]
fn s6_table_with_alignment_markers_parses_header_and_rows() {
    let (document, _) = parse("Name | Age\n:--- | ---:\nAda | 30\nGrace | 40\n");
    match &document.unwrap().blocks[0] {
        Block::Table(t) => {
            assert_eq!(t.header.cells.len(), 2);
            assert_eq!(t.separator.cells[0].alignment, Alignment::Left);
            assert_eq!(t.separator.cells[1].alignment, Alignment::Right);
            assert_eq!(t.rows.len(), 2);
        }
        other => panic!("expected Table, got {other:?}"),
    }
}

#[test]
fn s6_a_row_without_a_valid_separator_is_not_a_table() {
    let (document, _) = parse("Name | Age\njust text\n");
    assert!(!matches!(document.unwrap().blocks[0], Block::Table(_)));
}
