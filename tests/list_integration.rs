//! S5: unordered and ordered list items are collected while their
//! bullet continues to match, each wrapping its line's content as a
//! paragraph of parsed inlines.

use tapedown::ast::block::Block;
use tapedown::parse;

#[test]
fn s5_unordered_list_collects_dash_items() {
    let (document, _) = parse("- first\n- second\n- third\n");
    match &document.unwrap().blocks[0] {
        Block::List(list) => {
            assert!(!list.ordered);
            assert_eq!(list.items.len(), 3);
        }
        other => panic!("expected List, got {other:?}"),
    }
}

#[test]
fn s5_ordered_list_preserves_the_numeric_bullets() {
    let (document, _) = parse("1. alpha\n2. beta\n");
    match &document.unwrap().blocks[0] {
        Block::List(list) => {
            assert!(list.ordered);
            assert_eq!(list.items[0].lines[0].leader.text(), "1. ");
            assert_eq!(list.items[1].lines[0].leader.text(), "2. ");
        }
        other => panic!("expected List, got {other:?}"),
    }
}

#[test]
fn s5_unordered_item_captures_its_indented_continuation_body() {
    let (document, _) = parse("- Pick a color:\n  A1 Red\n  A2 Blue\n  A3 Green\n");
    match &document.unwrap().blocks[0] {
        Block::List(list) => {
            assert_eq!(list.items.len(), 1);
            let item = &list.items[0];
            assert_eq!(item.lines.len(), 4);
            let text: String = item
                .lines
                .iter()
                .map(|line| {
                    let mut s = line.content.text();
                    if let Some(nl) = &line.newline {
                        s.push_str(&nl.text());
                    }
                    s
                })
                .collect();
            assert_eq!(text, "Pick a color:\nA1 Red\nA2 Blue\nA3 Green\n");
        }
        other => panic!("expected List, got {other:?}"),
    }
}

#[test]
fn s5_list_ends_where_the_bullet_stops_matching() {
    let (document, _) = parse("- only item\nnot a bullet\n");
    let blocks = &document.unwrap().blocks;
    match &blocks[0] {
        Block::List(list) => assert_eq!(list.items.len(), 1),
        other => panic!("expected List, got {other:?}"),
    }
    assert!(blocks.iter().any(|b| matches!(b, Block::Paragraph(_))));
}
