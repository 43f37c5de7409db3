//! Blockquote grammar: a run of lines each beginning with `>`,
//! whose content (the part after the marker) is itself parsed as nested
//! blocks.

use crate::ast::block::{Block, Blockquote};
use crate::parser::combinators::token;
use crate::parser::lines::lines;
use crate::parser::{and_then, or, pure, Parser};
use crate::tape::Tape;

/// `> ` (marker plus exactly one optional space) is the leader every
/// line of a blockquote must repeat.
fn leader() -> Parser<Tape> {
    or(token("> "), token(">"))
}

pub fn blockquote() -> Parser<Block> {
    and_then(lines::<()>(leader(), None), |captured| {
        let mut chars = Vec::new();
        for (i, line) in captured.iter().enumerate() {
            if i > 0 {
                chars.extend(captured[i - 1].newline.iter().flat_map(|nl| nl.iter()));
            }
            chars.extend(line.content.iter());
        }
        let inner_source = Tape::from_fatchars(chars);
        let nested = crate::grammar::block::parse_blocks_in(&inner_source);
        pure(Block::Blockquote(Blockquote { lines: captured.clone(), content: nested }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::evaluate;

    #[test]
    fn blockquote_strips_marker_from_every_line() {
        let (value, state) = evaluate(&blockquote(), "> first\n> second\nafter");
        match value.unwrap() {
            Block::Blockquote(bq) => assert_eq!(bq.lines.len(), 2),
            other => panic!("expected Blockquote, got {other:?}"),
        }
        assert_eq!(state.tape.text(), "after");
    }

    #[test]
    fn blockquote_nested_content_is_parsed_as_blocks() {
        let (value, _) = evaluate(&blockquote(), "> # Heading\n");
        match value.unwrap() {
            Block::Blockquote(bq) => assert_eq!(bq.content.len(), 1),
            other => panic!("expected Blockquote, got {other:?}"),
        }
    }
}
