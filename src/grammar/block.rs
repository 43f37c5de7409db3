//! Block grammar: headings, paragraphs, thematic breaks, blank-line
//! runs, and code blocks. List, blockquote and table productions live in
//! their own sibling modules since each needs its own line-aggregation
//! shape.

use crate::ast::block::{Block, CodeBlock, Document, Fence, Heading, HeadingId, Paragraph};
use crate::grammar::blockquote::blockquote;
use crate::grammar::inline::parse_inlines;
use crate::grammar::list::list;
use crate::grammar::table::table;
use crate::parser::combinators::{char, char_if, newline, rest_of_line, token, whitespace};
use crate::parser::control_flow::wrap_try;
use crate::parser::repetition::{many, many_unless, some, some_unless};
use crate::parser::{and_then, evaluate, fail, map, options, or, pure, Outcome, Parser, ParserState};
use crate::scope::ScopeStack;
use crate::tape::{FatChar, Tape};

/// Run `parse_inlines` against an already-extracted span (e.g. the rest
/// of a heading or paragraph line) rather than the live document tape.
/// `many` never breaks, so the result is always present.
pub fn inlines_in(tape: &Tape) -> Vec<crate::ast::inline::Inline> {
    let state = ParserState { tape: tape.clone(), debug_scopes: Vec::new() };
    match parse_inlines(&ScopeStack::new()).run(state) {
        Outcome::Continue(inlines, _) => inlines,
        Outcome::Break(_) => Vec::new(),
    }
}

pub fn parse_document(source: &str) -> (Option<Document>, ParserState) {
    let document = map(many(block()), |blocks| Document { blocks });
    evaluate(&document, source)
}

/// Parse `tape` (an already carved-out region, e.g. a blockquote's
/// de-marked content) as a nested sequence of blocks. `many` never
/// breaks, so the result is always present, possibly empty.
pub fn parse_blocks_in(tape: &Tape) -> Vec<Block> {
    let state = ParserState { tape: tape.clone(), debug_scopes: Vec::new() };
    match many(block()).run(state) {
        Outcome::Continue(blocks, _) => blocks,
        Outcome::Break(_) => Vec::new(),
    }
}

fn block() -> Parser<Block> {
    options(vec![
        blank_lines(),
        thematic_break(),
        heading(),
        blockquote(),
        list(),
        code_block(),
        table(),
        paragraph(),
    ])
}

fn blank_line() -> Parser<Tape> {
    and_then(whitespace(), |leading: Tape| {
        map(newline(), move |nl| leading.concat(&Tape::from_fatchars(vec![nl])))
    })
}

fn blank_lines() -> Parser<Block> {
    map(some(blank_line()), Block::BlankLines)
}

fn thematic_break() -> Parser<Block> {
    let rule_of = |c: char| {
        and_then(some(char_if(move |x| x == c || x == ' ')), move |chars: Vec<FatChar>| {
            let dash_count = chars.iter().filter(|fc| fc.value == c).count();
            if dash_count < 3 {
                return fail();
            }
            pure(Tape::from_fatchars(chars))
        })
    };
    let any_rule = options(vec![rule_of('-'), rule_of('*'), rule_of('_')]);
    and_then(any_rule, |marker| {
        let end_of_line = or(map(newline(), |_| ()), at_end_of_input());
        map(end_of_line, move |_| Block::ThematicBreak(marker.clone()))
    })
}

/// Succeeds without consuming anything, only if the tape is exhausted.
fn at_end_of_input() -> Parser<()> {
    Parser::new(|state: ParserState| {
        if state.tape.is_empty() {
            Outcome::Continue((), state)
        } else {
            Outcome::Break(state)
        }
    })
}

fn heading() -> Parser<Block> {
    and_then(some(char('#')), |hashes: Vec<FatChar>| {
        if hashes.len() > 6 {
            return fail();
        }
        let marker = Tape::from_fatchars(hashes);
        let level = marker.len();
        and_then(char(' '), move |_| {
            let marker = marker.clone();
            map(rest_of_line(), move |content| {
                let (content, id) = split_trailing_heading_id(&content);
                Block::Heading(Heading { marker: marker.clone(), level, content: inlines_in(&content), id })
            })
        })
    })
}

/// Splits an optional trailing `{id}` off the end of a heading's
/// captured line, e.g. `"Title {custom-id}"` -> (`"Title "`, `Some(id)`).
/// The braces must be the very last two tokens and must not themselves
/// nest; anything else is left as ordinary heading content.
fn split_trailing_heading_id(tape: &Tape) -> (Tape, Option<HeadingId>) {
    let chars: Vec<FatChar> = tape.iter().collect();
    if chars.last().map(|c| c.value == '}').unwrap_or(false) {
        if let Some(open_idx) = chars[..chars.len() - 1].iter().rposition(|c| c.value == '{') {
            let inner = &chars[open_idx + 1..chars.len() - 1];
            if !inner.is_empty() && inner.iter().all(|c| c.value != '{' && c.value != '}') {
                let content = Tape::from_fatchars(chars[..open_idx].to_vec());
                let id = HeadingId {
                    open_brace: Tape::from_fatchars(vec![chars[open_idx]]),
                    text: Tape::from_fatchars(inner.to_vec()),
                    close_brace: Tape::from_fatchars(vec![chars[chars.len() - 1]]),
                };
                return (content, Some(id));
            }
        }
    }
    (tape.clone(), None)
}

fn paragraph() -> Parser<Block> {
    map(some_unless(rest_of_line_with_newline(), blank_line_lookahead()), |(lines, _): (Vec<Tape>, Option<()>)| {
        let mut chars = Vec::new();
        for line in &lines {
            chars.extend(line.iter());
        }
        let joined = Tape::from_fatchars(chars);
        Block::Paragraph(Paragraph { content: inlines_in(&joined) })
    })
}

/// Zero or more non-newline characters, then an optional newline,
/// returned as separate pieces. The zero-or-more lower bound matters for
/// fenced-code-block bodies and list-item continuation lines, where a
/// wholly blank physical line is legitimate content, not a parse failure.
pub fn line_parts() -> Parser<(Tape, Option<Tape>)> {
    and_then(map(many(char_if(|c| c != '\n')), Tape::from_fatchars), |content: Tape| {
        map(crate::parser::optional(newline()), move |nl| (content.clone(), nl.map(|c| Tape::from_fatchars(vec![c]))))
    })
}

pub fn rest_of_line_with_newline() -> Parser<Tape> {
    map(line_parts(), |(content, nl)| match nl {
        Some(nl) => content.concat(&nl),
        None => content,
    })
}

fn blank_line_lookahead() -> Parser<()> {
    map(crate::parser::control_flow::wrap_try(blank_line()), |_| ())
}

fn code_block() -> Parser<Block> {
    or(fenced_code_block(), indented_code_block())
}

fn indented_code_block() -> Parser<Block> {
    let indent = token("    ");
    map(some(and_then(indent, |_| rest_of_line_with_newline())), |lines: Vec<Tape>| {
        Block::CodeBlock(CodeBlock { fence: None::<Fence>, info_string: None, lines })
    })
}

fn fence_marker(c: char) -> Parser<Tape> {
    and_then(some(char_if(move |x| x == c)), move |ticks: Vec<FatChar>| {
        if ticks.len() < 3 {
            return fail();
        }
        pure(Tape::from_fatchars(ticks))
    })
}

fn strip_trailing_newline(tape: &Tape) -> Tape {
    let chars: Vec<FatChar> = tape.iter().collect();
    if chars.last().map(|c| c.value == '\n').unwrap_or(false) {
        Tape::from_fatchars(chars[..chars.len() - 1].to_vec())
    } else {
        tape.clone()
    }
}

fn fenced_code_block() -> Parser<Block> {
    and_then(or(fence_marker('`'), fence_marker('~')), |open: Tape| {
        let fence_char = open.text().chars().next().unwrap();
        and_then(rest_of_line_with_newline(), move |info_line| {
            let open = open.clone();
            let info_string = {
                let stripped = strip_trailing_newline(&info_line);
                if stripped.is_empty() { None } else { Some(stripped) }
            };
            let close = wrap_try(fence_marker(fence_char));
            and_then(many_unless(rest_of_line_with_newline(), close), move |(body, terminator)| {
                if terminator.is_none() {
                    return fail();
                }
                let open = open.clone();
                let info_string = info_string.clone();
                let body = body.clone();
                and_then(fence_marker(fence_char), move |close_marker| {
                    let open = open.clone();
                    let info_string = info_string.clone();
                    let body = body.clone();
                    map(crate::parser::optional(newline()), move |_| {
                        Block::CodeBlock(CodeBlock {
                            fence: Some(Fence { open: open.clone(), close: Some(close_marker.clone()) }),
                            info_string: info_string.clone(),
                            lines: body.clone(),
                        })
                    })
                })
            })
        })
    })
}
