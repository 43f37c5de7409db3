//! List grammar: unordered (`-`/`*`/`+`), ordered (`N.`/`N)`), and task
//! (`[ ]`/`[x]`/`[X]`/`[-]`) list items. Looseness (blank lines between
//! items) is left for a caller comparing adjacent `Block::BlankLines`
//! siblings. Each item's body is captured line-by-line: the first line's
//! leader is the bullet itself, and any later line whose indentation
//! reaches past the bullet's width is folded in as a continuation,
//! column-anchored the same way a blockquote's `>` is. The joined,
//! de-indented body is then re-parsed as nested blocks.

use crate::ast::block::{Block, List, ListItem, TaskMarker};
use crate::grammar::block::{line_parts, parse_blocks_in};
use crate::parser::combinators::{char, char_if, digit, token};
use crate::parser::lines::Line;
use crate::parser::repetition::some;
use crate::parser::{and_then, map, optional, options, Parser};
use crate::tape::{FatChar, Tape};

pub fn list() -> Parser<Block> {
    options(vec![unordered_list(), ordered_list(), task_list()])
}

fn unordered_list() -> Parser<Block> {
    map(some(unordered_item()), |items| Block::List(List { ordered: false, tight: true, items }))
}

fn ordered_list() -> Parser<Block> {
    map(some(ordered_item()), |items| Block::List(List { ordered: true, tight: true, items }))
}

fn task_list() -> Parser<Block> {
    map(some(task_item()), |items| Block::List(List { ordered: false, tight: true, items }))
}

/// Captures a list item's full body as its physical `Line`s: the first
/// line uses `bullet` as its leader, every following line whose
/// indentation is at least `bullet.len()` columns wide is folded in as a
/// continuation line (its leader is exactly that many columns of
/// indentation; anything past it remains in `content`, which is how
/// deeper nested indentation survives).
fn item_lines(bullet: Tape) -> Parser<Vec<Line>> {
    let indent = bullet.len();
    and_then(line_parts(), move |(content, newline)| {
        let first = Line { leader: bullet.clone(), content, newline };
        map(continuation_lines(indent), move |continuation| {
            let mut all = vec![first.clone()];
            all.extend(continuation);
            all
        })
    })
}

fn continuation_lines(indent: usize) -> Parser<Vec<Line>> {
    let leader = token(&" ".repeat(indent));
    map(optional(crate::parser::lines::lines::<()>(leader, None)), |maybe| maybe.unwrap_or_default())
}

fn build_list_item(lines: Vec<Line>) -> ListItem {
    let mut chars = Vec::new();
    for line in &lines {
        chars.extend(line.content.iter());
        if let Some(nl) = &line.newline {
            chars.extend(nl.iter());
        }
    }
    let body = Tape::from_fatchars(chars);
    let content = parse_blocks_in(&body);
    ListItem { lines, content, task: None }
}

fn unordered_item() -> Parser<ListItem> {
    and_then(options(vec![token("- "), token("* "), token("+ ")]), |bullet| {
        map(item_lines(bullet), build_list_item)
    })
}

fn ordered_item() -> Parser<ListItem> {
    and_then(some(digit()), |digits: Vec<FatChar>| {
        and_then(options(vec![char('.'), char(')')]), move |punct| {
            let digits = digits.clone();
            and_then(char(' '), move |space| {
                let mut marker_chars = digits.clone();
                marker_chars.push(punct);
                marker_chars.push(space);
                let bullet = Tape::from_fatchars(marker_chars);
                map(item_lines(bullet), build_list_item)
            })
        })
    })
}

fn task_item() -> Parser<ListItem> {
    and_then(char('['), |open| {
        and_then(char_if(|c| matches!(c, ' ' | 'x' | 'X' | '-')), move |state_char| {
            and_then(char(']'), move |close| {
                and_then(char(' '), move |space| {
                    let bullet = Tape::from_fatchars(vec![open, state_char, close, space]);
                    let marker = TaskMarker { state: state_char.value };
                    map(item_lines(bullet), move |lines| {
                        let mut item = build_list_item(lines);
                        item.task = Some(marker);
                        item
                    })
                })
            })
        })
    })
}
