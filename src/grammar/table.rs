//! Table grammar: a header row, a dash/colon separator row that
//! fixes each column's alignment, and zero or more body rows. Cells are
//! split on raw `|` characters and kept as `Inline::Raw` spans — inline
//! re-parsing of cell content is left for a future extension. There is
//! no support for escaping a literal `|` inside a cell.

use crate::ast::block::{Alignment, Block, Table, TableAlignCell, TableRow, TableSeparatorRow};
use crate::ast::inline::Inline;
use crate::parser::combinators::{newline, rest_of_line};
use crate::parser::repetition::many;
use crate::parser::{and_then, fail, map, optional, pure, Parser};
use crate::tape::{FatChar, Tape};

fn split_on_pipes(tape: &Tape) -> (Vec<Tape>, Vec<Tape>) {
    let mut cells = Vec::new();
    let mut delimiters = Vec::new();
    let mut current: Vec<FatChar> = Vec::new();
    for c in tape.iter() {
        if c.value == '|' {
            delimiters.push(Tape::from_fatchars(vec![c]));
            cells.push(Tape::from_fatchars(std::mem::take(&mut current)));
        } else {
            current.push(c);
        }
    }
    cells.push(Tape::from_fatchars(current));

    if !delimiters.is_empty() && cells.first().map(|t| t.is_empty()).unwrap_or(false) {
        cells.remove(0);
    }
    if cells.len() > 1 && cells.last().map(|t| t.is_empty()).unwrap_or(false) {
        cells.pop();
    }
    (cells, delimiters)
}

fn table_row() -> Parser<TableRow> {
    map(rest_of_line(), |line| {
        let (cell_tapes, delimiters) = split_on_pipes(&line);
        let cells = cell_tapes.into_iter().map(Inline::Raw).collect();
        TableRow { cells, delimiters }
    })
}

fn parse_align_cell(tape: &Tape) -> Option<TableAlignCell> {
    let text = tape.text();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let left = trimmed.starts_with(':');
    let right = trimmed.ends_with(':');
    let dashes_part = trimmed.trim_matches(':');
    if dashes_part.is_empty() || !dashes_part.chars().all(|c| c == '-') {
        return None;
    }
    let alignment = match (left, right) {
        (true, true) => Alignment::Center,
        (true, false) => Alignment::Left,
        (false, true) => Alignment::Right,
        (false, false) => Alignment::None,
    };
    Some(TableAlignCell { dashes: tape.clone(), alignment })
}

fn separator_row() -> Parser<TableSeparatorRow> {
    and_then(rest_of_line(), |line| {
        let (cell_tapes, delimiters) = split_on_pipes(&line);
        let mut cells = Vec::with_capacity(cell_tapes.len());
        for tape in &cell_tapes {
            match parse_align_cell(tape) {
                Some(cell) => cells.push(cell),
                None => return fail(),
            }
        }
        pure(TableSeparatorRow { cells, delimiters })
    })
}

fn row_with_newline() -> Parser<TableRow> {
    and_then(table_row(), |row| map(optional(newline()), move |_| row.clone()))
}

pub fn table() -> Parser<Block> {
    and_then(table_row(), |header| {
        and_then(newline(), move |_| {
            let header = header.clone();
            and_then(separator_row(), move |separator| {
                if separator.cells.len() != header.cells.len() {
                    return fail();
                }
                let header = header.clone();
                and_then(optional(newline()), move |_| {
                    let header = header.clone();
                    let separator = separator.clone();
                    map(many(row_with_newline()), move |rows| {
                        Block::Table(Table { header: header.clone(), separator: separator.clone(), rows })
                    })
                })
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::evaluate;

    #[test]
    fn table_parses_header_separator_and_rows() {
        let source = "a | b\n---|---:\n1 | 2\n";
        let (value, _) = evaluate(&table(), source);
        match value.unwrap() {
            Block::Table(t) => {
                assert_eq!(t.header.cells.len(), 2);
                assert_eq!(t.separator.cells[1].alignment, Alignment::Right);
                assert_eq!(t.rows.len(), 1);
            }
            other => panic!("expected Table, got {other:?}"),
        }
    }

    #[test]
    fn table_rejects_mismatched_column_counts() {
        let source = "a | b | c\n---|---\n";
        let (value, _) = evaluate(&table(), source);
        assert!(value.is_none());
    }

    #[test]
    fn separator_row_rejects_non_dash_content() {
        let (value, _) = evaluate(&separator_row(), "abc|def\n");
        assert!(value.is_none());
    }
}
