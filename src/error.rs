//! Diagnostic error type (ambient stack). Ordinary parse failures are
//! not errors — a parser that `Break`s just means "this alternative
//! doesn't apply here," which `or`/`options` handle by trying the next
//! one. `ParseError` is reserved for conditions the grammar itself
//! cannot route around.

use thiserror::Error;

use crate::tape::Position;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input was empty")]
    EmptyInput,

    #[error("{label} exceeded its iteration ceiling at {at}")]
    IterationCeilingExceeded { label: String, at: Position },
}
