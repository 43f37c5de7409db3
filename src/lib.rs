//! A lossless, scope-aware Markdown-like parser built on a hand-rolled
//! parser-combinator engine.
//!
//! The engine (`parser`, `tape`) is a general-purpose monadic
//! combinator library; the grammar on top of it (`grammar`, `ast`,
//! `scope`) is specific to this crate's document format. Every parse
//! preserves enough raw source material to reconstruct the input
//! exactly — there is no lossy normalization step between source text
//! and tree.

pub mod ast;
pub mod error;
pub mod parser;
pub mod scope;
pub mod tape;

pub mod grammar;

pub use ast::Document;
pub use error::ParseError;
pub use parser::ParserState;

/// Parse `source` into a `Document`. A `None` result means the grammar's
/// top-level production broke on the entire input — in practice, only
/// possible for a source containing a single block the grammar cannot
/// recognize at all, since `parse_document`'s block loop otherwise just
/// stops and reports what it managed to build from the rest.
pub fn parse(source: &str) -> (Option<Document>, ParserState) {
    grammar::parse_document(source)
}
