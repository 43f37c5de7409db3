//! Inline-level nodes. Every variant carries enough raw `Tape`
//! material to reconstruct its exact source span. `Raw` is the one
//! exception to "everything is structured": it names a span that was
//! deliberately *not* re-parsed for inline structure (a table cell, the
//! untried tail of a bounded sub-parse), kept as one opaque token rather
//! than forced through `Text`.

use crate::ast::wrappers::{Delimited, InDoubleQuotes, InSquareBrackets};
use crate::tape::Tape;

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// A run of characters with no inline structure of its own.
    Text(Tape),
    /// A span kept verbatim without being re-parsed for inline structure.
    Raw(Tape),
    /// `*text*` / `_text_`.
    Emphasis(Delimited<Vec<Inline>>),
    /// `**text**` / `__text__`.
    Strong(Delimited<Vec<Inline>>),
    /// `***text***` / `___text___` — a single triple-run node, distinct
    /// from a `Strong` wrapping a nested `Emphasis`.
    StrongEmphasis(Delimited<Vec<Inline>>),
    /// `==text==`.
    Highlight(Delimited<Vec<Inline>>),
    /// `~~text~~`.
    Strikethrough(Delimited<Vec<Inline>>),
    /// `~text~`.
    Sub(Delimited<Vec<Inline>>),
    /// `^text^`.
    Sup(Delimited<Vec<Inline>>),
    /// `` `code` `` — content is never itself parsed for inline structure.
    Code(Delimited<Tape>),
    /// A hard line break: two or more trailing spaces, or a backslash,
    /// immediately before a newline. `marker` is whatever produced it.
    HardBreak { marker: Tape, newline: Tape },
    /// An ordinary newline inside a paragraph that doesn't qualify as a
    /// hard break.
    SoftBreak(Tape),
    Link(Link),
    Image(Link),
}

/// Shared shape of `[label](destination "title")` links and
/// `![label](destination "title")` images; the `!` (if present) is
/// captured by the caller, not here, since it's the only thing that
/// distinguishes the two.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub label: InSquareBrackets<Vec<Inline>>,
    pub destination: LinkDestination,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkDestination {
    pub open_paren: Tape,
    pub target: Tape,
    pub title: Option<InDoubleQuotes<Tape>>,
    pub close_paren: Tape,
}
