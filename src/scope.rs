//! The scope environment: an immutable stack of tags naming
//! the tokens that currently terminate a "continuation" of plain text.
//! Only the innermost scope's terminators are active — a link label's
//! `]` doesn't leak out and terminate an enclosing emphasis run, and
//! vice versa.

use std::rc::Rc;

use crate::tape::Tape;

/// A single scope frame. Each variant names the construct that pushed it
/// and, implicitly, the token sequence that closes it — `grammar::inline`
/// consults `ScopeStack::terminates_at` rather than matching on this
/// directly, so new scope kinds only need to be threaded through one
/// place. Terminators can be more than one character (`==`, `~~`, a
/// multi-backtick fence), so the check is a lookahead over the tape
/// rather than a single-`char` comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Inside `[...]` of a link or image label; `]` terminates.
    LinkLabel,
    /// Inside `(...)` of a link destination; `)` terminates.
    LinkDestination,
    /// Inside a table cell; unescaped `|` terminates.
    TableCell,
    /// Inside a `"..."` string, e.g. a link title; `"` terminates.
    StringLiteral,
    /// Inside emphasis/strong/strong-emphasis delimited by `marker`
    /// (one of `*`, `**`, `***`, `_`, `__`, `___`); a matching run of the
    /// same marker terminates.
    Emphasis { marker: &'static str },
    /// Inside `==highlighted==`; `==` terminates.
    Highlight,
    /// Inside `~~struck out~~`; `~~` terminates.
    Strikethrough,
    /// Inside `~subscript~`; `~` terminates.
    Sub,
    /// Inside `^superscript^`; `^` terminates.
    Sup,
    /// Inside `` `code` `` delimited by a run of backticks of length
    /// `fence.len()`; that exact run terminates.
    InlineCode { fence: String },
}

impl Scope {
    /// The literal token sequence that closes this scope.
    fn terminator_token(&self) -> String {
        match self {
            Scope::LinkLabel => "]".to_string(),
            Scope::LinkDestination => ")".to_string(),
            Scope::TableCell => "|".to_string(),
            Scope::StringLiteral => "\"".to_string(),
            Scope::Emphasis { marker } => marker.to_string(),
            Scope::Highlight => "==".to_string(),
            Scope::Strikethrough => "~~".to_string(),
            Scope::Sub => "~".to_string(),
            Scope::Sup => "^".to_string(),
            Scope::InlineCode { fence } => fence.clone(),
        }
    }
}

/// An immutable, structurally-shared stack of scopes. Pushing returns a
/// new stack sharing the old one's tail, so a parser can hold onto an
/// outer `ScopeStack` while a nested one explores a deeper scope without
/// any risk of the inner exploration mutating what the outer call sees.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    top: Option<Rc<Frame>>,
}

#[derive(Debug)]
struct Frame {
    scope: Scope,
    parent: Option<Rc<Frame>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack { top: None }
    }

    /// Push `scope`, returning the extended stack. `self` is untouched.
    pub fn push(&self, scope: Scope) -> ScopeStack {
        ScopeStack { top: Some(Rc::new(Frame { scope, parent: self.top.clone() })) }
    }

    /// The innermost scope, if any.
    pub fn innermost(&self) -> Option<Scope> {
        self.top.as_ref().map(|frame| frame.scope.clone())
    }

    /// Whether `tape` begins with the *innermost* scope's terminator
    /// token. Outer scopes never contribute: a `)` inside a link
    /// destination nested inside emphasis doesn't terminate the
    /// emphasis, and a `*` run inside emphasis nested inside a link
    /// label doesn't terminate the label.
    pub fn terminates_at(&self, tape: &Tape) -> bool {
        match self.innermost() {
            Some(scope) => tape.split_prefix(&scope.terminator_token()).is_some(),
            None => false,
        }
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        ScopeStack::new()
    }
}
