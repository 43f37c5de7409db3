//! Inline grammar: text runs, emphasis/strong/strong-emphasis,
//! highlight, strikethrough, sub/sup, inline code spans, links and
//! images, line breaks. Every production is scope-aware — `scope`
//! names what the *enclosing* construct forbids a plain text run from
//! swallowing (see `crate::scope`).

use crate::ast::inline::{Inline, Link, LinkDestination};
use crate::ast::wrappers::{Delimited, InDoubleQuotes, InSquareBrackets};
use crate::parser::combinators::{any_char, char, char_if, token};
use crate::parser::control_flow::wrap_try;
use crate::parser::repetition::{many, many_unless, some};
use crate::parser::{and_then, fail, map, options, or, pure, Outcome, Parser, ParserState};
use crate::scope::{Scope, ScopeStack};
use crate::tape::{FatChar, Tape};

/// Markers tried in order for a delimited emphasis-family run, paired
/// with the constructor for the node they produce. Triple runs are
/// tried before double, and double before single, so `***x***` parses
/// as one `StrongEmphasis` node rather than a `Strong` wrapping a
/// nested `Emphasis`.
const EMPHASIS_RUN_MARKERS: [(&str, fn(Delimited<Vec<Inline>>) -> Inline); 6] = [
    ("***", Inline::StrongEmphasis),
    ("**", Inline::Strong),
    ("*", Inline::Emphasis),
    ("___", Inline::StrongEmphasis),
    ("__", Inline::Strong),
    ("_", Inline::Emphasis),
];

fn is_special(c: char) -> bool {
    matches!(c, '*' | '_' | '`' | '[' | '!' | '\\' | '\n' | '=' | '~' | '^')
}

/// Parse a maximal run of inline content, stopping at end of input or at
/// the first token the current scope forbids.
pub fn parse_inlines(scope: &ScopeStack) -> Parser<Vec<Inline>> {
    many(inline_atom(scope))
}

/// A single inline "atom": one of the recognized constructs, or else a
/// run of plain text up to the next one.
pub fn inline_atom(scope: &ScopeStack) -> Parser<Inline> {
    let scope = scope.clone();
    options(vec![
        hard_break(),
        soft_break(),
        emphasis_like(&scope),
        highlight(&scope),
        strikethrough(&scope),
        sub(&scope),
        sup(&scope),
        code_span(),
        image(&scope),
        link(&scope),
        text_run(&scope),
        literal_special_char(),
    ])
}

/// Falls back to treating one special character as plain text when none
/// of the structured productions above claimed it (e.g. a lone `*` with
/// no matching close delimiter). Guarantees `inline_atom` always makes
/// progress on non-empty, non-scope-terminating input.
fn literal_special_char() -> Parser<Inline> {
    map(char_if(|c| is_special(c) && c != '\n'), |c| Inline::Text(Tape::from_fatchars(vec![c])))
}

/// Consumes one character, provided the innermost scope's terminator
/// doesn't start here and `reject` doesn't claim the character itself.
/// The scope check is a tape lookahead rather than a single-`char` test
/// because terminators like `==` and `~~` span more than one character.
fn char_while(scope: &ScopeStack, reject: impl Fn(char) -> bool + 'static) -> Parser<FatChar> {
    let scope = scope.clone();
    Parser::new(move |state: ParserState| {
        if scope.terminates_at(&state.tape) {
            return Outcome::Break(state);
        }
        match state.tape.uncons() {
            Some((c, rest)) if !reject(c.value) => {
                Outcome::Continue(c, ParserState { tape: rest, debug_scopes: state.debug_scopes })
            }
            _ => Outcome::Break(state),
        }
    })
}

fn text_run(scope: &ScopeStack) -> Parser<Inline> {
    map(some(char_while(scope, is_special)), |chars: Vec<FatChar>| Inline::Text(Tape::from_fatchars(chars)))
}

fn hard_break() -> Parser<Inline> {
    let by_spaces = and_then(some(char(' ')), |spaces: Vec<FatChar>| {
        if spaces.len() < 2 {
            return fail();
        }
        let marker = Tape::from_fatchars(spaces);
        and_then(char('\n'), move |nl| {
            pure(Inline::HardBreak { marker: marker.clone(), newline: Tape::from_fatchars(vec![nl]) })
        })
    });
    let by_backslash = and_then(char('\\'), |bs| {
        and_then(char('\n'), move |nl| {
            pure(Inline::HardBreak { marker: Tape::from_fatchars(vec![bs]), newline: Tape::from_fatchars(vec![nl]) })
        })
    });
    or(by_backslash, by_spaces)
}

fn soft_break() -> Parser<Inline> {
    map(char('\n'), |c| Inline::SoftBreak(Tape::from_fatchars(vec![c])))
}

/// A run of inline content opened and closed by the literal `marker`,
/// with `push_scope` active for everything in between so an enclosing
/// construct's own terminator can't leak into the run and a terminator
/// belonging to this run can't leak out into an enclosing one.
fn delimited_run(marker: &'static str, push_scope: Scope, scope: &ScopeStack) -> Parser<Delimited<Vec<Inline>>> {
    let inner_scope = scope.push(push_scope);
    and_then(token(marker), move |open| {
        let inner_scope = inner_scope.clone();
        and_then(many_unless(inline_atom(&inner_scope), wrap_try(token(marker))), move |(content, terminator)| {
            if terminator.is_none() || content.is_empty() {
                return fail();
            }
            let open = open.clone();
            let content = content.clone();
            and_then(token(marker), move |close| pure(Delimited { open: open.clone(), value: content.clone(), close }))
        })
    })
}

fn emphasis_like(scope: &ScopeStack) -> Parser<Inline> {
    let scope = scope.clone();
    options(
        EMPHASIS_RUN_MARKERS
            .iter()
            .map(|&(marker, ctor)| map(delimited_run(marker, Scope::Emphasis { marker }, &scope), ctor))
            .collect(),
    )
}

fn highlight(scope: &ScopeStack) -> Parser<Inline> {
    map(delimited_run("==", Scope::Highlight, scope), Inline::Highlight)
}

fn strikethrough(scope: &ScopeStack) -> Parser<Inline> {
    map(delimited_run("~~", Scope::Strikethrough, scope), Inline::Strikethrough)
}

fn sub(scope: &ScopeStack) -> Parser<Inline> {
    map(delimited_run("~", Scope::Sub, scope), Inline::Sub)
}

fn sup(scope: &ScopeStack) -> Parser<Inline> {
    map(delimited_run("^", Scope::Sup, scope), Inline::Sup)
}

fn code_span() -> Parser<Inline> {
    and_then(some(char('`')), |ticks: Vec<FatChar>| {
        let open = Tape::from_fatchars(ticks);
        let fence = open.text();
        and_then(many_unless(any_char(), wrap_try(token(&fence))), move |(body, terminator)| {
            if terminator.is_none() {
                return fail();
            }
            let open = open.clone();
            let body = Tape::from_fatchars(body);
            let fence = fence.clone();
            and_then(token(&fence), move |close| {
                pure(Inline::Code(Delimited { open: open.clone(), value: body.clone(), close }))
            })
        })
    })
}

fn link_label(scope: &ScopeStack) -> Parser<InSquareBrackets<Vec<Inline>>> {
    let inner_scope = scope.push(Scope::LinkLabel);
    and_then(char('['), move |open| {
        let inner_scope = inner_scope.clone();
        and_then(many_unless(inline_atom(&inner_scope), wrap_try(char(']'))), move |(content, terminator)| {
            if terminator.is_none() {
                return fail();
            }
            let open = Tape::from_fatchars(vec![open]);
            let content = content.clone();
            and_then(char(']'), move |close| {
                pure(InSquareBrackets { open: open.clone(), value: content.clone(), close: Tape::from_fatchars(vec![close]) })
            })
        })
    })
}

fn link_destination(scope: &ScopeStack) -> Parser<LinkDestination> {
    let inner_scope = scope.push(Scope::LinkDestination);
    and_then(char('('), move |open_paren| {
        let inner_scope = inner_scope.clone();
        and_then(many(char_while(&inner_scope, |c| c == '"' || c == '\n')), move |target| {
            let target = Tape::from_fatchars(target);
            let inner_scope = inner_scope.clone();
            and_then(crate::parser::optional(link_title(&inner_scope)), move |title| {
                let target = target.clone();
                let title = title.clone();
                let open_paren = Tape::from_fatchars(vec![open_paren]);
                and_then(char(')'), move |close_paren| {
                    pure(LinkDestination {
                        open_paren: open_paren.clone(),
                        target: target.clone(),
                        title: title.clone(),
                        close_paren: Tape::from_fatchars(vec![close_paren]),
                    })
                })
            })
        })
    })
}

fn link_title(scope: &ScopeStack) -> Parser<InDoubleQuotes<Tape>> {
    let inner_scope = scope.push(Scope::StringLiteral);
    and_then(char(' '), move |_| {
        let inner_scope = inner_scope.clone();
        and_then(char('"'), move |open| {
            let inner_scope = inner_scope.clone();
            and_then(many(char_while(&inner_scope, |c| c == '\n')), move |body| {
                let body = Tape::from_fatchars(body);
                let open = Tape::from_fatchars(vec![open]);
                and_then(char('"'), move |close| {
                    pure(InDoubleQuotes { open: open.clone(), value: body.clone(), close: Tape::from_fatchars(vec![close]) })
                })
            })
        })
    })
}

fn link(scope: &ScopeStack) -> Parser<Inline> {
    let scope = scope.clone();
    and_then(link_label(&scope), move |label| {
        let scope = scope.clone();
        map(link_destination(&scope), move |destination| Inline::Link(Link { label: label.clone(), destination }))
    })
}

fn image(scope: &ScopeStack) -> Parser<Inline> {
    let scope = scope.clone();
    and_then(char('!'), move |_| {
        let scope = scope.clone();
        and_then(link_label(&scope), move |label| {
            let scope = scope.clone();
            map(link_destination(&scope), move |destination| Inline::Image(Link { label: label.clone(), destination }))
        })
    })
}
