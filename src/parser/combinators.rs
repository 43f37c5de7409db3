//! Character- and text-level combinators, plus the small tuple
//! combinators used to glue sequential parses together.

use super::{and_then, map, Outcome, Parser, ParserState};
use crate::tape::{FatChar, Tape};

/// Consume one character, whatever it is. Fails on empty input.
pub fn any_char() -> Parser<FatChar> {
    Parser::new(|state: ParserState| match state.tape.uncons() {
        Some((c, rest)) => Outcome::Continue(c, ParserState { tape: rest, debug_scopes: state.debug_scopes }),
        None => Outcome::Break(state),
    })
}

/// Consume one character matching `pred`; fails if the input is empty or
/// the head character doesn't satisfy `pred`.
pub fn char_if(pred: impl Fn(char) -> bool + 'static) -> Parser<FatChar> {
    Parser::new(move |state: ParserState| match state.tape.uncons() {
        Some((c, rest)) if pred(c.value) => {
            Outcome::Continue(c, ParserState { tape: rest, debug_scopes: state.debug_scopes })
        }
        _ => Outcome::Break(state),
    })
}

/// Consume exactly `c`.
pub fn char(c: char) -> Parser<FatChar> {
    char_if(move |x| x == c)
}

/// Consume the exact string `s` from the head of the tape, returning the
/// matched sub-tape (so its original positions are preserved).
pub fn token(s: &str) -> Parser<Tape> {
    let s = s.to_string();
    Parser::new(move |state: ParserState| match state.tape.split_prefix(&s) {
        Some((matched, rest)) => Outcome::Continue(matched, ParserState { tape: rest, debug_scopes: state.debug_scopes }),
        None => Outcome::Break(state),
    })
}

/// Zero or more spaces/tabs (not newlines).
pub fn whitespace() -> Parser<Tape> {
    map(super::repetition::many(char_if(|c| c == ' ' || c == '\t')), Tape::from_fatchars)
}

/// One or more non-newline characters.
pub fn rest_of_line() -> Parser<Tape> {
    map(super::repetition::some(char_if(|c| c != '\n')), Tape::from_fatchars)
}

pub fn newline() -> Parser<FatChar> {
    char('\n')
}

pub fn space() -> Parser<FatChar> {
    char(' ')
}

pub fn digit() -> Parser<FatChar> {
    char_if(|c| c.is_ascii_digit())
}

/// Sequential pair. `A` must be `Clone` because the combinator may be
/// run more than once (e.g. nested inside `many`), and each run needs
/// its own copy of the first result to pair with the second.
pub fn and<A: Clone + 'static, B: 'static>(p: Parser<A>, q: Parser<B>) -> Parser<(A, B)> {
    and_then(p, move |a| map(q.clone(), move |b| (a.clone(), b)))
}

/// Sequential triple.
pub fn and2<A: Clone + 'static, B: Clone + 'static, C: 'static>(
    p: Parser<A>,
    q: Parser<B>,
    r: Parser<C>,
) -> Parser<(A, B, C)> {
    map(and(and(p, q), r), |((a, b), c)| (a, b, c))
}

/// Sequential quadruple.
pub fn and3<A: Clone + 'static, B: Clone + 'static, C: Clone + 'static, D: 'static>(
    p: Parser<A>,
    q: Parser<B>,
    r: Parser<C>,
    s: Parser<D>,
) -> Parser<(A, B, C, D)> {
    map(and(and2(p, q, r), s), |((a, b, c), d)| (a, b, c, d))
}

/// `open . p . close`, returning the triple.
pub fn between<O: Clone + 'static, P: Clone + 'static, C: 'static>(
    p: Parser<P>,
    open: Parser<O>,
    close: Parser<C>,
) -> Parser<(O, P, C)> {
    and2(open, p, close)
}

/// `between` where the same parser is used for both delimiters.
pub fn between_both<D: Clone + 'static, P: Clone + 'static>(
    p: Parser<P>,
    delim: Parser<D>,
) -> Parser<(D, P, D)> {
    and2(delim.clone(), p, delim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::evaluate;

    #[test]
    fn token_matches_exact_literal() {
        let p = token("###");
        let (value, state) = evaluate(&p, "### Heading");
        assert_eq!(value.unwrap().text(), "###");
        assert_eq!(state.tape.text(), " Heading");
    }

    #[test]
    fn whitespace_consumes_spaces_and_tabs_only() {
        let p = whitespace();
        let (value, state) = evaluate(&p, "  \tx");
        assert_eq!(value.unwrap().text(), "  \t");
        assert_eq!(state.tape.text(), "x");
    }

    #[test]
    fn and_pairs_two_parsers_in_sequence() {
        let p = and(token("foo"), token("bar"));
        let (value, state) = evaluate(&p, "foobarbaz");
        let (a, b) = value.unwrap();
        assert_eq!(a.text(), "foo");
        assert_eq!(b.text(), "bar");
        assert_eq!(state.tape.text(), "baz");
    }

    #[test]
    fn between_both_reuses_the_same_delimiter() {
        let p = between_both(token("abc"), char('"'));
        let (value, state) = evaluate(&p, "\"abc\"");
        let (open, body, close) = value.unwrap();
        assert_eq!(open.value, '"');
        assert_eq!(close.value, '"');
        assert_eq!(body.text(), "abc");
        assert!(state.tape.is_empty());
    }
}
