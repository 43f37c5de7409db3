//! Generic parser-combinator monad (C2) and the standard combinator
//! library built on top of it (C3). `Parser<A>` is an opaque value
//! wrapping a function from `ParserState` to `Outcome<A>`; every
//! combinator in this module and its children is pure and immutable —
//! running a parser never mutates anything it was handed, it only
//! produces new values.

pub mod bounded;
pub mod combinators;
pub mod control_flow;
pub mod lines;
pub mod repetition;

use std::rc::Rc;

use crate::tape::Tape;

/// The parser's view of unconsumed input plus diagnostic scopes.
/// `debug_scopes` is purely informational: it never influences parsing
/// outcomes (see `with_debug_label` below).
#[derive(Debug, Clone)]
pub struct ParserState {
    pub tape: Tape,
    pub debug_scopes: Vec<String>,
}

impl ParserState {
    pub fn new(tape: Tape) -> Self {
        ParserState { tape, debug_scopes: Vec::new() }
    }
}

/// The result of one parser invocation. A `Break` always carries
/// the state exactly as it was handed to the failing parser — no partial
/// consumption ever escapes a failure.
#[derive(Debug)]
pub enum Outcome<A> {
    Continue(A, ParserState),
    Break(ParserState),
}

impl<A> Outcome<A> {
    pub fn is_continue(&self) -> bool {
        matches!(self, Outcome::Continue(..))
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Outcome::Break(_))
    }
}

type RunFn<A> = dyn Fn(ParserState) -> Outcome<A>;

/// An opaque, composable parsing action: a function from `ParserState` to
/// `Outcome<A>`. Cloning a `Parser` is O(1) (it shares the underlying
/// closure via `Rc`), which is what lets combinators like
/// `between_both` reuse the same parser value for both delimiters.
pub struct Parser<A> {
    run: Rc<RunFn<A>>,
}

impl<A> Clone for Parser<A> {
    fn clone(&self) -> Self {
        Parser { run: Rc::clone(&self.run) }
    }
}

impl<A: 'static> Parser<A> {
    pub fn new(run: impl Fn(ParserState) -> Outcome<A> + 'static) -> Self {
        Parser { run: Rc::new(run) }
    }

    pub fn run(&self, state: ParserState) -> Outcome<A> {
        (self.run)(state)
    }
}

/// Succeeds with `value`, consuming nothing.
pub fn pure<A: Clone + 'static>(value: A) -> Parser<A> {
    Parser::new(move |state| Outcome::Continue(value.clone(), state))
}

/// Always `Break`s, consuming nothing.
pub fn fail<A: 'static>() -> Parser<A> {
    Parser::new(Outcome::Break)
}

/// Run `p`; if it `Continue`s, run `f(a)` on the resulting state. A
/// `Break` from `p` short-circuits.
pub fn and_then<A: 'static, B: 'static>(
    p: Parser<A>,
    f: impl Fn(A) -> Parser<B> + 'static,
) -> Parser<B> {
    Parser::new(move |state| match p.run(state) {
        Outcome::Continue(a, state2) => f(a).run(state2),
        Outcome::Break(state2) => Outcome::Break(state2),
    })
}

/// `map(p, f) = and_then(p, |a| pure(f(a)))`, specialized so `f`'s result
/// doesn't need to be `Clone`.
pub fn map<A: 'static, B: 'static>(p: Parser<A>, f: impl Fn(A) -> B + 'static) -> Parser<B> {
    Parser::new(move |state| match p.run(state) {
        Outcome::Continue(a, state2) => Outcome::Continue(f(a), state2),
        Outcome::Break(state2) => Outcome::Break(state2),
    })
}

/// Run `p`; on `Break`, run `q` on the state exactly as it was *before*
/// `p` was attempted (full backtracking, no commit points).
pub fn or<A: 'static>(p: Parser<A>, q: Parser<A>) -> Parser<A> {
    Parser::new(move |state: ParserState| {
        let snapshot = state.clone();
        match p.run(state) {
            c @ Outcome::Continue(..) => c,
            Outcome::Break(_) => q.run(snapshot),
        }
    })
}

/// Left-to-right `or` over a sequence; the first `Continue`s wins and
/// later alternatives are never evaluated.
pub fn options<A: 'static>(ps: Vec<Parser<A>>) -> Parser<A> {
    let mut iter = ps.into_iter();
    match iter.next() {
        None => fail(),
        Some(first) => iter.fold(first, or),
    }
}

/// Tags which branch of an `or` succeeded.
#[derive(Debug, Clone)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

/// Like `or`, but tags the result `Left`/`Right` instead of unifying the
/// two branches' types.
pub fn either_or<A: 'static, B: 'static>(p: Parser<A>, q: Parser<B>) -> Parser<Either<A, B>> {
    Parser::new(move |state: ParserState| {
        let snapshot = state.clone();
        match p.run(state) {
            Outcome::Continue(a, state2) => Outcome::Continue(Either::Left(a), state2),
            Outcome::Break(_) => match q.run(snapshot) {
                Outcome::Continue(b, state2) => Outcome::Continue(Either::Right(b), state2),
                Outcome::Break(state2) => Outcome::Break(state2),
            },
        }
    })
}

/// If `p` breaks, `Continue` with an absent value and the state
/// unchanged; never itself `Break`s.
pub fn optional<A: 'static>(p: Parser<A>) -> Parser<Option<A>> {
    Parser::new(move |state: ParserState| {
        let snapshot = state.clone();
        match p.run(state) {
            Outcome::Continue(a, state2) => Outcome::Continue(Some(a), state2),
            Outcome::Break(_) => Outcome::Continue(None, snapshot),
        }
    })
}

/// Prepend `tape` to the current input, then run `p`. Used to push
/// trailing whitespace that an aggregation combinator (`lines`) stripped
/// back onto the outer stream.
pub fn put_back<A: 'static>(tape: Tape, p: Parser<A>) -> Parser<A> {
    Parser::new(move |state: ParserState| {
        let combined = tape.concat(&state.tape);
        p.run(ParserState { tape: combined, debug_scopes: state.debug_scopes })
    })
}

/// Wrap `p` so that `label` is pushed onto `debug_scopes` before running
/// it, on both success and failure. Purely diagnostic — never changes
/// what `p` returns besides the scope trail.
pub fn with_debug_label<A: 'static>(label: impl Into<String>, p: Parser<A>) -> Parser<A> {
    let label = label.into();
    Parser::new(move |mut state: ParserState| {
        state.debug_scopes.push(label.clone());
        log::trace!("entering scope {label:?}");
        match p.run(state) {
            c @ Outcome::Continue(..) => c,
            Outcome::Break(state2) => {
                log::debug!("scope {label:?} broke at {:?}", state2.tape.position());
                Outcome::Break(state2)
            }
        }
    })
}

/// Root entry point: construct the initial state from `source` and run
/// `p` against it.
pub fn evaluate<A: 'static>(p: &Parser<A>, source: &str) -> (Option<A>, ParserState) {
    let state = ParserState::new(Tape::from_str(source));
    match p.run(state) {
        Outcome::Continue(a, state2) => (Some(a), state2),
        Outcome::Break(state2) => (None, state2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_and_then_law() {
        let p = and_then(pure(3), |a| pure(a + 1));
        let (value, _) = evaluate(&p, "");
        assert_eq!(value, Some(4));
    }

    #[test]
    fn and_then_pure_law() {
        let p = and_then(pure(3), pure);
        let (value, _) = evaluate(&p, "");
        assert_eq!(value, Some(3));
    }

    #[test]
    fn or_backtracks_to_original_state() {
        let p: Parser<char> = fail();
        let q = Parser::new(|state: ParserState| match state.tape.uncons() {
            Some((c, rest)) => Outcome::Continue(c.value, ParserState { tape: rest, debug_scopes: state.debug_scopes }),
            None => Outcome::Break(state),
        });
        let combined = or(p, q);
        let (value, state) = evaluate(&combined, "x");
        assert_eq!(value, Some('x'));
        assert!(state.tape.is_empty());
    }

    #[test]
    fn optional_never_breaks() {
        let p: Parser<char> = fail();
        let wrapped = optional(p);
        let (value, state) = evaluate(&wrapped, "abc");
        assert_eq!(value, Some(None));
        assert_eq!(state.tape.text(), "abc");
    }

    #[test]
    fn either_or_tags_the_branch_that_succeeded() {
        let digit = crate::parser::combinators::digit();
        let letter = crate::parser::combinators::char('x');
        let p = either_or(digit, letter);
        let (value, _) = evaluate(&p, "x");
        assert!(matches!(value, Some(Either::Right(_))));
    }
}
