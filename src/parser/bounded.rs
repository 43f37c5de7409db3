//! Bounded sub-parsing: run a parser against an isolated region
//! of the tape so it cannot consume past that region's boundary, then
//! splice the leftover of the *outer* tape back on afterwards.

use super::{Outcome, Parser, ParserState};
use crate::tape::Tape;

/// `extract` carves a sub-tape (plus whatever remains of the outer tape)
/// out of the current state; `execute` then runs against a *fresh*
/// `ParserState` seeded with just that sub-tape, so it can never read
/// past the boundary `extract` chose. Any of the sub-tape `execute`
/// leaves unconsumed is simply dropped — it was never part of the outer
/// stream to begin with.
///
/// Returns the value `execute` produced (or `None` if it broke) together
/// with the outer state, advanced past the region `extract` carved out.
pub fn bounded<T: 'static>(
    extract: impl Fn(ParserState) -> Option<(Tape, ParserState)> + 'static,
    execute: Parser<T>,
) -> Parser<Option<T>> {
    Parser::new(move |state: ParserState| match extract(state) {
        None => Outcome::Continue(None, ParserState::new(Tape::empty())),
        Some((region, outer_rest)) => {
            let inner_state = ParserState { tape: region, debug_scopes: outer_rest.debug_scopes.clone() };
            let value = match execute.run(inner_state) {
                Outcome::Continue(v, _) => Some(v),
                Outcome::Break(_) => None,
            };
            Outcome::Continue(value, outer_rest)
        }
    })
}

/// The common case: the region is exactly `n` characters of the current
/// tape, and the outer tape resumes right after it.
pub fn bounded_by_length<T: 'static>(n: usize, execute: Parser<T>) -> Parser<Option<T>> {
    bounded(
        move |state: ParserState| {
            let (region, rest) = state.tape.take(n);
            if region.is_empty() {
                None
            } else {
                Some((region, ParserState { tape: rest, debug_scopes: state.debug_scopes }))
            }
        },
        execute,
    )
}
