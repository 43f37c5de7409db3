//! Bounded repetition. `sequence` is the core primitive; `many`,
//! `some`, and the `_unless`/`_until_end` families are all thin
//! projections over it.
//!
//! The no-progress guard and the iteration ceiling are the only
//! termination guarantees the grammar gets for free.

use super::{map, Outcome, Parser, ParserState};

/// Hard ceiling on loop iterations. Exceeding it indicates an
/// upstream grammar bug (a parser that "succeeds" without consuming
/// input outside the no-progress guard's reach); the loop terminates
/// rather than hanging, and a diagnostic is logged.
pub const ITERATION_CEILING: usize = 1000;

/// Configuration knobs for `sequence`.
///
/// `terminator`, when present, is tried before each item: if it
/// `Continue`s, the loop stops. Unless `consume_terminator` is set, the
/// terminator check never advances the tape (pure lookahead) and its
/// value is still reported to the caller. If `require_terminator` is
/// set, exiting the loop without the terminator ever matching is itself
/// a failure of the whole `sequence`.
pub struct SequenceConfig<T> {
    pub allow_empty: bool,
    pub terminator: Option<Parser<T>>,
    pub consume_terminator: bool,
    pub require_terminator: bool,
}

impl<T> SequenceConfig<T> {
    pub fn bare(allow_empty: bool) -> Self {
        SequenceConfig { allow_empty, terminator: None, consume_terminator: false, require_terminator: false }
    }
}

/// Repeat `item`, subject to the knobs in `config`. Returns the collected
/// items plus the terminator's value, if one was configured and matched.
pub fn sequence<A: 'static, T: 'static>(
    item: Parser<A>,
    config: SequenceConfig<T>,
) -> Parser<(Vec<A>, Option<T>)> {
    Parser::new(move |mut state: ParserState| {
        let mut items = Vec::new();
        let mut terminator_value = None;
        let mut iterations = 0usize;

        loop {
            if iterations >= ITERATION_CEILING {
                log::warn!(
                    "sequence: iteration ceiling ({ITERATION_CEILING}) reached at {:?}, terminating loop",
                    state.tape.position()
                );
                break;
            }
            iterations += 1;

            if let Some(term) = &config.terminator {
                let snapshot = state.clone();
                match term.run(state) {
                    Outcome::Continue(t, after) => {
                        state = if config.consume_terminator { after } else { snapshot };
                        terminator_value = Some(t);
                        break;
                    }
                    Outcome::Break(before) => state = before,
                }
            }

            let entry_len = state.tape.len();
            match item.run(state) {
                Outcome::Continue(value, after) => {
                    let made_progress = after.tape.len() != entry_len;
                    items.push(value);
                    state = after;
                    if !made_progress {
                        log::trace!("sequence: no-progress guard tripped, stopping loop");
                        break;
                    }
                }
                Outcome::Break(before) => {
                    state = before;
                    break;
                }
            }
        }

        if config.require_terminator && terminator_value.is_none() {
            return Outcome::Break(state);
        }
        if items.is_empty() && !config.allow_empty {
            return Outcome::Break(state);
        }
        Outcome::Continue((items, terminator_value), state)
    })
}

/// Zero or more.
pub fn many<A: 'static>(item: Parser<A>) -> Parser<Vec<A>> {
    map(sequence::<A, ()>(item, SequenceConfig::bare(true)), |(items, _)| items)
}

/// One or more.
pub fn some<A: 'static>(item: Parser<A>) -> Parser<Vec<A>> {
    map(sequence::<A, ()>(item, SequenceConfig::bare(false)), |(items, _)| items)
}

/// Zero or more, stopping *before* an optional terminator. Returns the
/// items plus the terminator's value if it matched (it is never
/// consumed).
pub fn many_unless<A: 'static, T: 'static>(item: Parser<A>, terminator: Parser<T>) -> Parser<(Vec<A>, Option<T>)> {
    sequence(
        item,
        SequenceConfig { allow_empty: true, terminator: Some(terminator), consume_terminator: false, require_terminator: false },
    )
}

/// One or more, stopping *before* an optional terminator.
pub fn some_unless<A: 'static, T: 'static>(item: Parser<A>, terminator: Parser<T>) -> Parser<(Vec<A>, Option<T>)> {
    sequence(
        item,
        SequenceConfig { allow_empty: false, terminator: Some(terminator), consume_terminator: false, require_terminator: false },
    )
}

/// Zero or more, then *require* (and consume) the terminator.
pub fn many_until_end<A: 'static, T: 'static>(item: Parser<A>, terminator: Parser<T>) -> Parser<(Vec<A>, T)> {
    map(
        sequence(
            item,
            SequenceConfig { allow_empty: true, terminator: Some(terminator), consume_terminator: true, require_terminator: true },
        ),
        |(items, t)| (items, t.expect("require_terminator guarantees Some")),
    )
}

/// One or more, then *require* (and consume) the terminator.
pub fn some_until_end<A: 'static, T: 'static>(item: Parser<A>, terminator: Parser<T>) -> Parser<(Vec<A>, T)> {
    map(
        sequence(
            item,
            SequenceConfig { allow_empty: false, terminator: Some(terminator), consume_terminator: true, require_terminator: true },
        ),
        |(items, t)| (items, t.expect("require_terminator guarantees Some")),
    )
}
