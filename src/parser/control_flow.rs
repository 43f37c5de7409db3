//! Control-flow parsers: zero-cost lookaheads that report
//! whether a condition currently holds, without consuming any input.

use super::{Outcome, Parser, ParserState};

/// The result of a control-flow check. `Continue` means "keep going",
/// `Break` means "stop" — the same polarity as `std::ops::ControlFlow`,
/// not the polarity of the condition parser that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Break,
}

/// Run `p` as a pure lookahead: `Continue` iff `p` `Continue`s, `Break`
/// iff `p` `Break`s. Never consumes input either way.
pub fn wrap_try<A: 'static>(p: Parser<A>) -> Parser<ControlFlow> {
    Parser::new(move |state: ParserState| {
        let snapshot = state.clone();
        match p.run(state) {
            Outcome::Continue(..) => Outcome::Continue(ControlFlow::Continue, snapshot),
            Outcome::Break(_) => Outcome::Continue(ControlFlow::Break, snapshot),
        }
    })
}

/// Logical negation of a `ControlFlow`-producing parser.
pub fn flip(p: Parser<ControlFlow>) -> Parser<ControlFlow> {
    super::map(p, |cf| match cf {
        ControlFlow::Continue => ControlFlow::Break,
        ControlFlow::Break => ControlFlow::Continue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::combinators::token;
    use crate::parser::evaluate;

    #[test]
    fn wrap_try_reports_without_consuming() {
        let p = wrap_try(token("abc"));
        let (value, state) = evaluate(&p, "abc");
        assert_eq!(value, Some(ControlFlow::Continue));
        assert_eq!(state.tape.text(), "abc");
    }

    #[test]
    fn flip_negates_wrap_try() {
        let p = flip(wrap_try(token("xyz")));
        let (value, state) = evaluate(&p, "abc");
        assert_eq!(value, Some(ControlFlow::Continue));
        assert_eq!(state.tape.text(), "abc");

        let p2 = flip(wrap_try(token("abc")));
        let (value2, _) = evaluate(&p2, "abc");
        assert_eq!(value2, Some(ControlFlow::Break));
    }
}
