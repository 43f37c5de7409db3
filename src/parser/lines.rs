//! Indentation-aware line aggregation. Constructs like
//! blockquotes and list item continuations are defined in terms of a
//! *leader* that must reappear at the start of every physical line the
//! construct spans — `"> "` for a blockquote, a column-anchored indent
//! for a list item. `lines` walks those physical lines one at a time
//! and hands back everything verbatim, leader and newline included, so
//! no byte of the source is ever dropped on the floor.

use super::{Outcome, Parser, ParserState};
use crate::tape::{FatChar, Tape};

/// One physical line captured by `lines`. `leader.concat(&content)`,
/// followed by `newline` if present, reconstructs the line exactly as it
/// appeared in the source.
#[derive(Debug, Clone)]
pub struct Line {
    pub leader: Tape,
    pub content: Tape,
    pub newline: Option<Tape>,
}

/// Repeatedly matches `leader` at the start of a physical line, capturing
/// everything up to (but not including) the next newline, which is
/// captured separately. Stops at the first line `leader` fails to match,
/// or, if `terminator` is given, at the first line where `terminator`
/// matches as a pure lookahead before the leader is even attempted.
///
/// `Break`s if no line was captured at all.
pub fn lines<T: 'static>(leader: Parser<Tape>, terminator: Option<Parser<T>>) -> Parser<Vec<Line>> {
    Parser::new(move |mut state: ParserState| {
        let mut collected: Vec<Line> = Vec::new();

        loop {
            if let Some(term) = &terminator {
                let snapshot = state.clone();
                match term.run(state) {
                    Outcome::Continue(..) => {
                        state = snapshot;
                        break;
                    }
                    Outcome::Break(before) => state = before,
                }
            }

            let snapshot = state.clone();
            let (leader_tape, after_leader) = match leader.run(state) {
                Outcome::Continue(l, after) => (l, after),
                Outcome::Break(_) => {
                    state = snapshot;
                    break;
                }
            };

            let (content, newline, rest) = split_at_newline(&after_leader.tape);
            collected.push(Line { leader: leader_tape, content, newline });
            state = ParserState { tape: rest, debug_scopes: after_leader.debug_scopes };

            if collected.last().unwrap().newline.is_none() {
                // Ran off the end of input mid-line; nothing left to loop over.
                break;
            }
        }

        if collected.is_empty() {
            Outcome::Break(state)
        } else {
            Outcome::Continue(collected, state)
        }
    })
}

/// Splits `tape` into the content before the first newline, the newline
/// itself (as its own one-character `Tape`, so its position survives),
/// and whatever follows it. If there is no newline, the whole tape is
/// the content and both other parts are empty/absent.
fn split_at_newline(tape: &Tape) -> (Tape, Option<Tape>, Tape) {
    let chars: Vec<FatChar> = tape.iter().collect();
    match chars.iter().position(|c| c.value == '\n') {
        Some(idx) => (
            Tape::from_fatchars(chars[..idx].to_vec()),
            Some(Tape::from_fatchars(vec![chars[idx]])),
            Tape::from_fatchars(chars[idx + 1..].to_vec()),
        ),
        None => (Tape::from_fatchars(chars), None, Tape::empty()),
    }
}

/// Splits trailing spaces/tabs off `tape`, returning `(core, trailing)`.
/// Used by block-level grammar that needs to look past trailing
/// whitespace (e.g. to decide whether a line is "blank") without losing
/// it — the caller is expected to reattach `trailing` via `put_back`
/// wherever it belongs in the reconstructed tree.
pub fn split_trailing_whitespace(tape: &Tape) -> (Tape, Tape) {
    let chars: Vec<FatChar> = tape.iter().collect();
    let mut cut = chars.len();
    while cut > 0 && matches!(chars[cut - 1].value, ' ' | '\t') {
        cut -= 1;
    }
    (Tape::from_fatchars(chars[..cut].to_vec()), Tape::from_fatchars(chars[cut..].to_vec()))
}
