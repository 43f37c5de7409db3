//! Input tape (C1): a position-annotated character stream with cheap
//! structural sharing, so that `put_back` and sub-tape isolation (the
//! bounded sub-parsing primitive in `parser::bounded`) stay affordable on
//! deeply nested documents instead of falling into the naive O(n^2) trap a
//! copy-per-slice `Vec` would hit.

use std::fmt;
use std::sync::Arc;

/// A source position: character offset, column, and line, all starting at
/// zero. Advancing by one character increments `character_offset`; a
/// newline resets `column` to zero and increments `line`, otherwise
/// `column` increments by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub character_offset: usize,
    pub column: usize,
    pub line: usize,
}

impl Position {
    pub const START: Position = Position { character_offset: 0, column: 0, line: 0 };

    /// The position immediately after consuming `c` from this position.
    pub fn advance(self, c: char) -> Position {
        if c == '\n' {
            Position {
                character_offset: self.character_offset + 1,
                column: 0,
                line: self.line + 1,
            }
        } else {
            Position {
                character_offset: self.character_offset + 1,
                column: self.column + 1,
                line: self.line,
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// One character plus its source position. Immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FatChar {
    pub value: char,
    pub position: Position,
}

/// A finite ordered sequence of `FatChar`, backed by a reference-counted
/// shared slice so that slicing (`take`, `split_prefix`, sub-tape
/// extraction for bounded parsing) and cloning are O(1).
///
/// Positions inside a tape need not start at zero: sub-tapes carry their
/// parent's positions, which is what makes the indentation logic in the
/// block grammar (`grammar::block`) workable without renumbering.
#[derive(Clone)]
pub struct Tape {
    chars: Arc<[FatChar]>,
    start: usize,
    len: usize,
}

impl Tape {
    pub fn from_str(source: &str) -> Self {
        let mut chars = Vec::with_capacity(source.len());
        let mut pos = Position::START;
        for c in source.chars() {
            chars.push(FatChar { value: c, position: pos });
            pos = pos.advance(c);
        }
        Tape::from_fatchars(chars)
    }

    pub fn from_fatchars(chars: Vec<FatChar>) -> Self {
        let len = chars.len();
        Tape { chars: Arc::from(chars), start: 0, len }
    }

    pub fn empty() -> Self {
        Tape::from_fatchars(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    fn as_slice(&self) -> &[FatChar] {
        &self.chars[self.start..self.start + self.len]
    }

    pub fn head(&self) -> Option<FatChar> {
        self.as_slice().first().copied()
    }

    /// Split into the first character and the remaining tape, if non-empty.
    pub fn uncons(&self) -> Option<(FatChar, Tape)> {
        let slice = self.as_slice();
        slice.first().map(|c| {
            (
                *c,
                Tape { chars: Arc::clone(&self.chars), start: self.start + 1, len: self.len - 1 },
            )
        })
    }

    /// The first `n` characters (or fewer, if the tape is shorter) and the
    /// remainder, as a pair.
    pub fn take(&self, n: usize) -> (Tape, Tape) {
        let n = n.min(self.len);
        let head = Tape { chars: Arc::clone(&self.chars), start: self.start, len: n };
        let tail = Tape {
            chars: Arc::clone(&self.chars),
            start: self.start + n,
            len: self.len - n,
        };
        (head, tail)
    }

    /// Match `s` character-by-character against the head of the tape.
    /// Returns the matched prefix and remainder, or `None` if `s` is not a
    /// prefix of this tape's text.
    pub fn split_prefix(&self, s: &str) -> Option<(Tape, Tape)> {
        let want: Vec<char> = s.chars().collect();
        if want.len() > self.len {
            return None;
        }
        let have = &self.as_slice()[..want.len()];
        if have.iter().map(|c| c.value).eq(want.iter().copied()) {
            Some(self.take(want.len()))
        } else {
            None
        }
    }

    /// Concatenate `self` followed by `other`. Used by `put_back`: the two
    /// tapes need not share the same backing array, so this always
    /// allocates a fresh one.
    pub fn concat(&self, other: &Tape) -> Tape {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let mut chars = Vec::with_capacity(self.len + other.len);
        chars.extend(self.iter());
        chars.extend(other.iter());
        Tape::from_fatchars(chars)
    }

    /// Keep only characters matching `pred`, in order.
    pub fn filter(&self, pred: impl Fn(char) -> bool) -> Tape {
        Tape::from_fatchars(self.iter().filter(|c| pred(c.value)).collect())
    }

    /// Split on newlines, map each line's tape through `f`, then rejoin
    /// with newline `FatChar`s taken from the original tape.
    pub fn map_lines(&self, f: impl Fn(Tape) -> Tape) -> Tape {
        let mut result = Vec::with_capacity(self.len);
        let mut current = Vec::new();
        for c in self.iter() {
            if c.value == '\n' {
                result.extend(f(Tape::from_fatchars(std::mem::take(&mut current))).iter());
                result.push(c);
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() {
            result.extend(f(Tape::from_fatchars(current)).iter());
        }
        Tape::from_fatchars(result)
    }

    pub fn iter(&self) -> impl Iterator<Item = FatChar> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn text(&self) -> String {
        self.iter().map(|c| c.value).collect()
    }

    pub fn position(&self) -> Option<Position> {
        self.head().map(|c| c.position)
    }

    /// Cheap-first equality used by the no-progress guard (`parser::repetition`):
    /// same length and same head position is sufficient proof that two
    /// tapes are the same unconsumed suffix of the same source, without
    /// comparing every character. Falls back to character-by-character
    /// comparison (ignoring position) when the fast path can't
    /// decide.
    pub fn content_eq(&self, other: &Tape) -> bool {
        if self.len != other.len {
            return false;
        }
        match (self.head(), other.head()) {
            (None, None) => true,
            (Some(a), Some(b)) if a.position == b.position => true,
            _ => self.iter().map(|c| c.value).eq(other.iter().map(|c| c.value)),
        }
    }
}

impl fmt::Debug for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tape({:?})", self.text())
    }
}

impl PartialEq for Tape {
    fn eq(&self, other: &Self) -> bool {
        self.content_eq(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_positions_advance_correctly() {
        let tape = Tape::from_str("ab\ncd");
        let chars: Vec<FatChar> = tape.iter().collect();
        assert_eq!(chars[0].position, Position { character_offset: 0, column: 0, line: 0 });
        assert_eq!(chars[1].position, Position { character_offset: 1, column: 1, line: 0 });
        assert_eq!(chars[2].position, Position { character_offset: 2, column: 2, line: 0 });
        assert_eq!(chars[3].position, Position { character_offset: 3, column: 0, line: 1 });
    }

    #[test]
    fn split_prefix_matches_and_advances() {
        let tape = Tape::from_str("> quote");
        let (matched, rest) = tape.split_prefix("> ").expect("prefix should match");
        assert_eq!(matched.text(), "> ");
        assert_eq!(rest.text(), "quote");
    }

    #[test]
    fn split_prefix_rejects_mismatch() {
        let tape = Tape::from_str("hello");
        assert!(tape.split_prefix("world").is_none());
    }

    #[test]
    fn concat_preserves_positions_from_each_side() {
        let a = Tape::from_str("ab");
        let b = Tape::from_str("cd");
        let joined = a.concat(&b);
        assert_eq!(joined.text(), "abcd");
    }

    #[test]
    fn losslessness_round_trip_via_iter() {
        let source = "Alpha *Beta* `code` end";
        let tape = Tape::from_str(source);
        assert_eq!(tape.text(), source);
    }
}
