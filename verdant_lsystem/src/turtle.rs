// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared turtle walker.
//!
//! Both the geometry analyzer and the render pipeline interpret the same
//! symbol sequence with the same stack discipline. Defining the traversal
//! once and parameterizing it over a visitor keeps the two passes in
//! lock-step: a branch pushed in one pass cannot be leaked in the other.

use smallvec::SmallVec;

use crate::grammar::Symbol;

/// Errors from walking a symbol sequence.
///
/// Both variants mean the grammar is malformed; the engine refuses to start
/// rather than render a corrupt structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkError {
    /// A `]` with no matching `[`, at the given sequence index.
    UnmatchedClose {
        /// Index of the offending close symbol.
        index: usize,
    },
    /// The sequence ended with branches still open.
    UnclosedBranch {
        /// How many branches were left open.
        depth: usize,
    },
}

impl core::fmt::Display for WalkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnmatchedClose { index } => {
                write!(f, "unmatched branch close at symbol {index}")
            }
            Self::UnclosedBranch { depth } => {
                write!(f, "{depth} branch(es) left open at end of sequence")
            }
        }
    }
}

impl core::error::Error for WalkError {}

/// A per-symbol visitor over a turtle walk.
///
/// The walker owns the branch stack; visitors only say what their state *is*
/// (`State`) and how to act on the geometric symbols. The measure pass keeps
/// a position and heading; the draw pass keeps a full 2D transform.
pub trait TurtleVisitor {
    /// The state saved on branch open and restored on branch close.
    type State;

    /// Captures the current state for a branch open.
    fn snapshot(&self) -> Self::State;

    /// Restores a previously captured state on branch close.
    fn restore(&mut self, state: Self::State);

    /// An `F` symbol: advance one segment.
    fn forward(&mut self, index: usize);

    /// A `+`/`-` symbol: turn by the configured angle, `sign` is ±1.
    fn turn(&mut self, index: usize, sign: f64);

    /// Any non-geometric symbol (the default grammar's `X`, or unknown
    /// terminals). Measurement ignores these; drawing hangs fruit off them.
    fn marker(&mut self, index: usize, symbol: char);
}

/// Walks `sequence`, dispatching each symbol to `visitor`.
///
/// Guarantees balanced stack discipline: every `[` pushes exactly one state
/// and every `]` pops exactly one, and the walk fails if the two do not pair
/// up. On success the internal stack is provably empty.
pub fn walk<V: TurtleVisitor>(sequence: &str, visitor: &mut V) -> Result<(), WalkError> {
    let mut stack: SmallVec<[V::State; 16]> = SmallVec::new();

    for (index, c) in sequence.chars().enumerate() {
        match Symbol::from_char(c) {
            Symbol::Forward => visitor.forward(index),
            Symbol::TurnLeft => visitor.turn(index, 1.0),
            Symbol::TurnRight => visitor.turn(index, -1.0),
            Symbol::BranchOpen => stack.push(visitor.snapshot()),
            Symbol::BranchClose => match stack.pop() {
                Some(state) => visitor.restore(state),
                None => return Err(WalkError::UnmatchedClose { index }),
            },
            Symbol::Marker(c) => visitor.marker(index, c),
        }
    }

    if stack.is_empty() {
        Ok(())
    } else {
        Err(WalkError::UnclosedBranch { depth: stack.len() })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;
    use crate::grammar::Grammar;

    /// Records the walk as a flat event list.
    #[derive(Default)]
    struct Recorder {
        events: Vec<(usize, char)>,
    }

    impl TurtleVisitor for Recorder {
        type State = ();

        fn snapshot(&self) {}

        fn restore(&mut self, _state: ()) {}

        fn forward(&mut self, index: usize) {
            self.events.push((index, 'F'));
        }

        fn turn(&mut self, index: usize, sign: f64) {
            self.events.push((index, if sign > 0.0 { '+' } else { '-' }));
        }

        fn marker(&mut self, index: usize, symbol: char) {
            self.events.push((index, symbol));
        }
    }

    #[test]
    fn dispatches_every_symbol_in_order() {
        let mut v = Recorder::default();
        // No branches here; just ordering.
        walk("F+X-F?", &mut v).unwrap();
        let chars: Vec<char> = v.events.iter().map(|&(_, c)| c).collect();
        assert_eq!(chars, ['F', '+', 'X', '-', 'F', '?']);
        let indices: Vec<usize> = v.events.iter().map(|&(i, _)| i).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn balanced_branches_walk_cleanly() {
        let mut v = Recorder::default();
        assert_eq!(walk("F[+F[-F]]F[F]", &mut v), Ok(()));
    }

    #[test]
    fn unmatched_close_is_reported_with_its_index() {
        let mut v = Recorder::default();
        assert_eq!(
            walk("F[F]]F", &mut v),
            Err(WalkError::UnmatchedClose { index: 4 })
        );
    }

    #[test]
    fn unclosed_branches_are_reported_with_depth() {
        let mut v = Recorder::default();
        assert_eq!(
            walk("F[[F", &mut v),
            Err(WalkError::UnclosedBranch { depth: 2 })
        );
    }

    #[test]
    fn plant_grammar_produces_a_balanced_sequence() {
        let sequence = Grammar::plant().expand();
        let mut v = Recorder::default();
        assert_eq!(walk(&sequence, &mut v), Ok(()));
    }
}
