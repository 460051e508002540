// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grammar configuration and expansion.

extern crate alloc;

use alloc::string::String;

use hashbrown::HashMap;

/// The symbol vocabulary the turtle passes understand.
///
/// Characters outside this set are valid terminals: the expander keeps them
/// and the walker reports them as markers, so a grammar is free to carry
/// placement-only symbols (the default grammar's `X` is one).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// `F`: advance and draw one segment.
    Forward,
    /// `+`: turn by the configured angle (positive rotation).
    TurnLeft,
    /// `-`: turn by the configured angle (negative rotation).
    TurnRight,
    /// `[`: push the turtle state.
    BranchOpen,
    /// `]`: pop and restore the turtle state.
    BranchClose,
    /// Any other character; a no-op for geometry, visible to visitors as a
    /// marker (used for ornament placement).
    Marker(char),
}

impl Symbol {
    /// Classifies a sequence character.
    pub fn from_char(c: char) -> Self {
        match c {
            'F' => Self::Forward,
            '+' => Self::TurnLeft,
            '-' => Self::TurnRight,
            '[' => Self::BranchOpen,
            ']' => Self::BranchClose,
            other => Self::Marker(other),
        }
    }
}

/// An L-system grammar: axiom, rewrite rules, and turtle parameters.
///
/// Immutable after configuration; together with the iteration count this
/// defines the entire plant shape. Symbols without a rule are terminals by
/// design, not errors.
#[derive(Clone, Debug)]
pub struct Grammar {
    axiom: String,
    rules: HashMap<char, String>,
    iterations: usize,
    angle_deg: f64,
    base_length: f64,
}

impl Grammar {
    /// Creates a grammar with no rules, a 25° turn angle and unit segments.
    pub fn new(axiom: impl Into<String>) -> Self {
        Self {
            axiom: axiom.into(),
            rules: HashMap::new(),
            iterations: 0,
            angle_deg: 25.0,
            base_length: 1.0,
        }
    }

    /// The bushy branching plant the engine ships with.
    ///
    /// `X -> F[+X][-X]FX`, `F -> FF`, 35°, 5 generations, 18-unit segments.
    /// Five generations of these rules expand to several thousand symbols.
    pub fn plant() -> Self {
        Self::new("X")
            .with_rule('X', "F[+X][-X]FX")
            .with_rule('F', "FF")
            .with_angle(35.0)
            .with_iterations(5)
            .with_base_length(18.0)
    }

    /// Adds a replacement rule for `symbol`.
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.rules.insert(symbol, replacement.into());
        self
    }

    /// Sets the number of rewrite generations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the turn angle in degrees.
    pub fn with_angle(mut self, angle_deg: f64) -> Self {
        self.angle_deg = angle_deg;
        self
    }

    /// Sets the base segment length in scalar units.
    pub fn with_base_length(mut self, base_length: f64) -> Self {
        self.base_length = base_length;
        self
    }

    /// Returns the turn angle in degrees.
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    /// Returns the base segment length.
    pub fn base_length(&self) -> f64 {
        self.base_length
    }

    /// Expands the axiom through the configured number of generations.
    ///
    /// Each generation replaces every symbol simultaneously: the replacement
    /// of one symbol is never re-scanned within the same generation. Zero
    /// iterations return the axiom unchanged. Termination for finite N is
    /// structural; whether the result stays tractably sized is the grammar
    /// author's responsibility.
    pub fn expand(&self) -> String {
        let mut current = self.axiom.clone();
        for _ in 0..self.iterations {
            let mut next = String::with_capacity(current.len() * 2);
            for c in current.chars() {
                match self.rules.get(&c) {
                    Some(replacement) => next.push_str(replacement),
                    None => next.push(c),
                }
            }
            current = next;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn zero_iterations_is_identity() {
        let g = Grammar::new("X+F").with_rule('X', "FF").with_iterations(0);
        assert_eq!(g.expand(), "X+F");
    }

    #[test]
    fn expanding_an_expansion_zero_more_times_is_a_noop() {
        let expanded = Grammar::plant().expand();
        let again = Grammar::new(expanded.clone()).with_iterations(0).expand();
        assert_eq!(expanded, again);
    }

    #[test]
    fn symbols_without_rules_are_kept() {
        let g = Grammar::new("A?B").with_rule('A', "AA").with_iterations(2);
        assert_eq!(g.expand(), "AAAA?B");
    }

    #[test]
    fn replacement_is_simultaneous_not_sequential() {
        // If expansion re-scanned its own output, F -> FF would blow up
        // within a single generation instead of exactly doubling.
        let g = Grammar::new("FF").with_rule('F', "FF").with_iterations(3);
        assert_eq!(g.expand().len(), 16);
    }

    #[test]
    fn plant_grammar_expands_to_thousands_of_symbols() {
        let s = Grammar::plant().expand();
        // One generation of X -> F[+X][-X]FX grows the sequence several
        // times over; after five the engine must tolerate thousands.
        assert!(s.len() > 1_000, "unexpectedly short expansion: {}", s.len());
        assert!(s.contains('F') && s.contains('[') && s.contains(']'));
    }
}
