//! Test utilities for step finders.
//!
//! [`StepTester`] plays the role the source's `TechniqueTester` played for
//! grid-mutating techniques, adapted to pure step finders: it holds a grid
//! with candidates computed, runs a [`FinderFn`](crate::technique::FinderFn)
//! against it, and applies the resulting steps so assertions can check the
//! grid afterward.

use std::str::FromStr as _;

use sudoku_core::{basic_solve::init_candidates, Digit, DigitSet, Grid, Position};

use crate::step::SolveStep;
use crate::technique::FinderFn;

/// A test harness for verifying step finders.
#[derive(Debug)]
pub struct StepTester {
    grid: Grid,
}

impl StepTester {
    /// Creates a tester from an already-built grid, computing candidates for
    /// every cell that doesn't have any yet.
    #[must_use]
    pub fn new(mut grid: Grid) -> Self {
        init_candidates(&mut grid, false);
        Self { grid }
    }

    /// Creates a tester from a grid string (see [`Grid`]'s `FromStr` impl),
    /// with candidates computed for every empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid grid.
    #[track_caller]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self::new(Grid::from_str(s).expect("valid grid string"))
    }

    /// Runs `finder` against the current grid, returning the steps it found.
    #[must_use]
    pub fn run(&self, finder: FinderFn) -> Vec<SolveStep> {
        finder(&self.grid)
    }

    /// Applies every given step to the current grid, in order, and returns
    /// self for chaining.
    ///
    /// # Panics
    ///
    /// Panics if a step addresses a cell out of range for this grid.
    #[track_caller]
    pub fn apply(mut self, steps: &[SolveStep]) -> Self {
        for step in steps {
            step.apply(&mut self.grid).expect("step targets this grid's cells");
        }
        self
    }

    /// Asserts that the given cell now holds exactly `value`.
    ///
    /// # Panics
    ///
    /// Panics if the cell's current value differs.
    #[track_caller]
    #[must_use]
    pub fn assert_number(self, pos: Position, value: u8) -> Self {
        let current = self.grid.get(pos).expect("pos in range");
        assert_eq!(
            current, value,
            "expected {pos:?} to hold {value}, but it holds {current}"
        );
        self
    }

    /// Asserts that the given cell's candidates equal `expected` exactly.
    ///
    /// # Panics
    ///
    /// Panics if the cell's current candidates differ.
    #[track_caller]
    #[must_use]
    pub fn assert_candidates(self, pos: Position, expected: DigitSet) -> Self {
        let current = self.grid.get_candidates(pos).expect("pos in range");
        assert_eq!(
            current, expected,
            "expected candidates at {pos:?} to be {expected:?}, but found {current:?}"
        );
        self
    }

    /// Asserts that `digit` has been removed as a candidate of `pos`.
    ///
    /// # Panics
    ///
    /// Panics if the cell's current candidates still contain `digit`.
    #[track_caller]
    #[must_use]
    pub fn assert_candidate_removed(self, pos: Position, digit: Digit) -> Self {
        let current = self.grid.get_candidates(pos).expect("pos in range");
        assert!(
            !current.contains(digit),
            "expected {digit:?} to be removed from {pos:?}, but it's still a candidate: {current:?}"
        );
        self
    }
}
