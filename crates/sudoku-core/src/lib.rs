//! Core data structures for sudoku applications.
//!
//! This crate provides the fundamental, shape-generic data structures for
//! representing and manipulating sudoku puzzles of arbitrary rectangular box
//! size: a geometry component ([`Shape`]) that derives row/column/box
//! relations from `W x H` box dimensions, and a single combined [`Grid`] that
//! holds both the filled digits and the per-cell candidate sets. Solving
//! algorithms and human-technique step finders live in the `sudoku-solver`
//! crate, which depends on this one.
//!
//! # Core Types
//!
//! - [`Shape`] - box dimensions `W x H` and the geometric relations they imply
//!   (`row_of`, `column_of`, `box_of`, `surrounding_of`, `the_part`, ...)
//! - [`Position`] - a zero-based `(row, col)` cell coordinate
//! - [`Digit`] - a 1-based sudoku digit, valid range depends on the [`Shape`]
//!   it's used with
//! - [`DigitSet`] - a bitmask set of digits, used for per-cell candidates
//! - [`Grid`] - a `Shape` plus a `numbers` array and a `candidates` array;
//!   the two arrays are independent and never auto-synced
//!
//! The [`basic_solve`] module provides candidate calculation, conflict
//! detection, and solved-state checks that operate directly on a [`Grid`]
//! without needing a full solving algorithm.
//!
//! # Examples
//!
//! ```
//! use sudoku_core::{Digit, Grid, Position, Shape};
//!
//! let mut grid = Grid::new(Shape::STANDARD);
//! grid.set(Position::new(4, 4), 5).unwrap();
//! assert_eq!(grid.get(Position::new(4, 4)).unwrap(), 5);
//!
//! let grid: Grid = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!     .parse()
//!     .unwrap();
//! assert_eq!(grid.get(Position::new(0, 0)).unwrap(), 5);
//! assert_eq!(grid.get(Position::new(0, 2)).unwrap(), 0);
//! ```

pub mod basic_solve;
mod digit;
mod digit_set;
mod error;
mod grid;
mod position;
mod shape;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    error::GridError,
    grid::{Grid, GridParseError},
    position::Position,
    shape::Shape,
};
