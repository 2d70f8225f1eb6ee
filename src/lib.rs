#![deny(missing_docs)]
//! This crate solves standard 9×9 Sudoku puzzles with a candidate-guided,
//! depth-first backtracking search.
//!
//! A puzzle is a [`sudoku::grid::Grid`] of cells holding `0` for a blank or a
//! digit `1..=9`. The solver repeatedly picks the most constrained blank
//! (the one with the fewest remaining candidate digits), fills it, and
//! backtracks when a placement leads to a dead end. Inputs are rejected up
//! front when their given clues already clash, or when they carry fewer than
//! the 17 clues a uniquely solvable puzzle requires.

/// The `sudoku` module contains the grid representation and the solving
/// machinery: peer lookup, validation, candidate generation, blank selection
/// and the backtracking search itself.
pub mod sudoku;
