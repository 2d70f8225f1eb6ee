#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The Sudoku domain: grid representation, consistency checks and the
//! backtracking search engine.

/// The 9×9 grid, cell indexing, parsing and display.
pub mod grid;

/// Row, column and 3×3 box lookup for any cell.
pub mod units;

/// Uniqueness checks for cell groups and whole grids.
pub mod validate;

/// Candidate digits for a blank cell.
pub mod candidates;

/// Strategies for choosing which blank to fill next.
pub mod variable_selection;

/// The recursive backtracking search engine.
pub mod search;

/// The `Solver` trait, solver configurations and search statistics.
pub mod solver;

/// Input checks and the top-level solve entry point.
pub mod driver;
