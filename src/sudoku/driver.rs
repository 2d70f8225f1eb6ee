#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Input checks and the top-level solve entry point.
//!
//! A solve call runs three stages: reject grids whose clues already clash,
//! reject grids with too few clues for a unique solution, then hand a
//! private copy of the puzzle to the search engine. The caller's grid is
//! never mutated. Callers that need the uniform grid-shaped failure value
//! substitute [`Grid::sentinel`] on error.

use crate::sudoku::grid::Grid;
use crate::sudoku::search::Backtrack;
use crate::sudoku::solver::{DefaultConfig, SolveStats, Solver, SolverConfig};
use crate::sudoku::validate;
use core::fmt;

/// The minimum number of clues a uniquely solvable 9×9 puzzle can carry,
/// proved by McGuire, Tugemann and Civario (<https://arxiv.org/abs/1201.0749>).
pub const MIN_CLUES: usize = 17;

/// Returns true when `grid` carries at least [`MIN_CLUES`] filled cells.
///
/// A cheap necessary condition, not a sufficient one: a grid that passes can
/// still turn out unsolvable or ambiguous, and only the full search settles
/// that.
#[must_use]
pub fn has_sufficient_clues(grid: &Grid) -> bool {
    grid.filled_cells() >= MIN_CLUES
}

/// The ways a solve call can fail. All are terminal: there is no partial
/// result and no retry, the caller must supply a different puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The given clues already violate row, column or box uniqueness.
    /// Detected before any search.
    InvalidInput,
    /// Fewer than [`MIN_CLUES`] cells are filled. Detected before any
    /// search.
    InsufficientClues,
    /// The search exhausted every branch. Since the search is complete
    /// backtracking, this proves no solution exists.
    NoSolution,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "input grid violates row/column/box uniqueness"),
            Self::InsufficientClues => {
                write!(f, "input grid has fewer than {MIN_CLUES} clues")
            }
            Self::NoSolution => write!(f, "search exhausted without finding a solution"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Solves `puzzle` with the default configuration.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] or [`SolveError::InsufficientClues`]
/// without searching, and [`SolveError::NoSolution`] when the search
/// exhausts every branch.
pub fn solve(puzzle: &Grid) -> Result<Grid, SolveError> {
    solve_with::<DefaultConfig>(puzzle).map(|(solution, _)| solution)
}

/// Solves `puzzle` under the configuration `Config`, also returning the
/// search statistics.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_with<Config: SolverConfig>(
    puzzle: &Grid,
) -> Result<(Grid, SolveStats), SolveError> {
    if !validate::is_valid(puzzle) {
        return Err(SolveError::InvalidInput);
    }
    if !has_sufficient_clues(puzzle) {
        return Err(SolveError::InsufficientClues);
    }

    let mut engine: Backtrack<Config> = Solver::new(puzzle.clone());
    engine
        .solve()
        .map(|solution| (solution, engine.stats()))
        .ok_or(SolveError::NoSolution)
}
