//! The recursive backtracking search engine.
//!
//! The engine repeatedly asks its selection strategy for the next blank to
//! fill. A blank with no candidates kills the current branch. A blank with
//! exactly one candidate is a forced assignment: the digit is written into
//! the shared working grid, and the write is undone on every failure path,
//! so the caller's grid is untouched whenever a recursion level reports
//! failure. A blank with several candidates opens a choice point: each
//! candidate is tried on an independent clone of the grid, in ascending
//! order, so sibling branches can never observe each other's partial state.
//! The first branch to succeed wins, and its solved grid is returned up the
//! call stack as an explicit value from every level.
//!
//! Every trial assignment is followed by a whole-grid validity check before
//! the engine recurses, and a completed grid is accepted only after a final
//! holistic solved check, closing the loop on the per-step pruning.

use crate::sudoku::grid::{BLANK, CELLS, CellIndex, Grid};
use crate::sudoku::solver::{DefaultConfig, SolveStats, Solver, SolverConfig};
use crate::sudoku::validate;
use crate::sudoku::variable_selection::{Choice, VariableSelection};

/// A backtracking solver for one puzzle instance.
///
/// Generic over a [`SolverConfig`] supplying the blank-selection strategy;
/// the default configuration uses most-constrained-variable selection.
#[derive(Debug, Clone)]
pub struct Backtrack<Config: SolverConfig = DefaultConfig> {
    puzzle: Grid,
    selector: Config::VariableSelector,
    depth: usize,
    stats: SolveStats,
}

impl<Config: SolverConfig> Solver<Config> for Backtrack<Config> {
    fn new(puzzle: Grid) -> Self {
        Self {
            puzzle,
            selector: Config::VariableSelector::new(),
            depth: 0,
            stats: SolveStats::default(),
        }
    }

    fn solve(&mut self) -> Option<Grid> {
        let mut working = self.puzzle.clone();
        self.search(&mut working)
    }

    fn stats(&self) -> SolveStats {
        self.stats
    }
}

impl<Config: SolverConfig> Backtrack<Config> {
    /// One level of the search. `grid` is assumed internally valid on entry
    /// and is restored to its entry state whenever this level returns
    /// `None`.
    fn search(&mut self, grid: &mut Grid) -> Option<Grid> {
        // One level per filled cell, so the recursion can never go deeper
        // than the number of cells.
        debug_assert!(self.depth <= CELLS);

        let Some(choice) = self.selector.pick(grid) else {
            // No blanks left: accept only after a full holistic check.
            self.stats.validations += 1;
            return validate::is_solved(grid).then(|| grid.clone());
        };

        match choice.candidates.as_slice() {
            [] => {
                self.stats.backtracks += 1;
                None
            }
            &[digit] => self.forced(grid, choice.cell, digit),
            _ => self.branch(grid, &choice),
        }
    }

    /// Fills the only legal digit in place, recursing on the same grid.
    /// The write is undone on every failure path.
    fn forced(&mut self, grid: &mut Grid, cell: CellIndex, digit: i8) -> Option<Grid> {
        self.stats.forced += 1;
        grid[cell] = digit;

        self.stats.validations += 1;
        if validate::is_solved(grid) {
            return Some(grid.clone());
        }

        self.stats.validations += 1;
        if validate::is_valid(grid) {
            self.depth += 1;
            let solution = self.search(grid);
            self.depth -= 1;
            if solution.is_some() {
                return solution;
            }
        }

        grid[cell] = BLANK;
        self.stats.backtracks += 1;
        None
    }

    /// Tries each candidate in ascending order, each on its own clone of the
    /// grid. The first success propagates immediately; the caller's grid is
    /// never written to.
    fn branch(&mut self, grid: &Grid, choice: &Choice) -> Option<Grid> {
        self.stats.decisions += 1;

        for &digit in &choice.candidates {
            let mut candidate_grid = grid.clone();
            candidate_grid[choice.cell] = digit;

            self.stats.validations += 1;
            if !validate::is_valid(&candidate_grid) {
                continue;
            }

            self.depth += 1;
            let solution = self.search(&mut candidate_grid);
            self.depth -= 1;
            if solution.is_some() {
                return solution;
            }
        }

        self.stats.backtracks += 1;
        None
    }
}
