//! The `Solver` trait, pluggable solver configurations and search
//! statistics.

use crate::sudoku::grid::Grid;
use crate::sudoku::variable_selection::{FixedOrder, MostConstrained, VariableSelection};
use core::fmt::Debug;

/// Ties together the strategy components a search engine is built from.
///
/// Currently the only pluggable component is the blank-selection strategy;
/// the associated-type shape leaves room for more without touching call
/// sites.
pub trait SolverConfig {
    /// The strategy used to pick the next blank to fill.
    type VariableSelector: VariableSelection + Clone + Debug;
}

/// The default configuration: most-constrained-variable selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultConfig;

impl SolverConfig for DefaultConfig {
    type VariableSelector = MostConstrained;
}

/// A baseline configuration that fills blanks in row-major order. Slower on
/// hard puzzles; kept for comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedOrderConfig;

impl SolverConfig for FixedOrderConfig {
    type VariableSelector = FixedOrder;
}

/// A solver for one puzzle instance.
pub trait Solver<Config: SolverConfig> {
    /// Creates a solver owning its private copy of `puzzle`.
    fn new(puzzle: Grid) -> Self;

    /// Runs the search to completion.
    ///
    /// Returns the solved grid, or `None` when the search exhausts every
    /// branch without finding a solution.
    fn solve(&mut self) -> Option<Grid>;

    /// Counters describing the completed search.
    fn stats(&self) -> SolveStats;
}

/// Counters collected while solving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Choice points where more than one candidate was tried.
    pub decisions: usize,
    /// Forced assignments: blanks filled because only one candidate was
    /// left.
    pub forced: usize,
    /// Branches abandoned, whether from an empty candidate list, a failed
    /// validation or an exhausted candidate loop.
    pub backtracks: usize,
    /// Whole-grid validity checks performed during the search.
    pub validations: usize,
}
