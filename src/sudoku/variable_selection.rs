#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Strategies for choosing which blank cell the search fills next.

use crate::sudoku::candidates::{Candidates, candidates_for};
use crate::sudoku::grid::{CellIndex, Grid};

/// A chosen blank together with its candidate digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The position of the chosen blank.
    pub cell: CellIndex,
    /// The candidate digits of that blank, ascending. May be empty, which
    /// marks the current grid as a dead end.
    pub candidates: Candidates,
}

/// A strategy for picking the next blank to fill.
pub trait VariableSelection {
    /// Creates the selector.
    fn new() -> Self;

    /// Picks a blank cell of `grid`, or `None` when the grid has no blanks.
    fn pick(&self, grid: &Grid) -> Option<Choice>;
}

/// Most-constrained-variable selection: the blank with the fewest candidate
/// digits wins, ties broken by row-major cell position.
///
/// Choosing the tightest cell first surfaces forced assignments early and
/// keeps the branching factor at each choice point as small as possible.
/// The strict `<` comparison over a row-major scan makes the tie-break
/// deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MostConstrained;

impl VariableSelection for MostConstrained {
    fn new() -> Self {
        Self
    }

    fn pick(&self, grid: &Grid) -> Option<Choice> {
        let mut best: Option<Choice> = None;

        for cell in grid.blanks() {
            let candidates = candidates_for(grid, cell);
            if best
                .as_ref()
                .is_none_or(|b| candidates.len() < b.candidates.len())
            {
                best = Some(Choice { cell, candidates });
            }
        }

        best
    }
}

/// Fixed-order selection: the first blank in row-major order, regardless of
/// how constrained it is. Exists as a baseline to compare the heuristic
/// against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedOrder;

impl VariableSelection for FixedOrder {
    fn new() -> Self {
        Self
    }

    fn pick(&self, grid: &Grid) -> Option<Choice> {
        grid.blanks().next().map(|cell| Choice {
            cell,
            candidates: candidates_for(grid, cell),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::grid::{BLANK, EXAMPLE_CLASSIC_SOLUTION, SIDE};

    #[test]
    fn no_blanks_yields_no_choice() {
        let grid = Grid::new(EXAMPLE_CLASSIC_SOLUTION).unwrap();
        assert_eq!(MostConstrained.pick(&grid), None);
        assert_eq!(FixedOrder.pick(&grid), None);
    }

    #[test]
    fn most_constrained_prefers_fewest_candidates() {
        // Row 0 leaves its two blanks with {8, 9}; every other blank on the
        // grid is far less constrained.
        let mut cells = [[BLANK; SIDE]; SIDE];
        cells[0][..7].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7]);
        let grid = Grid::new(cells).unwrap();

        let choice = MostConstrained.pick(&grid).unwrap();
        assert_eq!(choice.cell, CellIndex::new(0, 7));
        assert_eq!(choice.candidates.as_slice(), [8, 9]);
    }

    #[test]
    fn ties_break_to_the_earlier_row_major_cell() {
        // Both blanks have exactly one candidate; the earlier one must win.
        let mut cells = EXAMPLE_CLASSIC_SOLUTION;
        cells[2][7] = BLANK;
        cells[4][4] = BLANK;
        let grid = Grid::new(cells).unwrap();

        let choice = MostConstrained.pick(&grid).unwrap();
        assert_eq!(choice.cell, CellIndex::new(2, 7));
        assert_eq!(choice.candidates.as_slice(), [6]);
    }

    #[test]
    fn fixed_order_takes_the_first_blank() {
        let mut cells = EXAMPLE_CLASSIC_SOLUTION;
        cells[2][7] = BLANK;
        cells[4][4] = BLANK;
        let grid = Grid::new(cells).unwrap();

        let choice = FixedOrder.pick(&grid).unwrap();
        assert_eq!(choice.cell, CellIndex::new(2, 7));
    }

    #[test]
    fn empty_candidate_list_is_still_reported() {
        // A blank whose peers hold every digit has no candidates; the
        // selector must report it rather than skip it.
        let mut cells = [[BLANK; SIDE]; SIDE];
        cells[0][1] = 1;
        cells[0][2] = 2;
        cells[0][3] = 3;
        cells[0][4] = 4;
        cells[1][0] = 5;
        cells[2][0] = 6;
        cells[1][1] = 7;
        cells[2][2] = 8;
        cells[0][5] = 9;
        let grid = Grid::new(cells).unwrap();

        let choice = MostConstrained.pick(&grid).unwrap();
        assert_eq!(choice.cell, CellIndex::new(0, 0));
        assert!(choice.candidates.is_empty());
    }
}
