//! Candidate generation: the digits a blank cell may still take.
//!
//! A digit is a candidate iff it is absent from the cell's row, column and
//! box. The candidate list is recomputed fresh on every query; no
//! propagation state is carried between queries or across the search.

use crate::sudoku::grid::{CellIndex, Grid};
use crate::sudoku::units;
use smallvec::SmallVec;

/// The candidate digits of one cell, ascending. Never longer than nine, so
/// the list always lives inline.
pub type Candidates = SmallVec<[i8; 9]>;

/// The digits 1–9 absent from the row, column and box of `idx`, ascending.
///
/// An empty result for a blank cell marks a dead branch: nothing can legally
/// fill the cell.
#[must_use]
pub fn candidates_for(grid: &Grid, idx: CellIndex) -> Candidates {
    let row = units::row_cells(grid, idx);
    let col = units::col_cells(grid, idx);
    let block = units::box_cells(grid, idx);

    (1..=9)
        .filter(|digit| {
            !row.contains(digit) && !col.contains(digit) && !block.contains(digit)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::grid::{BLANK, EXAMPLE_CLASSIC, SIDE};

    #[test]
    fn empty_grid_cell_has_all_nine_candidates() {
        let grid = Grid::new([[BLANK; SIDE]; SIDE]).unwrap();
        let candidates = candidates_for(&grid, CellIndex::new(4, 4));
        assert_eq!(candidates.as_slice(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn peers_eliminate_their_digits() {
        let grid = Grid::new(EXAMPLE_CLASSIC).unwrap();
        // (0, 2): row holds {5, 3, 7}, column holds {8}, box holds {5, 3, 6, 9, 8}.
        let candidates = candidates_for(&grid, CellIndex::new(0, 2));
        assert_eq!(candidates.as_slice(), [1, 2, 4]);
    }

    #[test]
    fn eight_peers_leave_exactly_one_candidate() {
        // Row, column and box jointly hold {1, ..., 8}, leaving only the 9.
        let mut cells = [[BLANK; SIDE]; SIDE];
        cells[0][1] = 1;
        cells[0][2] = 2;
        cells[0][3] = 3;
        cells[1][0] = 4;
        cells[2][0] = 5;
        cells[1][1] = 6;
        cells[2][2] = 7;
        cells[0][4] = 8;
        let grid = Grid::new(cells).unwrap();
        let candidates = candidates_for(&grid, CellIndex::new(0, 0));
        assert_eq!(candidates.as_slice(), [9]);
    }

    #[test]
    fn nine_peers_leave_no_candidate() {
        let mut cells = [[BLANK; SIDE]; SIDE];
        cells[0][1] = 1;
        cells[0][2] = 2;
        cells[0][3] = 3;
        cells[1][0] = 4;
        cells[2][0] = 5;
        cells[1][1] = 6;
        cells[2][2] = 7;
        cells[0][4] = 8;
        cells[0][5] = 9;
        let grid = Grid::new(cells).unwrap();
        assert!(candidates_for(&grid, CellIndex::new(0, 0)).is_empty());
    }

    #[test]
    fn candidates_are_ascending() {
        let grid = Grid::new(EXAMPLE_CLASSIC).unwrap();
        for blank in grid.blanks() {
            let candidates = candidates_for(&grid, blank);
            assert!(candidates.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
