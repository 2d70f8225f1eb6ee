//! Peer lookup: the row, column and 3×3 box containing a given cell.
//!
//! Boxes partition the grid into nine non-overlapping 3×3 blocks, found by
//! integer division of the cell index by 3. All lookups are pure copies of
//! the relevant nine cells.

use crate::sudoku::grid::{BOX_SIDE, CellIndex, Grid, SIDE};

/// The nine cells of the row containing `idx`.
#[must_use]
pub const fn row_cells(grid: &Grid, idx: CellIndex) -> [i8; SIDE] {
    grid.cells()[idx.row]
}

/// The nine cells of the column containing `idx`.
#[must_use]
pub fn col_cells(grid: &Grid, idx: CellIndex) -> [i8; SIDE] {
    core::array::from_fn(|row| grid.cells()[row][idx.col])
}

/// The nine cells of the 3×3 box containing `idx`, in row-major order.
#[must_use]
pub fn box_cells(grid: &Grid, idx: CellIndex) -> [i8; SIDE] {
    let band = idx.row / BOX_SIDE * BOX_SIDE;
    let stack = idx.col / BOX_SIDE * BOX_SIDE;
    core::array::from_fn(|i| grid.cells()[band + i / BOX_SIDE][stack + i % BOX_SIDE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::grid::EXAMPLE_CLASSIC;

    fn classic() -> Grid {
        Grid::new(EXAMPLE_CLASSIC).unwrap()
    }

    #[test]
    fn row_lookup() {
        let grid = classic();
        assert_eq!(
            row_cells(&grid, CellIndex::new(1, 4)),
            [6, 0, 0, 1, 9, 5, 0, 0, 0]
        );
    }

    #[test]
    fn col_lookup() {
        let grid = classic();
        assert_eq!(
            col_cells(&grid, CellIndex::new(3, 0)),
            [5, 6, 0, 8, 4, 7, 0, 0, 0]
        );
    }

    #[test]
    fn box_lookup_all_corners_of_one_box() {
        let grid = classic();
        let expected = [0, 0, 0, 4, 1, 9, 0, 8, 0];
        for row in 6..9 {
            for col in 3..6 {
                assert_eq!(box_cells(&grid, CellIndex::new(row, col)), expected);
            }
        }
    }

    #[test]
    fn box_lookup_top_left() {
        let grid = classic();
        assert_eq!(
            box_cells(&grid, CellIndex::new(0, 0)),
            [5, 3, 0, 6, 0, 0, 0, 9, 8]
        );
    }
}
