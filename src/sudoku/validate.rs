//! Consistency checks: group uniqueness, whole-grid validity and the solved
//! predicate.
//!
//! A grid is *valid* when no row, column or box repeats a digit among its
//! filled cells; blanks never count as duplicates. A grid is *solved* when
//! it is valid and has no blanks left. Validity is checked both on raw
//! input, to reject malformed puzzles before any search, and after every
//! trial assignment, to prune dead branches early.

use crate::sudoku::grid::{BOX_SIDE, CellIndex, Grid, SIDE};
use crate::sudoku::units;
use bit_vec::BitVec;

/// Returns true iff no positive value occurs more than once in `cells`.
///
/// Blanks (and the sentinel value) are skipped, so an all-blank group is
/// trivially unique.
#[must_use]
pub fn is_unique(cells: &[i8]) -> bool {
    let mut seen = BitVec::from_elem(SIDE + 1, false);
    for &cell in cells {
        if cell <= 0 {
            continue;
        }
        let digit = cell as usize;
        if seen[digit] {
            return false;
        }
        seen.set(digit, true);
    }
    true
}

/// Returns true iff every row, column and box of `grid` is duplicate-free.
///
/// Groups are checked rows first, then columns, then boxes, returning on the
/// first violation.
#[must_use]
pub fn is_valid(grid: &Grid) -> bool {
    for row in 0..SIDE {
        if !is_unique(&units::row_cells(grid, CellIndex::new(row, 0))) {
            return false;
        }
    }
    for col in 0..SIDE {
        if !is_unique(&units::col_cells(grid, CellIndex::new(0, col))) {
            return false;
        }
    }
    for band in (0..SIDE).step_by(BOX_SIDE) {
        for stack in (0..SIDE).step_by(BOX_SIDE) {
            if !is_unique(&units::box_cells(grid, CellIndex::new(band, stack))) {
                return false;
            }
        }
    }
    true
}

/// The solved predicate: no blanks, and all 27 groups duplicate-free.
#[must_use]
pub fn is_solved(grid: &Grid) -> bool {
    grid.is_complete() && is_valid(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::grid::{
        BLANK, EXAMPLE_CLASSIC, EXAMPLE_CLASSIC_SOLUTION, EXAMPLE_HARD,
    };

    #[test]
    fn all_blank_group_is_unique() {
        assert!(is_unique(&[BLANK; SIDE]));
    }

    #[test]
    fn blanks_do_not_count_as_duplicates() {
        assert!(is_unique(&[0, 0, 3, 0, 7, 0, 0, 1, 0]));
    }

    #[test]
    fn duplicate_digit_is_caught() {
        assert!(!is_unique(&[0, 5, 0, 0, 5, 0, 0, 0, 0]));
    }

    #[test]
    fn full_permutation_is_unique() {
        assert!(is_unique(&[9, 2, 7, 4, 1, 6, 3, 8, 5]));
    }

    #[test]
    fn example_puzzles_are_valid() {
        assert!(is_valid(&Grid::new(EXAMPLE_CLASSIC).unwrap()));
        assert!(is_valid(&Grid::new(EXAMPLE_HARD).unwrap()));
    }

    #[test]
    fn duplicate_in_row_invalidates() {
        let mut cells = EXAMPLE_CLASSIC;
        cells[0][2] = 5; // row 0 already holds a 5
        assert!(!is_valid(&Grid::new(cells).unwrap()));
    }

    #[test]
    fn duplicate_in_column_invalidates() {
        let mut cells = EXAMPLE_CLASSIC;
        cells[2][0] = 4; // column 0 already holds a 4; row 2 and the box do not
        assert!(!is_valid(&Grid::new(cells).unwrap()));
    }

    #[test]
    fn duplicate_in_box_invalidates() {
        let mut cells = EXAMPLE_CLASSIC;
        cells[2][0] = 3; // top-left box already holds a 3; row 2 and column 0 do not
        assert!(!is_valid(&Grid::new(cells).unwrap()));
    }

    #[test]
    fn validity_is_preserved_under_digit_relabelling() {
        // Swapping two digits everywhere cannot introduce a duplicate.
        let mut cells = EXAMPLE_CLASSIC;
        for row_cells in &mut cells {
            for cell in row_cells.iter_mut() {
                *cell = match *cell {
                    3 => 7,
                    7 => 3,
                    other => other,
                };
            }
        }
        assert!(is_valid(&Grid::new(cells).unwrap()));
    }

    #[test]
    fn solved_predicate_accepts_full_solution() {
        assert!(is_solved(&Grid::new(EXAMPLE_CLASSIC_SOLUTION).unwrap()));
    }

    #[test]
    fn solved_predicate_rejects_incomplete_grid() {
        assert!(!is_solved(&Grid::new(EXAMPLE_CLASSIC).unwrap()));
    }

    #[test]
    fn solved_predicate_rejects_complete_but_invalid_grid() {
        let mut cells = EXAMPLE_CLASSIC_SOLUTION;
        cells[8][8] = cells[8][7]; // complete, but row 8 now repeats
        assert!(!is_solved(&Grid::new(cells).unwrap()));
    }
}
