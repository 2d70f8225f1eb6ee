#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The 9×9 Sudoku grid and its cell indexing.
//!
//! A [`Grid`] is a fixed 9×9 matrix of `i8` cells. A cell holds `0` for a
//! blank or a digit `1..=9`. The only grid that ever holds another value is
//! the [`Grid::sentinel`] failure grid, whose every cell is `-1`; it is the
//! uniform "no result" value handed to callers when a puzzle is invalid or
//! unsolvable.
//!
//! Grids can be built from an array (validated), parsed from text (81 cell
//! characters, `.`/`_`/`0` for blanks, `#`/`c` comment lines ignored), and
//! rendered with block separators every three rows and columns.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;
use itertools::Itertools;

/// Side length of the grid, in cells.
pub const SIDE: usize = 9;

/// Side length of one 3×3 box, in cells.
pub const BOX_SIDE: usize = 3;

/// Total number of cells in a grid.
pub const CELLS: usize = SIDE * SIDE;

/// The cell value denoting a blank.
pub const BLANK: i8 = 0;

/// The cell value used throughout the sentinel failure grid.
pub const SENTINEL: i8 = -1;

/// The position of one cell: a `(row, column)` pair, each in `0..9`.
///
/// The derived ordering is row-major (row first, then column), which is the
/// tie-break key used when two blanks are equally constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    /// The row position, in `0..9`.
    pub row: usize,
    /// The column position, in `0..9`.
    pub col: usize,
}

impl CellIndex {
    /// Creates a cell index from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An error raised while building or parsing a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A cell held a value outside `0..=9`.
    ValueOutOfRange {
        /// The row of the offending cell.
        row: usize,
        /// The column of the offending cell.
        col: usize,
        /// The rejected value.
        value: i8,
    },
    /// The input did not contain exactly 81 cells.
    CellCount(usize),
    /// The input contained a character that is not a cell.
    BadCell(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOutOfRange { row, col, value } => write!(
                f,
                "cell ({row}, {col}) holds {value}, outside the accepted range 0..=9"
            ),
            Self::CellCount(found) => write!(f, "expected {CELLS} cells, found {found}"),
            Self::BadCell(ch) => write!(f, "unrecognised cell character {ch:?}"),
        }
    }
}

impl std::error::Error for GridError {}

/// A 9×9 Sudoku grid.
///
/// Cloning a grid produces a fully independent copy; the search engine relies
/// on this when it branches over several candidates for one cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid([[i8; SIDE]; SIDE]);

impl Grid {
    /// Builds a grid from a cell array, rejecting any cell outside `0..=9`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ValueOutOfRange`] for the first offending cell,
    /// scanning in row-major order.
    pub fn new(cells: [[i8; SIDE]; SIDE]) -> Result<Self, GridError> {
        for (row, row_cells) in cells.iter().enumerate() {
            for (col, &value) in row_cells.iter().enumerate() {
                if !(0..=9).contains(&value) {
                    return Err(GridError::ValueOutOfRange { row, col, value });
                }
            }
        }
        Ok(Self(cells))
    }

    /// The failure grid: every cell is `-1`.
    ///
    /// Returned in place of a solution when the input is invalid or
    /// unsolvable, so that callers always receive a grid-shaped value.
    #[must_use]
    pub const fn sentinel() -> Self {
        Self([[SENTINEL; SIDE]; SIDE])
    }

    /// Parses a grid from text.
    ///
    /// The text must contain exactly 81 cell characters once whitespace and
    /// comment lines (those starting with `#` or `c`) are dropped. Digits
    /// `1`–`9` are clues; `0`, `.` and `_` are blanks. Cells are read in
    /// row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::BadCell`] for a character that is not a cell and
    /// [`GridError::CellCount`] when the count is off.
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let cell_chars = text
            .lines()
            .filter(|line| {
                let trimmed = line.trim_start();
                !trimmed.starts_with('#') && !trimmed.starts_with('c')
            })
            .flat_map(str::chars)
            .filter(|ch| !ch.is_whitespace())
            .collect_vec();

        if cell_chars.len() != CELLS {
            return Err(GridError::CellCount(cell_chars.len()));
        }

        let mut cells = [[BLANK; SIDE]; SIDE];
        for (pos, ch) in cell_chars.into_iter().enumerate() {
            let value = match ch {
                '0' | '.' | '_' => BLANK,
                '1'..='9' => (ch as u8 - b'0') as i8,
                other => return Err(GridError::BadCell(other)),
            };
            cells[pos / SIDE][pos % SIDE] = value;
        }
        Ok(Self(cells))
    }

    /// The underlying cell matrix.
    #[must_use]
    pub const fn cells(&self) -> &[[i8; SIDE]; SIDE] {
        &self.0
    }

    /// The number of filled (non-blank) cells.
    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.0.iter().flatten().filter(|&&cell| cell != BLANK).count()
    }

    /// Returns true when no cell is blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().flatten().all(|&cell| cell != BLANK)
    }

    /// Iterates over the positions of all blank cells, in row-major order.
    pub fn blanks(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..SIDE)
            .cartesian_product(0..SIDE)
            .map(|(row, col)| CellIndex::new(row, col))
            .filter(move |&idx| self[idx] == BLANK)
    }
}

impl Index<CellIndex> for Grid {
    type Output = i8;

    fn index(&self, idx: CellIndex) -> &Self::Output {
        &self.0[idx.row][idx.col]
    }
}

impl IndexMut<CellIndex> for Grid {
    fn index_mut(&mut self, idx: CellIndex) -> &mut Self::Output {
        &mut self.0[idx.row][idx.col]
    }
}

impl TryFrom<[[i8; SIDE]; SIDE]> for Grid {
    type Error = GridError;

    fn try_from(cells: [[i8; SIDE]; SIDE]) -> Result<Self, Self::Error> {
        Self::new(cells)
    }
}

impl From<Grid> for [[i8; SIDE]; SIDE] {
    fn from(grid: Grid) -> Self {
        grid.0
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl fmt::Display for Grid {
    /// Renders the grid with a separator line before rows 3 and 6 and a `| `
    /// separator before columns 3 and 6. Blanks render as two spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, row_cells) in self.0.iter().enumerate() {
            if row == 3 || row == 6 {
                writeln!(f, "----------------------")?;
            }

            let mut line = String::new();
            for (col, &cell) in row_cells.iter().enumerate() {
                if col == 3 || col == 6 {
                    line.push_str("| ");
                }
                if cell == BLANK {
                    line.push_str("  ");
                } else {
                    line.push_str(&format!("{cell} "));
                }
            }
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// The Guardian sudoku #5,158 ("hard"), the puzzle the solver was written
/// against.
pub const EXAMPLE_HARD: [[i8; SIDE]; SIDE] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 2],
    [9, 7, 5, 0, 0, 0, 4, 0, 0],
    [0, 0, 3, 0, 0, 6, 7, 5, 0],
    [0, 1, 0, 4, 2, 0, 0, 0, 7],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [2, 0, 0, 0, 5, 9, 0, 4, 0],
    [0, 5, 7, 9, 0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0, 0, 5, 7, 6],
    [6, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// A widely reproduced moderate puzzle with a unique solution, handy for
/// tests and benchmarks.
pub const EXAMPLE_CLASSIC: [[i8; SIDE]; SIDE] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

/// The unique solution to [`EXAMPLE_CLASSIC`], for comparison in tests.
pub const EXAMPLE_CLASSIC_SOLUTION: [[i8; SIDE]; SIDE] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];
