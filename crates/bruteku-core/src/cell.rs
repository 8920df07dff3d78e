//! A single cell of the sudoku board.

use std::fmt::{self, Display};

/// One of the 81 board positions.
///
/// A cell knows which row, column, and 3×3 block it belongs to, holds its
/// current value (0 meaning blank), and remembers whether the value was
/// given in the puzzle input. Given cells are *fixed*: their value never
/// changes after construction.
///
/// # Examples
///
/// ```
/// use bruteku_core::Cell;
///
/// // Index 40 is the center of the board.
/// let cell = Cell::new(40, 5);
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 4);
/// assert_eq!(cell.block(), 4);
/// assert_eq!(cell.value(), 5);
/// assert!(cell.is_fixed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: u8,
    col: u8,
    block: u8,
    value: u8,
    fixed: bool,
}

impl Cell {
    /// Creates a cell from its row-major board index and initial value.
    ///
    /// The cell is fixed if and only if `value` is nonzero.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80 or `value` is not in the
    /// range 0-9.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn new(index: usize, value: u8) -> Self {
        assert!(index < 81, "cell index must be 0-80");
        assert!(value <= 9, "cell value must be 0-9");
        let row = (index / 9) as u8;
        let col = (index % 9) as u8;
        let block = (row / 3) * 3 + col / 3;
        Self {
            row,
            col,
            block,
            value,
            fixed: value != 0,
        }
    }

    /// Returns the row (0-8) this cell belongs to.
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the column (0-8) this cell belongs to.
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Returns the 3×3 block (0-8, left to right, top to bottom) this cell
    /// belongs to.
    #[must_use]
    pub const fn block(&self) -> u8 {
        self.block
    }

    /// Returns the current value (0-9, where 0 means blank).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns `true` if the value was given in the puzzle input.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Overwrites the value of a non-fixed cell.
    ///
    /// Writing 0 blanks the cell again.
    ///
    /// # Panics
    ///
    /// Panics if the cell is fixed or `value` is not in the range 0-9.
    pub const fn set_value(&mut self, value: u8) {
        assert!(!self.fixed, "fixed cell value cannot change");
        assert!(value <= 9, "cell value must be 0-9");
        self.value = value;
    }

    /// Returns `true` if the two cells share a row, column, or block.
    ///
    /// This is the peer relation used for constraint lookup. A cell sees
    /// itself.
    #[must_use]
    pub const fn sees(&self, other: &Self) -> bool {
        self.row == other.row || self.col == other.col || self.block == other.block
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}b{}={}", self.row, self.col, self.block, self.value)
    }
}
