//! The 81-cell sudoku board.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{cell::Cell, number_set::NumberSet};

/// Errors that can occur when parsing a grid from its string encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input was not exactly 81 characters long.
    #[display("expected 81 characters, got {len}")]
    InvalidLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contained a character other than `'0'`-`'9'`.
    #[display("expected a digit at index {index}, got {found:?}")]
    InvalidDigit {
        /// Row-major position of the offending character.
        index: usize,
        /// The character found there.
        found: char,
    },
}

/// The ordered collection of the 81 cells of a sudoku board.
///
/// A grid is built from the 81-character row-major digit encoding of a
/// puzzle (`'0'` for blank cells) and exposes the row/column/block
/// constraint lookups the solver needs. Cells given in the input are fixed
/// and never change; blank cells may be written through
/// [`set_value`](Grid::set_value).
///
/// # Examples
///
/// ```
/// use bruteku_core::Grid;
///
/// let input = "123456789456789123789123456231564897564897231897231564312645978645978312978312645";
/// let grid: Grid = input.parse()?;
///
/// assert_eq!(grid.cell(0).value(), 1);
/// assert_eq!(grid.to_string(), input);
/// # Ok::<(), bruteku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: std::array::from_fn(|index| Cell::new(index, 0)),
        }
    }
}

impl Grid {
    /// Returns the cell at the given row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Overwrites the value of the non-fixed cell at `index`.
    ///
    /// Writing 0 blanks the cell again.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80, the cell is fixed, or
    /// `value` is not in the range 0-9.
    pub fn set_value(&mut self, index: usize, value: u8) {
        self.cells[index].set_value(value);
    }

    /// Collects the values already taken by the peers of the cell at
    /// `index`.
    ///
    /// The result is the union of all nonzero values held by *other* cells
    /// sharing the target cell's row, column, or block. The whole grid is
    /// re-scanned on every call; no per-cell candidate state is cached.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub fn used_values(&self, index: usize) -> NumberSet {
        let target = &self.cells[index];
        let mut used = NumberSet::new();
        for (i, cell) in self.cells.iter().enumerate() {
            if i != index && cell.value() != 0 && cell.sees(target) {
                used.insert(cell.value());
            }
        }
        used
    }

    /// Returns the indices of all non-fixed cells in (row, col) ascending
    /// order.
    ///
    /// This is the traversal order of the backtracking solver; it is derived
    /// once per solve and not rebuilt as cell values change.
    #[must_use]
    pub fn unsolved_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_fixed())
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns `true` if no two distinct cells holding the same nonzero
    /// value share a row, column, or block.
    ///
    /// Blank cells are ignored, so a partially filled grid can be
    /// consistent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.cells.iter().enumerate().all(|(index, cell)| {
            cell.value() == 0 || !self.used_values(index).contains(cell.value())
        })
    }

    /// Reads all 81 cell values back in row-major order.
    #[must_use]
    pub fn values(&self) -> [u8; 81] {
        std::array::from_fn(|index| self.cells[index].value())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseGridError::InvalidLength { len });
        }

        let mut values = [0_u8; 81];
        for (index, ch) in s.chars().enumerate() {
            // `to_digit(10)` accepts exactly the ASCII digits.
            let digit = ch
                .to_digit(10)
                .ok_or(ParseGridError::InvalidDigit { index, found: ch })?;
            values[index] = digit as u8;
        }

        Ok(Self {
            cells: std::array::from_fn(|index| Cell::new(index, values[index])),
        })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.value())?;
        }
        Ok(())
    }
}
