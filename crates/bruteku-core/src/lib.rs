//! Core data structures for the bruteku sudoku solver.
//!
//! This crate provides the board model the backtracking solver operates on:
//!
//! - [`cell`]: a single board position with its row/column/block identity,
//!   current value, and fixed-or-blank status
//! - [`grid`]: the ordered collection of 81 cells, parsed from the
//!   81-character digit encoding of a puzzle, with the row/column/block
//!   constraint lookups the solver needs
//! - [`number_set`]: a compact set of the values 1-9, used to collect the
//!   values already taken by a cell's peers
//!
//! # Examples
//!
//! ```
//! use bruteku_core::Grid;
//!
//! let grid: Grid = "023456789456789123789123456231564897564897231897231564312645978645978312978312645"
//!     .parse()?;
//!
//! // The blank first cell sees every value but 1.
//! let used = grid.used_values(0);
//! assert_eq!(used.len(), 8);
//! assert!(!used.contains(1));
//! # Ok::<(), bruteku_core::ParseGridError>(())
//! ```

pub mod cell;
pub mod grid;
pub mod number_set;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    grid::{Grid, ParseGridError},
    number_set::NumberSet,
};
