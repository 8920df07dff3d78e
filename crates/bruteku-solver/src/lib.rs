//! Exhaustive backtracking solver for standard 9×9 sudoku puzzles.
//!
//! Given the 81-character digit encoding of a board (row major, `'0'` for
//! blank cells), [`BacktrackSolver`] produces one valid completion
//! satisfying the row/column/block uniqueness constraint, or determines
//! that none exists. The search is deterministic and brute force by
//! design: candidates are recomputed from the grid on every step, and no
//! constraint propagation is performed.
//!
//! # Examples
//!
//! ```
//! use bruteku_solver::BacktrackSolver;
//!
//! let mut solver = BacktrackSolver::new();
//! let solution = solver.solve(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )?;
//!
//! // Givens are preserved in the solution.
//! assert_eq!(solution[0], 5);
//! assert_eq!(solution[1], 3);
//! # Ok::<(), bruteku_solver::SolveError>(())
//! ```

pub use self::{backtrack_solver::*, error::*};

mod backtrack_solver;
mod error;

#[cfg(test)]
mod testing;
