//! Solver error types.

use bruteku_core::ParseGridError;

/// Errors that can occur while solving a puzzle.
///
/// A dead end at one cell during the search is recovered by backtracking
/// and never surfaces here; only malformed input and exhaustion of the
/// entire search space are reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The puzzle string could not be parsed into a grid.
    #[display("invalid puzzle input: {_0}")]
    InvalidInput(ParseGridError),
    /// The puzzle has no valid completion.
    #[display("puzzle has no solution")]
    Unsolvable,
}
