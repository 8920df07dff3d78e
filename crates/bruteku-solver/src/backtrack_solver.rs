//! Exhaustive backtracking search over the unsolved cells of a grid.

use bruteku_core::Grid;
use log::{debug, trace};

use crate::SolveError;

/// Statistics collected during a backtracking solve.
///
/// # Examples
///
/// ```
/// use bruteku_solver::BacktrackSolver;
///
/// let mut solver = BacktrackSolver::new();
/// let input = "023456789456789123789123456231564897564897231897231564312645978645978312978312645";
/// let (_solution, stats) = solver.solve_with_stats(input)?;
///
/// assert_eq!(stats.assignment_count(), 1);
/// assert_eq!(stats.backtrack_count(), 0);
/// # Ok::<(), bruteku_solver::SolveError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BacktrackSolverStats {
    assignments: usize,
    backtracks: usize,
}

impl BacktrackSolverStats {
    /// Returns the number of values written into cells during the search.
    #[must_use]
    pub const fn assignment_count(&self) -> usize {
        self.assignments
    }

    /// Returns the number of times the search retreated to an earlier cell.
    #[must_use]
    pub const fn backtrack_count(&self) -> usize {
        self.backtracks
    }
}

/// Computes the next admissible value for the unsolved cell at `index`.
///
/// Collects the values already taken by the cell's peers and returns the
/// smallest value strictly greater than the cell's current value that is
/// not among them, or 0 if none exists.
///
/// The strict-greater-than floor is what makes the search resumable:
/// calling this repeatedly on the same cell walks upward through its
/// remaining candidate space, so after a retreat the search continues past
/// values already tried instead of restarting at 1.
#[must_use]
pub fn next_candidate(grid: &Grid, index: usize) -> u8 {
    let used = grid.used_values(index);
    let floor = grid.cell(index).value();
    (floor + 1..=9).find(|value| !used.contains(*value)).unwrap_or(0)
}

/// An exhaustive, deterministic backtracking solver for 9×9 sudoku.
///
/// The solver walks the non-fixed cells in row-major order, assigning each
/// the smallest value its row, column, and block still admit and retreating
/// to the previous unsolved cell whenever a cell runs out of candidates.
/// The search is finite and strictly monotonic, so every call terminates
/// with either a valid completion or [`SolveError::Unsolvable`].
///
/// The grid is rebuilt from the input on every [`solve`](Self::solve) call;
/// no state carried between calls can influence a later result. The
/// retained grid only backs the [`grid`](Self::grid) accessor.
///
/// # Examples
///
/// ```
/// use bruteku_solver::BacktrackSolver;
///
/// let mut solver = BacktrackSolver::new();
/// let solution = solver.solve(
///     "023456789456789123789123456231564897564897231897231564312645978645978312978312645",
/// )?;
///
/// // The blanked first cell is uniquely forced to 1.
/// assert_eq!(solution[0], 1);
/// # Ok::<(), bruteku_solver::SolveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackSolver {
    grid: Grid,
}

impl BacktrackSolver {
    /// Creates a new solver holding a blank grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Solves the puzzle encoded by `input`.
    ///
    /// `input` must be exactly 81 characters, each an ASCII digit, row
    /// major, with `'0'` marking blank cells. On success the returned array
    /// holds the row-major solved values, each 1-9; every nonzero input
    /// cell retains its original value.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidInput`] if `input` is not a valid
    /// puzzle encoding, and [`SolveError::Unsolvable`] if the puzzle has no
    /// valid completion (including the case where the givens already
    /// violate the uniqueness constraint).
    pub fn solve(&mut self, input: &str) -> Result<[u8; 81], SolveError> {
        self.solve_with_stats(input).map(|(solution, _)| solution)
    }

    /// Solves the puzzle encoded by `input`, also returning search
    /// statistics.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_with_stats(
        &mut self,
        input: &str,
    ) -> Result<([u8; 81], BacktrackSolverStats), SolveError> {
        self.grid = input.parse::<Grid>()?;
        let mut stats = BacktrackSolverStats::default();
        self.run(&mut stats)?;
        Ok((self.grid.values(), stats))
    }

    /// Returns the current row-major cell values.
    ///
    /// After a successful [`solve`](Self::solve) this is the solution;
    /// after a failed one it is whatever partial state the search ended in
    /// and must not be treated as a valid board.
    #[must_use]
    pub fn grid(&self) -> [u8; 81] {
        self.grid.values()
    }

    /// Runs the backtracking traversal over the unsolved cells.
    ///
    /// The cursor walks the row-major sequence of non-fixed cells,
    /// advancing after each successful assignment and retreating when a
    /// cell runs out of candidates. Retreating past the first unsolved cell
    /// means the search space is exhausted.
    fn run(&mut self, stats: &mut BacktrackSolverStats) -> Result<(), SolveError> {
        if !self.grid.is_consistent() {
            debug!("givens violate the uniqueness constraint");
            return Err(SolveError::Unsolvable);
        }

        let unsolved = self.grid.unsolved_indices();
        debug!("solving puzzle with {} unsolved cells", unsolved.len());

        let mut cursor = 0;
        while cursor < unsolved.len() {
            let index = unsolved[cursor];
            let value = next_candidate(&self.grid, index);
            // Writing 0 doubles as clearing the cell on a dead end.
            self.grid.set_value(index, value);
            if value == 0 {
                let Some(previous) = cursor.checked_sub(1) else {
                    debug!(
                        "search exhausted after {} assignments, {} backtracks",
                        stats.assignments, stats.backtracks
                    );
                    return Err(SolveError::Unsolvable);
                };
                trace!("no candidate for cell {index}, retreating");
                cursor = previous;
                stats.backtracks += 1;
            } else {
                cursor += 1;
                stats.assignments += 1;
            }
        }

        debug!(
            "solved after {} assignments, {} backtracks",
            stats.assignments, stats.backtracks
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{COMPLETE_BOARD, assert_valid_solution};

    #[test]
    fn test_solves_uniquely_forced_cell() {
        // A valid complete board with its first cell blanked; the blank is
        // forced to 1 by its row, column, and block.
        let input = format!("0{}", &COMPLETE_BOARD[1..]);

        let mut solver = BacktrackSolver::new();
        let solution = solver.solve(&input).unwrap();

        let rendered: String = solution.iter().map(u8::to_string).collect();
        assert_eq!(rendered, COMPLETE_BOARD);
    }

    #[test]
    fn test_complete_board_is_returned_unchanged() {
        let mut solver = BacktrackSolver::new();
        let solution = solver.solve(COMPLETE_BOARD).unwrap();

        let rendered: String = solution.iter().map(u8::to_string).collect();
        assert_eq!(rendered, COMPLETE_BOARD);
    }

    #[test]
    fn test_solves_real_puzzle() {
        let input =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

        let mut solver = BacktrackSolver::new();
        let (solution, stats) = solver.solve_with_stats(input).unwrap();

        assert_valid_solution(input, &solution);
        // Brute force without propagation has to retreat on this puzzle.
        assert!(stats.backtrack_count() > 0);
        assert_eq!(solver.grid(), solution);
    }

    #[test]
    fn test_solves_blank_board() {
        let input = "0".repeat(81);

        let mut solver = BacktrackSolver::new();
        let solution = solver.solve(&input).unwrap();

        assert_valid_solution(&input, &solution);
    }

    #[test]
    fn test_duplicate_givens_are_unsolvable() {
        // Two fives in the first row violate the constraint before any
        // search starts.
        let input = format!("55{}", "0".repeat(79));

        let mut solver = BacktrackSolver::new();
        assert_eq!(solver.solve(&input), Err(SolveError::Unsolvable));
    }

    #[test]
    fn test_exhausted_search_is_unsolvable() {
        // Row 0 leaves only 9 for its last cell, but the 9 given below it
        // in the same column makes that impossible. The first unsolved
        // cell has no candidate at all, so the search retreats past it
        // immediately.
        let input = format!("123456780{}9{}", "0".repeat(8), "0".repeat(63));
        assert_eq!(input.chars().count(), 81);

        let mut solver = BacktrackSolver::new();
        assert_eq!(solver.solve(&input), Err(SolveError::Unsolvable));
    }

    #[test]
    fn test_rejects_malformed_input() {
        let mut solver = BacktrackSolver::new();

        assert!(matches!(
            solver.solve("123"),
            Err(SolveError::InvalidInput(_))
        ));
        assert!(matches!(
            solver.solve(&"0".repeat(82)),
            Err(SolveError::InvalidInput(_))
        ));

        let mut with_letter = "0".repeat(81);
        with_letter.replace_range(13..14, "a");
        assert!(matches!(
            solver.solve(&with_letter),
            Err(SolveError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_fixed_cells_retain_their_values() {
        let input =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

        let mut solver = BacktrackSolver::new();
        let solution = solver.solve(input).unwrap();

        for (index, ch) in input.chars().enumerate() {
            let given = ch.to_digit(10).unwrap();
            if given != 0 {
                assert_eq!(u32::from(solution[index]), given, "cell {index} changed");
            }
        }
    }

    #[test]
    fn test_solver_is_reusable() {
        let mut solver = BacktrackSolver::new();

        // A failed solve must not leak state into a later one.
        assert!(solver.solve("123").is_err());

        let solution = solver.solve(COMPLETE_BOARD).unwrap();
        let rendered: String = solution.iter().map(u8::to_string).collect();
        assert_eq!(rendered, COMPLETE_BOARD);
    }

    #[test]
    fn test_next_candidate_resumes_past_floor() {
        // A blank board admits every value; the floor walks the candidates
        // upward one at a time.
        let mut grid: Grid = "0".repeat(81).parse().unwrap();
        assert_eq!(next_candidate(&grid, 0), 1);

        grid.set_value(0, 1);
        assert_eq!(next_candidate(&grid, 0), 2);

        grid.set_value(0, 9);
        assert_eq!(next_candidate(&grid, 0), 0);
    }

    #[test]
    fn test_next_candidate_skips_used_values() {
        let mut input = "0".repeat(81);
        input.replace_range(1..2, "1"); // row peer
        input.replace_range(9..10, "2"); // column peer
        input.replace_range(10..11, "3"); // block peer
        let grid: Grid = input.parse().unwrap();

        assert_eq!(next_candidate(&grid, 0), 4);
    }
}
