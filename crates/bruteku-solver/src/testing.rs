//! Test utilities shared across solver tests.

use bruteku_core::NumberSet;

/// A valid complete board used as a fixture throughout the tests.
pub const COMPLETE_BOARD: &str =
    "123456789456789123789123456231564897564897231897231564312645978645978312978312645";

/// Asserts that `solution` is a valid completion of `input`.
///
/// Checks that every row, column, and block contains each value 1-9
/// exactly once and that every nonzero input cell retains its value.
#[track_caller]
pub fn assert_valid_solution(input: &str, solution: &[u8; 81]) {
    for group in 0..9 {
        let row: NumberSet = (0..9).map(|col| solution[group * 9 + col]).collect();
        assert_eq!(row, NumberSet::FULL, "row {group} is incomplete");

        let col: NumberSet = (0..9).map(|row| solution[row * 9 + group]).collect();
        assert_eq!(col, NumberSet::FULL, "column {group} is incomplete");

        let base = (group / 3) * 27 + (group % 3) * 3;
        let block: NumberSet = (0..9).map(|i| solution[base + (i / 3) * 9 + i % 3]).collect();
        assert_eq!(block, NumberSet::FULL, "block {group} is incomplete");
    }

    for (index, ch) in input.chars().enumerate() {
        let given = ch.to_digit(10).unwrap();
        if given != 0 {
            assert_eq!(
                u32::from(solution[index]),
                given,
                "fixed cell {index} changed"
            );
        }
    }
}
