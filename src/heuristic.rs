//! Admissible distance estimate to the goal arrangement

use crate::board::{BLANK, Board, GRID_SIZE};

/// Manhattan distance from `board` to the goal.
///
/// Sums, over tiles 1-8 (blank excluded), the grid distance between each
/// tile's current cell and its goal cell. In the goal the blank sits at
/// index 0 and tile `v` at index `v`, so the goal cell of tile `v` is
/// `(v / 3, v % 3)`.
///
/// The estimate is admissible and consistent for the unit-cost tile slide:
/// every slide moves exactly one tile by one grid step, so it can reduce
/// the sum by at most 1. It is zero iff the board is the goal.
pub fn manhattan(board: &Board) -> u32 {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != BLANK)
        .map(|(index, &value)| {
            let goal = value as usize;
            let rows = (index / GRID_SIZE).abs_diff(goal / GRID_SIZE);
            let cols = (index % GRID_SIZE).abs_diff(goal % GRID_SIZE);
            (rows + cols) as u32
        })
        .sum()
}
