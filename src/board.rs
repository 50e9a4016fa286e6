//! Board state representation and move generation for the 3x3 sliding puzzle

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid width and height
pub const GRID_SIZE: usize = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = 9;

/// The value representing the blank (movable empty) cell
pub const BLANK: u8 = 0;

/// The canonical goal arrangement: blank first, tiles in row-major order.
pub const GOAL: Board = Board {
    cells: [0, 1, 2, 3, 4, 5, 6, 7, 8],
};

/// A complete puzzle configuration.
///
/// Cells are stored row-major; a valid board holds each value 0-8 exactly
/// once, with 0 denoting the blank. The type is `Copy` (9 bytes) and
/// hashable so it can key the explored set directly.
///
/// The `cells` field is public for direct construction; use
/// [`Board::validate`] to check the permutation invariant before handing a
/// hand-built board to the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [u8; CELL_COUNT],
}

impl Board {
    /// Create a board from raw cells, validating the permutation invariant.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTileValue`] or
    /// [`crate::Error::DuplicateTile`] if the cells are not a permutation
    /// of 0-8.
    pub fn new(cells: [u8; CELL_COUNT]) -> Result<Self, crate::Error> {
        let board = Board { cells };
        board.validate()?;
        Ok(board)
    }

    /// Parse a board from a string.
    ///
    /// Accepts either a bare 9-digit string (`"125340678"`) or a
    /// comma/whitespace separated list (`"1,2,5,3,4,0,6,7,8"`). The blank
    /// is written as `0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not encode a permutation of 0-8.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        let tokens: Vec<&str> = if s.contains(',') || s.contains(char::is_whitespace) {
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty())
                .collect()
        } else {
            // Bare digit string: one cell per character.
            return Self::parse_digits(s);
        };

        if tokens.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: tokens.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [0u8; CELL_COUNT];
        for (i, token) in tokens.iter().enumerate() {
            cells[i] = token
                .parse::<u8>()
                .map_err(|_| crate::Error::InvalidTileCharacter {
                    character: token.chars().next().unwrap_or(' '),
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Self::new(cells)
    }

    fn parse_digits(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [0u8; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| crate::Error::InvalidTileCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
            cells[i] = digit as u8;
        }

        Self::new(cells)
    }

    /// Check the permutation invariant: each value 0-8 appears exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTileValue`] for out-of-range cells and
    /// [`crate::Error::DuplicateTile`] for repeated values.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let mut seen = [false; CELL_COUNT];
        for (i, &value) in self.cells.iter().enumerate() {
            if value as usize >= CELL_COUNT {
                return Err(crate::Error::InvalidTileValue {
                    value,
                    position: i,
                    context: format!("{:?}", self.cells),
                });
            }
            if seen[value as usize] {
                return Err(crate::Error::DuplicateTile {
                    value,
                    context: format!("{:?}", self.cells),
                });
            }
            seen[value as usize] = true;
        }
        Ok(())
    }

    /// Whether this board equals the goal arrangement.
    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Linear index of the blank cell, or `None` on a blank-less (invalid)
    /// board.
    pub fn blank_index(&self) -> Option<usize> {
        self.cells.iter().position(|&c| c == BLANK)
    }

    /// All boards reachable by sliding one tile into the blank.
    ///
    /// For a valid board this returns between 2 (blank in a corner) and
    /// 4 (blank in the center) boards, none equal to the input. The input
    /// is never mutated. An invalid board without a blank yields an empty
    /// vector.
    pub fn neighbors(&self) -> Vec<Board> {
        let Some(blank) = self.blank_index() else {
            return Vec::new();
        };
        let row = (blank / GRID_SIZE) as isize;
        let col = (blank % GRID_SIZE) as isize;

        let candidates = [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)];

        let mut result = Vec::with_capacity(4);
        for (r, c) in candidates {
            if r < 0 || r >= GRID_SIZE as isize || c < 0 || c >= GRID_SIZE as isize {
                continue;
            }
            let tile = r as usize * GRID_SIZE + c as usize;
            let mut next = *self;
            next.cells.swap(blank, tile);
            result.push(next);
        }
        result
    }

    /// Whether the goal is reachable from this board.
    ///
    /// A tile slide never changes the inversion parity of the tiles on an
    /// odd-width grid, and the goal has zero inversions, so a board is
    /// solvable iff its inversion count (blank excluded) is even.
    pub fn is_solvable(&self) -> bool {
        self.count_inversions() % 2 == 0
    }

    fn count_inversions(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != BLANK)
            .map(|(i, &value)| {
                self.cells[i + 1..]
                    .iter()
                    .filter(|&&later| later != BLANK && later < value)
                    .count()
            })
            .sum()
    }

    /// Encode the board as a 9-digit string (the inverse of digit parsing).
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| char::from(b'0' + c)).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(GRID_SIZE) {
            for &cell in row {
                if cell == BLANK {
                    write!(f, " . ")?;
                } else {
                    write!(f, " {cell} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        GOAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_is_valid_and_goal() {
        GOAL.validate().unwrap();
        assert!(GOAL.is_goal());
        assert_eq!(GOAL.blank_index(), Some(0));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let board = Board {
            cells: [0, 1, 2, 3, 4, 5, 6, 7, 9],
        };
        let err = board.validate().unwrap_err();
        assert!(err.is_invalid_state());
        assert!(matches!(err, crate::Error::InvalidTileValue { value: 9, .. }));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let board = Board {
            cells: [0, 1, 2, 3, 3, 5, 6, 7, 8],
        };
        let err = board.validate().unwrap_err();
        assert!(matches!(err, crate::Error::DuplicateTile { value: 3, .. }));
    }

    #[test]
    fn test_parse_digit_string() {
        let board = Board::parse("125340678").unwrap();
        assert_eq!(board.cells, [1, 2, 5, 3, 4, 0, 6, 7, 8]);
    }

    #[test]
    fn test_parse_comma_list() {
        let board = Board::parse("1,2,5,3,4,0,6,7,8").unwrap();
        assert_eq!(board.cells, [1, 2, 5, 3, 4, 0, 6, 7, 8]);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let err = Board::parse("01234567").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength { expected: 9, got: 8, .. }
        ));
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let err = Board::parse("01234567x").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidTileCharacter { character: 'x', position: 8, .. }
        ));
    }

    #[test]
    fn test_encode_round_trips() {
        let board = Board::parse("125340678").unwrap();
        assert_eq!(Board::parse(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_neighbor_counts_by_blank_position() {
        // Corners -> 2, edges -> 3, center -> 4.
        let expected = [2, 3, 2, 3, 4, 3, 2, 3, 2];
        for (index, &count) in expected.iter().enumerate() {
            let mut board = GOAL;
            board.cells.swap(0, index);
            assert_eq!(
                board.neighbors().len(),
                count,
                "blank at index {index}"
            );
        }
    }

    #[test]
    fn test_neighbors_of_reference_board() {
        // Blank at index 5 (row 1, col 2): up, down and left are in range.
        let board = Board::parse("125340678").unwrap();
        let neighbors = board.neighbors();
        assert_eq!(neighbors.len(), 3);

        let swapped: Vec<[u8; 9]> = [2usize, 4, 8]
            .iter()
            .map(|&tile| {
                let mut cells = board.cells;
                cells.swap(5, tile);
                cells
            })
            .collect();
        for cells in swapped {
            assert!(neighbors.iter().any(|n| n.cells == cells));
        }
    }

    #[test]
    fn test_neighbors_never_return_input() {
        let board = Board::parse("125340678").unwrap();
        for neighbor in board.neighbors() {
            assert_ne!(neighbor, board);
            neighbor.validate().unwrap();
        }
    }

    #[test]
    fn test_solvability_parity() {
        assert!(GOAL.is_solvable());
        // One slide away from goal: still solvable.
        let board = Board::parse("102345678").unwrap();
        assert!(board.is_solvable());
        // Two tiles swapped directly: odd inversion count, unreachable.
        let board = Board::parse("021345678").unwrap();
        assert!(!board.is_solvable());
    }

    #[test]
    fn test_display_marks_blank() {
        let rendered = GOAL.to_string();
        assert!(rendered.contains('.'));
        assert_eq!(rendered.lines().count(), 3);
    }
}
