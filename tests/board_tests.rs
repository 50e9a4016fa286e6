//! Test suite for board representation and move generation
//! Validates the permutation invariant and the adjacency structure

use eightpuzzle::board::{BLANK, Board, GRID_SIZE};
use rand::{SeedableRng, rngs::StdRng};

fn blank_position(board: &Board) -> (usize, usize) {
    let index = board.blank_index().expect("valid board has a blank");
    (index / GRID_SIZE, index % GRID_SIZE)
}

mod neighbor_structure {
    use super::*;

    #[test]
    fn test_neighbor_count_matches_blank_position() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let board = eightpuzzle::scramble::random_permutation(&mut rng);
            let (row, col) = blank_position(&board);
            let on_edge_rows = usize::from(row == 0) + usize::from(row == GRID_SIZE - 1);
            let on_edge_cols = usize::from(col == 0) + usize::from(col == GRID_SIZE - 1);
            let expected = 4 - on_edge_rows - on_edge_cols;
            assert_eq!(board.neighbors().len(), expected, "board {}", board.encode());
        }
    }

    #[test]
    fn test_each_neighbor_is_one_adjacent_blank_swap() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let board = eightpuzzle::scramble::random_permutation(&mut rng);
            let blank = board.blank_index().unwrap();
            for neighbor in board.neighbors() {
                neighbor.validate().unwrap();

                // Exactly two cells differ: the old and the new blank cell.
                let changed: Vec<usize> = (0..9)
                    .filter(|&i| board.cells[i] != neighbor.cells[i])
                    .collect();
                assert_eq!(changed.len(), 2);
                assert!(changed.contains(&blank));

                let moved = neighbor.blank_index().unwrap();
                assert_eq!(neighbor.cells[blank], board.cells[moved]);
                assert_ne!(board.cells[moved], BLANK);

                // The swapped cells are orthogonally adjacent.
                let (r1, c1) = (blank / GRID_SIZE, blank % GRID_SIZE);
                let (r2, c2) = (moved / GRID_SIZE, moved % GRID_SIZE);
                assert_eq!(r1.abs_diff(r2) + c1.abs_diff(c2), 1);
            }
        }
    }

    #[test]
    fn test_neighbor_relation_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let board = eightpuzzle::scramble::random_permutation(&mut rng);
            for neighbor in board.neighbors() {
                assert!(neighbor.neighbors().contains(&board));
            }
        }
    }
}

mod parity {
    use super::*;

    #[test]
    fn test_slides_preserve_solvability() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let board = eightpuzzle::scramble::random_permutation(&mut rng);
            let solvable = board.is_solvable();
            for neighbor in board.neighbors() {
                assert_eq!(neighbor.is_solvable(), solvable);
            }
        }
    }

    #[test]
    fn test_goal_component_passes_parity() {
        // Every board reachable by a walk from the goal must be solvable.
        let mut board = eightpuzzle::board::GOAL;
        for step in 0..100usize {
            let neighbors = board.neighbors();
            board = neighbors[step % neighbors.len()];
            assert!(board.is_solvable());
        }
    }
}

mod parsing {
    use eightpuzzle::Error;

    use super::*;

    #[test]
    fn test_digit_and_list_forms_agree() {
        let digits = Board::parse("867254301").unwrap();
        let list = Board::parse("8,6,7,2,5,4,3,0,1").unwrap();
        let spaced = Board::parse("8 6 7 2 5 4 3 0 1").unwrap();
        assert_eq!(digits, list);
        assert_eq!(digits, spaced);
    }

    #[test]
    fn test_duplicate_tile_is_invalid_state() {
        let err = Board::parse("123345678").unwrap_err();
        assert!(err.is_invalid_state());
        assert!(matches!(err, Error::DuplicateTile { value: 3, .. }));
    }

    #[test]
    fn test_missing_blank_is_rejected() {
        // 1-9 has no blank and 9 is out of range.
        let err = Board::parse("123456789").unwrap_err();
        assert!(err.is_invalid_state());
    }
}
