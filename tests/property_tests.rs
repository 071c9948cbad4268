//! Property tests for board, shape, controller and randomizer invariants

use proptest::prelude::*;

use blockfall::core::{standard_shape, BagRandomizer, Board, PieceController, PieceDef, Shape};
use blockfall::types::{Color, PieceKind};

const ROWS: usize = 8;
const COLS: usize = 6;

fn board_from(bits: &[bool]) -> Board {
    let mut board = Board::new(ROWS, COLS);
    for (i, &filled) in bits.iter().enumerate() {
        if filled {
            board.set((i / COLS) as i32, (i % COLS) as i32, Some(Color::Blue));
        }
    }
    board
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(prop::bool::weighted(0.3), ROWS * COLS)
        .prop_map(|bits| board_from(&bits))
}

fn arb_kind() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

/// Any rectangular 0/1 matrix up to 4x4 with at least one filled cell
fn arb_shape() -> impl Strategy<Value = Shape> {
    (1usize..=4, 1usize..=4)
        .prop_flat_map(|(rows, cols)| {
            prop::collection::vec(any::<bool>(), rows * cols).prop_map(move |bits| (cols, bits))
        })
        .prop_filter("needs a filled cell", |(_, bits)| bits.iter().any(|&b| b))
        .prop_map(|(cols, bits)| {
            let rows: Vec<Vec<u8>> = bits
                .chunks(cols)
                .map(|row| row.iter().map(|&b| b as u8).collect())
                .collect();
            let refs: Vec<&[u8]> = rows.iter().map(|row| row.as_slice()).collect();
            Shape::from_rows(&refs).unwrap()
        })
}

proptest! {
    #[test]
    fn test_collision_matches_cellwise_check(
        board in arb_board(),
        kind in arb_kind(),
        row in -3i32..10,
        col in -3i32..8,
    ) {
        let shape = standard_shape(kind);
        let expected = shape.filled_cells().any(|(dr, dc)| {
            let r = row + dr as i32;
            let c = col + dc as i32;
            c < 0 || c >= COLS as i32 || r >= ROWS as i32 || (r >= 0 && board.is_occupied(r, c))
        });
        prop_assert_eq!(board.collides_at(&shape, row, col), expected);
    }

    #[test]
    fn test_four_rotations_restore_shape(shape in arb_shape()) {
        let once = shape.rotate_clockwise();
        prop_assert_eq!(once.rows(), shape.cols());
        prop_assert_eq!(once.filled_count(), shape.filled_count());

        let back = once.rotate_clockwise().rotate_clockwise().rotate_clockwise();
        prop_assert_eq!(back, shape);
    }

    #[test]
    fn test_rejected_moves_leave_piece_untouched(
        board in arb_board(),
        kind in arb_kind(),
        moves in prop::collection::vec(0u8..4, 1..30),
    ) {
        let def = PieceDef::new(standard_shape(kind), kind.color());
        let mut controller = PieceController::new();
        controller.spawn(kind.index(), &def, COLS);

        for m in moves {
            let before = controller.active().cloned();
            let accepted = match m {
                0 => controller.try_move(&board, 0, -1),
                1 => controller.try_move(&board, 0, 1),
                2 => controller.try_move(&board, 1, 0),
                _ => controller.try_rotate(&board),
            };
            if accepted {
                prop_assert!(!controller.collides(&board));
            } else {
                prop_assert_eq!(controller.active().cloned(), before);
            }
        }
    }

    #[test]
    fn test_line_clear_conserves_partial_rows(
        bits in prop::collection::vec(prop::bool::weighted(0.8), ROWS * COLS),
    ) {
        let mut board = board_from(&bits);
        let kept: Vec<Vec<bool>> = (0..ROWS)
            .filter(|&r| !board.is_row_full(r))
            .map(|r| board.row(r).unwrap().iter().map(|c| c.is_some()).collect())
            .collect();
        let before = board.occupied_count();

        let cleared = board.clear_full_rows();

        prop_assert_eq!(cleared, ROWS - kept.len());
        prop_assert_eq!(board.occupied_count(), before - cleared * COLS);
        for r in 0..ROWS {
            prop_assert!(!board.is_row_full(r));
        }
        // Surviving rows keep their order and sit at the bottom.
        let after: Vec<Vec<bool>> = (cleared..ROWS)
            .map(|r| board.row(r).unwrap().iter().map(|c| c.is_some()).collect())
            .collect();
        prop_assert_eq!(after, kept);
        for r in 0..cleared {
            prop_assert!(board.row(r).unwrap().iter().all(|c| c.is_none()));
        }
    }

    #[test]
    fn test_first_bag_is_a_permutation(seed in any::<u64>(), count in 1usize..10) {
        let mut bag = BagRandomizer::new(count, Some(seed));
        let mut dealt: Vec<usize> = (0..count).map(|_| bag.next()).collect();
        dealt.sort_unstable();
        prop_assert_eq!(dealt, (0..count).collect::<Vec<_>>());
    }

    #[test]
    fn test_no_immediate_repeat(seed in any::<u64>(), count in 2usize..8) {
        let mut bag = BagRandomizer::new(count, Some(seed));
        let mut prev = bag.next();
        for _ in 0..200 {
            let next = bag.next();
            prop_assert!(next < count);
            prop_assert_ne!(next, prev);
            prev = next;
        }
    }
}
