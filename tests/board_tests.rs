//! Board tests - grid access, collision rule, locking and row sweeps

use blockfall::core::{Board, Shape};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

fn occupied_count(board: &Board) -> usize {
    board.cells().iter().filter(|c| c.is_some()).count()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_empty(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_collision_with_occupied_cell() {
    let mut board = Board::new();
    let t = Shape::canonical(PieceKind::T);
    board.set(4, 6, Some(PieceKind::I));

    // T at (3, 5) covers (4, 5), (3, 6), (4, 6), (5, 6)
    assert!(board.check_collision(&t, 3, 5));
    assert!(!board.check_collision(&t, 3, 3));
    assert!(!board.check_collision(&t, 5, 5));
}

#[test]
fn test_collision_bottom_row_boundary() {
    let board = Board::new();
    let t = Shape::canonical(PieceKind::T);

    // Filled rows 0-1 of the T; row 2 of the box is empty
    assert!(!board.check_collision(&t, 0, 18));
    assert!(board.check_collision(&t, 0, 19));
}

#[test]
fn test_collision_right_wall_uses_filled_cells_only() {
    let board = Board::new();
    let mut shape = Shape::canonical(PieceKind::I).rotated_cw();

    // Vertical I fills column 2 of its box: x = 7 puts it in the last column
    assert!(!board.check_collision(&shape, 7, 0));
    assert!(board.check_collision(&shape, 8, 0));

    shape = shape.rotated_cw();
    // Filled row is now row 2
    assert!(!board.check_collision(&shape, 6, 17));
    assert!(board.check_collision(&shape, 6, 18));
}

#[test]
fn test_collision_above_top_only_checks_sides() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 0, Some(PieceKind::L));
    }
    let o = Shape::canonical(PieceKind::O);

    assert!(!board.check_collision(&o, 0, -2));
    assert!(!board.check_collision(&o, 8, -5));
    assert!(board.check_collision(&o, 9, -5));
    assert!(board.check_collision(&o, 0, -1));
}

#[test]
fn test_lock_shape_writes_kind() {
    let mut board = Board::new();
    let o = Shape::canonical(PieceKind::O);

    board.lock_shape(&o, 3, 5, PieceKind::O);

    assert_eq!(board.get(3, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(3, 6), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 6), Some(Some(PieceKind::O)));
    assert_eq!(occupied_count(&board), 4);
}

#[test]
fn test_lock_shape_partially_above_board() {
    let mut board = Board::new();
    let o = Shape::canonical(PieceKind::O);

    board.lock_shape(&o, 0, -1, PieceKind::O);

    assert_eq!(occupied_count(&board), 2);
    assert!(board.is_occupied(0, 0));
    assert!(board.is_occupied(1, 0));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5, PieceKind::T);
    assert!(board.is_row_full(5));

    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 6, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(6));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_sweep_single_row_shifts_above() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);
    board.set(0, 3, Some(PieceKind::I));
    board.set(1, 4, Some(PieceKind::O));
    board.set(2, 6, Some(PieceKind::Z));

    assert_eq!(board.sweep_completed_rows(), 1);

    assert_eq!(board.get(1, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(0, 4), Some(Some(PieceKind::I)));
    assert_eq!(board.get(0, 3), Some(None));
    // Rows below the cleared row stay put
    assert_eq!(board.get(2, 6), Some(Some(PieceKind::Z)));
}

#[test]
fn test_sweep_separated_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);
    fill_row(&mut board, 10, PieceKind::I);
    fill_row(&mut board, 15, PieceKind::O);
    board.set(0, 4, Some(PieceKind::J));
    board.set(0, 9, Some(PieceKind::L));
    board.set(0, 14, Some(PieceKind::S));

    assert_eq!(board.sweep_completed_rows(), 3);

    // Each marker drops by the number of full rows below it
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
    assert_eq!(occupied_count(&board), 3);
}

#[test]
fn test_sweep_four_adjacent_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, PieceKind::I);
    }
    board.set(9, 15, Some(PieceKind::T));

    assert_eq!(board.sweep_completed_rows(), 4);
    assert_eq!(board.get(9, 19), Some(Some(PieceKind::T)));
    assert_eq!(occupied_count(&board), 1);
}

#[test]
fn test_sweep_full_board() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        fill_row(&mut board, y, PieceKind::S);
    }

    assert_eq!(board.sweep_completed_rows(), BOARD_HEIGHT as usize);
    assert_eq!(occupied_count(&board), 0);
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);

    board.clear();

    assert_eq!(board, Board::new());
}

#[test]
fn test_board_grid_layout() {
    let mut board = Board::new();
    board.set(3, 7, Some(PieceKind::J));

    let grid = board.to_grid();
    assert_eq!(grid.len(), BOARD_HEIGHT as usize);
    assert!(grid.iter().all(|row| row.len() == BOARD_WIDTH as usize));
    assert_eq!(grid[7][3], Some(PieceKind::J));
}

#[test]
fn test_sweep_rows_five_and_nine() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);
    fill_row(&mut board, 9, PieceKind::T);
    // Partial rows above, between and below
    board.set(2, 3, Some(PieceKind::J));
    board.set(4, 7, Some(PieceKind::L));
    board.set(6, 12, Some(PieceKind::S));

    assert_eq!(board.sweep_completed_rows(), 2);

    assert_eq!(board.to_grid().len(), BOARD_HEIGHT as usize);
    assert_eq!(board.get(2, 5), Some(Some(PieceKind::J)));
    assert_eq!(board.get(4, 8), Some(Some(PieceKind::L)));
    assert_eq!(board.get(6, 12), Some(Some(PieceKind::S)));
    assert!(board.row(0).iter().all(|c| c.is_none()));
    assert!(board.row(1).iter().all(|c| c.is_none()));
    assert_eq!(occupied_count(&board), 3);
}
