//! Board tests - collision and line clearing through the public API

use blockfall::core::{Board, Piece};
use blockfall::types::{Cell, Color, Direction, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, row: i8, color: Color) {
    for col in 0..BOARD_WIDTH as i8 {
        board.set(Cell::new(col, row), Some(color));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert!(board.is_empty());
    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(Cell::new(col, row)), None);
        }
    }
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();
    assert!(!board.set(Cell::new(-1, 0), Some(Color::Red)));
    assert!(!board.set(Cell::new(0, -1), Some(Color::Red)));
    assert!(!board.set(Cell::new(BOARD_WIDTH as i8, 0), Some(Color::Red)));
    assert!(!board.set(Cell::new(0, BOARD_HEIGHT as i8), Some(Color::Red)));
    assert!(board.is_empty());
}

#[test]
fn test_bottom_row_always_collides_down() {
    let board = Board::new();
    for kind in ShapeKind::ALL {
        let piece = Piece::spawn(kind);
        let bottom = piece.cells().iter().map(|c| c.row).max().unwrap();
        let resting = piece.translate(0, BOARD_HEIGHT as i8 - 1 - bottom);
        assert!(board.collides(&resting, Direction::Down), "{:?}", kind);
    }
}

#[test]
fn test_left_column_always_collides_left() {
    let board = Board::new();
    for kind in ShapeKind::ALL {
        let piece = Piece::spawn(kind).translate(0, 5);
        let left = piece.cells().iter().map(|c| c.col).min().unwrap();
        let at_wall = piece.translate(-left, 0);
        assert!(board.collides(&at_wall, Direction::Left), "{:?}", kind);
    }
}

#[test]
fn test_full_row_five() {
    let mut board = Board::new();
    fill_row(&mut board, 5, Color::Cyan);
    for col in 0..4 {
        board.set(Cell::new(col, 2), Some(Color::Red));
        board.set(Cell::new(col, 12), Some(Color::Blue));
    }

    let full = board.find_full_rows();
    assert_eq!(full.as_slice(), &[5]);

    let before = board;
    board.remove_and_shift(&full);

    assert!(board.settled_cells().all(|(cell, _)| cell.row != 5));
    for col in 0..4 {
        // above: shifted down by one
        assert_eq!(board.get(Cell::new(col, 3)), Some(Color::Red));
        assert_eq!(board.get(Cell::new(col, 2)), None);
        // below: unchanged
        assert_eq!(board.get(Cell::new(col, 12)), before.get(Cell::new(col, 12)));
    }
    assert_eq!(board.len(), 8);
}

#[test]
fn test_clear_four_rows_keeps_order() {
    let mut board = Board::new();
    for row in 16..20 {
        fill_row(&mut board, row, Color::Green);
    }
    board.set(Cell::new(0, 14), Some(Color::Red));
    board.set(Cell::new(0, 15), Some(Color::Blue));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 4);
    assert_eq!(board.get(Cell::new(0, 18)), Some(Color::Red));
    assert_eq!(board.get(Cell::new(0, 19)), Some(Color::Blue));
    assert_eq!(board.len(), 2);
}
