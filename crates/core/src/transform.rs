//! Transform operations on a single piece
//!
//! All functions are pure: they take a piece and the settled board and return
//! the transformed piece, or `None` when the move is blocked.

use crate::board::Board;
use crate::pieces::Piece;
use crate::types::{Cell, Direction, BOARD_HEIGHT};

/// Upper bound on the hard-drop search. A piece starting at the highest spawn
/// row reaches the floor well within this many steps.
const MAX_DROP: i8 = BOARD_HEIGHT as i8 + 4;

/// Move one cell in `direction`, unless the piece collides that way.
pub fn shift(piece: &Piece, board: &Board, direction: Direction) -> Option<Piece> {
    if board.collides(piece, direction) {
        return None;
    }
    let (dcol, drow) = direction.delta();
    Some(piece.translate(dcol, drow))
}

/// Rotate a quarter turn around the piece's second cell.
///
/// `(x, y) -> (px + (y - py), py - (x - px))` for pivot `(px, py)`. The pivot
/// is the construction-order second cell, not the geometric center, so shapes
/// drift slightly as they turn. Rejected if the result overlaps settled cells or
/// leaves the board.
pub fn rotate(piece: &Piece, board: &Board) -> Option<Piece> {
    let Cell { col: px, row: py } = piece.pivot();
    let rotated = piece.map_cells(|Cell { col, row }| Cell::new(px + (row - py), py - (col - px)));
    if board.collides(&rotated, Direction::None) {
        None
    } else {
        Some(rotated)
    }
}

/// Largest `d >= 0` such that the piece moved down by `d` rows is still clear of
/// the floor and settled cells. Iterative and bounded.
pub fn drop_distance(piece: &Piece, board: &Board) -> i8 {
    let mut distance = 0;
    while distance < MAX_DROP && !board.collides(&piece.translate(0, distance), Direction::Down) {
        distance += 1;
    }
    distance
}

/// Drop the piece to its resting position. `None` if it is already resting.
pub fn hard_drop(piece: &Piece, board: &Board) -> Option<Piece> {
    match drop_distance(piece, board) {
        0 => None,
        distance => Some(piece.translate(0, distance)),
    }
}
