//! Board module - settled cells, collision checks and line clears
//!
//! The board is the union of all settled cells, stored as a 10x20 grid of
//! color tags (row-major flat array, zero allocation). A grid slot holds at most
//! one cell, so two settled cells can never share a coordinate.
//! Coordinates: column 0..9 (left to right), row 0..19 (top to bottom).

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, Color, Direction, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices reported by [`Board::find_full_rows`], ascending.
pub type FullRows = ArrayVec<i8, { BOARD_HEIGHT as usize }>;

/// Settled cells of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Option<Color>; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from a cell, `None` when off the grid
    #[inline(always)]
    fn index(cell: Cell) -> Option<usize> {
        if Self::is_out_of_bounds(cell) {
            return None;
        }
        Some((cell.row as usize) * (BOARD_WIDTH as usize) + (cell.col as usize))
    }

    pub fn is_out_of_bounds(cell: Cell) -> bool {
        cell.col < 0
            || cell.col >= BOARD_WIDTH as i8
            || cell.row < 0
            || cell.row >= BOARD_HEIGHT as i8
    }

    /// Color of the settled cell at `cell`, if any
    pub fn get(&self, cell: Cell) -> Option<Color> {
        Self::index(cell).and_then(|idx| self.cells[idx])
    }

    /// Set or clear a cell. Returns false if `cell` is off the grid.
    pub fn set(&mut self, cell: Cell, color: Option<Color>) -> bool {
        match Self::index(cell) {
            Some(idx) => {
                self.cells[idx] = color;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    /// Number of settled cells
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Iterate settled cells in row-major order
    pub fn settled_cells(&self) -> impl Iterator<Item = (Cell, Color)> + '_ {
        let width = BOARD_WIDTH as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, color)| {
            color.map(|color| {
                let cell = Cell::new((idx % width) as i8, (idx / width) as i8);
                (cell, color)
            })
        })
    }

    /// Does `piece` collide when moved one step in `direction`?
    ///
    /// A moved cell collides when it passes the floor, either wall, or lands on a
    /// settled cell. Rows above the board are open. `Direction::None` checks the
    /// piece where it stands.
    pub fn collides(&self, piece: &Piece, direction: Direction) -> bool {
        let (dcol, drow) = direction.delta();
        piece.cells().iter().any(|&cell| {
            let moved = cell.offset(dcol, drow);
            moved.row >= BOARD_HEIGHT as i8
                || moved.col < 0
                || moved.col >= BOARD_WIDTH as i8
                || self.is_occupied(moved)
        })
    }

    /// Merge a piece into the settled cells.
    ///
    /// Cells above the top edge are not stored. Returns false if any cell was
    /// dropped that way.
    pub fn settle(&mut self, piece: &Piece) -> bool {
        let color = piece.color();
        let mut all_stored = true;
        for &cell in piece.cells() {
            all_stored &= self.set(cell, Some(color));
        }
        all_stored
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: i8) -> bool {
        if row < 0 || row >= BOARD_HEIGHT as i8 {
            return false;
        }
        let start = row as usize * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Rows whose cell count equals the board width, ascending
    pub fn find_full_rows(&self) -> FullRows {
        (0..BOARD_HEIGHT as i8)
            .filter(|&row| self.is_row_full(row))
            .collect()
    }

    /// Drop every cell in `rows` and compact the rest downwards.
    ///
    /// A remaining cell moves down by the number of removed rows below it, so the
    /// relative order of remaining rows is preserved. Uses a two-pointer pass
    /// with `copy_within` (no allocation).
    pub fn remove_and_shift(&mut self, rows: &[i8]) {
        if rows.is_empty() {
            return;
        }

        let width = BOARD_WIDTH as usize;
        let mut write_row = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_row in (0..BOARD_HEIGHT as usize).rev() {
            if rows.contains(&(read_row as i8)) {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src_start = read_row * width;
                let dst_start = write_row * width;
                self.cells
                    .copy_within(src_start..src_start + width, dst_start);
            }
        }

        // Clear the rows uncovered at the top
        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }
    }

    /// Find and remove all full rows. Returns the removed row indices.
    pub fn clear_full_rows(&mut self) -> FullRows {
        let full = self.find_full_rows();
        self.remove_and_shift(&full);
        full
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
