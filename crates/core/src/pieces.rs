//! Pieces module - shape catalog and spawning
//!
//! Every shape is four cells placed directly at the spawn anchor (columns 3-6).
//! Cell order is significant: the second cell is the rotation pivot.

use crate::rng;
use crate::types::{Cell, Color, ShapeKind};

/// Four cells of a piece, in construction order.
pub type PieceCells = [Cell; 4];

/// Catalog geometry for a shape at the spawn anchor.
pub fn spawn_cells(kind: ShapeKind) -> PieceCells {
    let c = Cell::new;
    match kind {
        ShapeKind::O => [c(4, -1), c(4, 0), c(5, -1), c(5, 0)],
        ShapeKind::I => [c(3, 0), c(4, 0), c(5, 0), c(6, 0)],
        ShapeKind::J => [c(3, 0), c(4, 0), c(5, 0), c(3, -1)],
        ShapeKind::L => [c(3, 0), c(4, 0), c(5, 0), c(5, -1)],
        ShapeKind::S => [c(3, 0), c(4, 0), c(4, -1), c(5, -1)],
        ShapeKind::Z => [c(3, -1), c(4, -1), c(4, 0), c(5, 0)],
        ShapeKind::T => [c(3, 0), c(4, 0), c(5, 0), c(4, -1)],
    }
}

/// A piece: four cells plus the shape it came from.
///
/// Pieces are values; every transform returns a new piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    cells: PieceCells,
}

impl Piece {
    /// Materialize a catalog shape at the spawn anchor.
    pub fn spawn(kind: ShapeKind) -> Self {
        Self {
            kind,
            cells: spawn_cells(kind),
        }
    }

    /// Build a piece from explicit cells (used by tests and tools).
    pub fn from_cells(kind: ShapeKind, cells: PieceCells) -> Self {
        Self { kind, cells }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    pub fn cells(&self) -> &PieceCells {
        &self.cells
    }

    /// Rotation pivot: the second cell in construction order.
    pub fn pivot(&self) -> Cell {
        self.cells[1]
    }

    /// Copy of this piece shifted by `(dcol, drow)`.
    pub fn translate(&self, dcol: i8, drow: i8) -> Self {
        Self {
            kind: self.kind,
            cells: self.cells.map(|cell| cell.offset(dcol, drow)),
        }
    }

    /// Copy of this piece with every cell mapped through `f`.
    pub(crate) fn map_cells(&self, f: impl Fn(Cell) -> Cell) -> Self {
        Self {
            kind: self.kind,
            cells: self.cells.map(f),
        }
    }

    pub fn top_row(&self) -> i8 {
        self.cells.iter().map(|c| c.row).min().unwrap_or(0)
    }
}

/// Pick the next shape from `seed` and place it at the spawn anchor.
///
/// Returns the piece and the successor seed.
pub fn spawn_piece(seed: u32) -> (Piece, u32) {
    let (next_seed, index) = rng::next_int(seed, 0, ShapeKind::ALL.len() as i32);
    let kind = ShapeKind::ALL[index as usize];
    (Piece::spawn(kind), next_seed)
}
