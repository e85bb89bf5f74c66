//! Renderer-facing view of a [`GameState`]
//!
//! Carries exactly what a renderer needs: the active piece and settled cells
//! with their colors, the counters and the game-over flag.

use serde::Serialize;

use crate::game_state::GameState;
use crate::types::{Cell, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellSnapshot {
    pub col: i8,
    pub row: i8,
    pub color: Color,
}

impl CellSnapshot {
    fn new(cell: Cell, color: Color) -> Self {
        Self {
            col: cell.col,
            row: cell.row,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub active: [CellSnapshot; 4],
    pub settled: Vec<CellSnapshot>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let active = state.active();
        let color = active.color();
        Self {
            active: (*active.cells()).map(|cell| CellSnapshot::new(cell, color)),
            settled: state
                .board()
                .settled_cells()
                .map(|(cell, color)| CellSnapshot::new(cell, color))
                .collect(),
            score: state.score(),
            high_score: state.high_score(),
            level: state.level(),
            game_over: state.game_over(),
        }
    }
}
