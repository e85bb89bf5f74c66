//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain values with no behaviour beyond small conversions, so they
//! can be used by the engine, the input mapping and any renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn anchor**: columns 3-6, rows -1 and 0 (some pieces start above the
//!   visible board and fall into view)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 1000 | Tick period before the level adjustment |
//! | `TICK_STEP_MS` | 100 | Period reduction per level |
//! | `MIN_TICK_MS` | 100 | Floor for the tick period |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(GameAction::from_str("hold"), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Edge length of one cell in pixels.
pub const BLOCK_SIZE: i32 = 20;

/// Tick period at level 0, before the per-level reduction.
pub const BASE_TICK_MS: u32 = 1000;

/// Tick period reduction per level.
pub const TICK_STEP_MS: u32 = 100;

/// The tick period never drops below this.
pub const MIN_TICK_MS: u32 = 100;


/// A grid position: column grows to the right, row grows downwards.
///
/// Rows may be negative while a freshly spawned piece is still above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub col: i8,
    pub row: i8,
}

impl Cell {
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Offset this cell by `(dcol, drow)`.
    pub const fn offset(self, dcol: i8, drow: i8) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    /// Top-left pixel of this cell.
    pub fn to_pixels(self, block_size: i32) -> (i32, i32) {
        (self.col as i32 * block_size, self.row as i32 * block_size)
    }

    /// Convert pixel coordinates back to a cell.
    ///
    /// Returns `None` unless both coordinates are exact multiples of `block_size`
    /// and the result fits the grid coordinate range.
    pub fn from_pixels(x: i32, y: i32, block_size: i32) -> Option<Self> {
        if block_size <= 0 || x % block_size != 0 || y % block_size != 0 {
            return None;
        }
        let col = i8::try_from(x / block_size).ok()?;
        let row = i8::try_from(y / block_size).ok()?;
        Some(Self { col, row })
    }
}

/// The seven shape archetypes, in catalog order.
///
/// The catalog order matters: piece selection draws an index in `0..7` and maps
/// it through [`ShapeKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    O,
    I,
    J,
    L,
    S,
    Z,
    T,
}

impl ShapeKind {
    /// Catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::O,
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(ShapeKind::O),
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "t" => Some(ShapeKind::T),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::O => "o",
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::T => "t",
        }
    }

    /// Color tag carried by every cell of this shape.
    pub fn color(&self) -> Color {
        match self {
            ShapeKind::O => Color::Yellow,
            ShapeKind::I => Color::Cyan,
            ShapeKind::J => Color::Blue,
            ShapeKind::L => Color::Orange,
            ShapeKind::S => Color::Green,
            ShapeKind::Z => Color::Red,
            ShapeKind::T => Color::Purple,
        }
    }
}

/// Color tag of a cell. Renderers decide how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Cyan,
    Blue,
    Orange,
    Green,
    Red,
    Purple,
}

impl Color {
    pub fn as_hex(&self) -> &'static str {
        match self {
            Color::Yellow => "#f0f000",
            Color::Cyan => "#00f0f0",
            Color::Blue => "#0000f0",
            Color::Orange => "#f0a000",
            Color::Green => "#00f000",
            Color::Red => "#f00000",
            Color::Purple => "#a000f0",
        }
    }
}

/// Movement direction used by collision checks.
///
/// `None` checks the piece where it stands (used after rotating).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// `(dcol, drow)` of one step in this direction.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::None => (0, 0),
        }
    }
}

/// Discrete player actions.
///
/// Each action maps to exactly one state transition. The periodic tick is not an
/// action; it is delivered separately by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    MoveDown,
    /// Rotate the piece a quarter turn around its second cell
    Rotate,
    /// Drop the piece to its lowest non-colliding position
    HardDrop,
    /// Start a fresh game, keeping the high score
    Restart,
}

impl GameAction {
    pub const ALL: [GameAction; 6] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Restart,
    ];

    /// Parse action from its camelCase name (case-insensitive).
    ///
    /// Unrecognised names yield `None`; callers drop them.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Restart => "restart",
        }
    }
}
