//! Game state module - the reducer
//!
//! A [`GameState`] is an immutable snapshot. Every action and every tick
//! produces a new state; nothing is mutated in place. Lifecycle of the active
//! piece:
//!
//! - **Falling**: each tick moves it down one row.
//! - **Locking** (inside a single tick): when it cannot move down it is merged
//!   into the settled cells, full rows are cleared, score/level/high score are
//!   recomputed and the next piece is spawned from the current seed.
//! - **GameOver**: the locked piece reached row 0 (or the new piece has no room).
//!   Only [`GameAction::Restart`] leaves this phase.

use log::{debug, info};

use crate::board::Board;
use crate::pieces::{spawn_piece, Piece};
use crate::rng;
use crate::scoring::{level_for_score, line_clear_points};
use crate::snapshot::GameSnapshot;
use crate::transform;
use crate::types::{Direction, GameAction};

/// Observable lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Falling,
    GameOver,
}

/// One input to the reducer: a player action or a timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Action(GameAction),
    Tick,
}

impl From<GameAction> for Event {
    fn from(action: GameAction) -> Self {
        Event::Action(action)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    active: Piece,
    board: Board,
    score: u32,
    high_score: u32,
    level: u32,
    lines: u32,
    /// PRNG state for the next spawn
    seed: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_high_score(seed, 0)
    }

    /// Create a new game that carries over a high score
    pub fn with_high_score(seed: u32, high_score: u32) -> Self {
        let (active, seed) = spawn_piece(seed);
        Self {
            active,
            board: Board::new(),
            score: 0,
            high_score,
            level: level_for_score(0),
            lines: 0,
            seed,
            game_over: false,
        }
    }

    /// Start from an arbitrary layout (puzzles, replays, tests).
    ///
    /// `seed` is used for the next spawn.
    pub fn from_layout(board: Board, active: Piece, seed: u32) -> Self {
        Self {
            active,
            board,
            score: 0,
            high_score: 0,
            level: level_for_score(0),
            lines: 0,
            seed,
            game_over: false,
        }
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else {
            Phase::Falling
        }
    }

    /// Where the active piece would come to rest
    pub fn ghost(&self) -> Piece {
        let distance = transform::drop_distance(&self.active, &self.board);
        self.active.translate(0, distance)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Apply one event
    pub fn step(&self, event: Event) -> Self {
        match event {
            Event::Action(action) => self.apply(action),
            Event::Tick => self.tick(),
        }
    }

    /// Apply a player action.
    ///
    /// Blocked moves return an identical state. After game over everything but
    /// `Restart` is ignored.
    pub fn apply(&self, action: GameAction) -> Self {
        if self.game_over && action != GameAction::Restart {
            return self.clone();
        }

        let moved = match action {
            GameAction::MoveLeft => transform::shift(&self.active, &self.board, Direction::Left),
            GameAction::MoveRight => transform::shift(&self.active, &self.board, Direction::Right),
            GameAction::MoveDown => transform::shift(&self.active, &self.board, Direction::Down),
            GameAction::Rotate => transform::rotate(&self.active, &self.board),
            GameAction::HardDrop => transform::hard_drop(&self.active, &self.board),
            GameAction::Restart => return self.restart(),
        };

        match moved {
            Some(active) => Self {
                active,
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    /// One time step: gravity, or lock + clear + spawn when the piece is resting.
    pub fn tick(&self) -> Self {
        if self.game_over {
            return self.clone();
        }

        match transform::shift(&self.active, &self.board, Direction::Down) {
            Some(active) => Self {
                active,
                ..self.clone()
            },
            None => self.lock(),
        }
    }

    /// Fresh game seeded one PRNG step past the current seed; keeps the high score.
    fn restart(&self) -> Self {
        let (seed, _) = rng::next(self.seed);
        info!(
            "restart: score {} high score {} seed {}",
            self.score, self.high_score, seed
        );
        Self::with_high_score(seed, self.high_score)
    }

    fn lock(&self) -> Self {
        let locked = self.active;
        let mut board = self.board;
        board.settle(&locked);

        let cleared = board.clear_full_rows();
        let score = self.score + line_clear_points(cleared.len());
        let level = level_for_score(score);
        let high_score = self.high_score.max(score);

        let (next, seed) = spawn_piece(self.seed);

        // Checked against the piece that just locked, before rows shifted.
        let topped_out = locked.top_row() <= 0 || board.collides(&next, Direction::None);

        debug!(
            "lock {:?}: cleared {:?}, score {} -> {}",
            locked.kind(),
            cleared.as_slice(),
            self.score,
            score
        );
        if level != self.level {
            info!("level {} -> {}", self.level, level);
        }
        if topped_out {
            info!("game over: score {} high score {}", score, high_score);
        }

        Self {
            active: next,
            board,
            score,
            high_score,
            level,
            lines: self.lines + cleared.len() as u32,
            seed,
            game_over: topped_out,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
