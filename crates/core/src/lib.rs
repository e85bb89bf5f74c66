//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole rule set of the falling-block game. It has no
//! dependencies on rendering, input devices or timers:
//!
//! - **Deterministic**: the same seed always produces the same game
//! - **Immutable**: every transition returns a fresh [`GameState`]
//! - **Infallible**: blocked moves are no-ops, never errors
//!
//! # Module Structure
//!
//! - [`rng`]: seeded linear congruential generator
//! - [`pieces`]: shape catalog and spawning
//! - [`board`]: settled cells, collision checks, line clears
//! - [`transform`]: shift, rotate and hard-drop of a single piece
//! - [`scoring`]: points and level progression
//! - [`game_state`]: the reducer (actions and ticks)
//! - [`speed`]: tick period by level
//! - [`snapshot`]: the view handed to renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let game = GameState::new(47583);
//! let game = game.apply(GameAction::MoveLeft).apply(GameAction::HardDrop);
//! let game = game.tick();
//!
//! assert_eq!(game.board().len(), 4);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod speed;
pub mod transform;

pub use blockfall_types as types;

pub use board::Board;
pub use game_state::{Event, GameState, Phase};
pub use pieces::{spawn_piece, Piece};
pub use rng::Lcg;
pub use snapshot::{CellSnapshot, GameSnapshot};
pub use speed::{tick_period, tick_period_ms, SpeedConfig};
