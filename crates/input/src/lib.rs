//! Keyboard input mapping (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Keys without a
//! mapping produce `None` and are dropped by the caller.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, map_key, should_quit};
