//! Session runtime.
//!
//! Merges the level-dependent tick timer and player input into one event
//! stream. Each event produces exactly one state transition, completed before
//! the next event is read. New states are published on a `watch` channel for
//! renderers; whenever a transition changes the level the timer is rebuilt with
//! the new period.

pub mod config;
pub mod session;

pub use blockfall_types as types;

pub use config::SessionConfig;
pub use session::{run_session, spawn_session, spawn_session_with_state, SessionHandle};
