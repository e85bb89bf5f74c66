//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `blockfall::{core,input,runtime,types}`
//! and hosts the pieces used only by the binary: argument parsing and the
//! headless simulator.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_runtime as runtime;
pub use blockfall_types as types;

pub mod cli;
pub mod sim;
