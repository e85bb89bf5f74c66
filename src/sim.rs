//! Headless simulation: scripted actions plus ticks, no timer.

use serde::Serialize;

use crate::cli::SimOptions;
use crate::core::{GameSnapshot, GameState};

#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub seed: u32,
    pub ticks: u32,
    pub lines: u32,
    pub final_state: GameSnapshot,
}

/// Play `ticks` ticks, applying the next script action before each one.
///
/// Stops early on game over.
pub fn run_sim(options: &SimOptions) -> (GameState, SimReport) {
    let mut state = GameState::new(options.seed);
    let mut ticks = 0;
    let mut script = options.script.iter().cycle();

    while ticks < options.ticks && !state.game_over() {
        if let Some(&action) = script.next() {
            state = state.apply(action);
        }
        state = state.tick();
        ticks += 1;
    }

    let report = SimReport {
        seed: options.seed,
        ticks,
        lines: state.lines(),
        final_state: state.snapshot(),
    };
    (state, report)
}
