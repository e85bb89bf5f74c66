//! The event loop driving one game.

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use blockfall_core::{tick_period, Event, GameState, SpeedConfig};
use blockfall_types::GameAction;

use crate::config::SessionConfig;

/// Timer for `level`; the first tick fires one full period from now.
fn ticker_for_level(level: u32, speed: &SpeedConfig) -> Interval {
    let period = tick_period(level, speed);
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Run a game until the input channel closes.
///
/// `states` receives every new state. Returns the final state.
pub async fn run_session(
    initial: GameState,
    speed: SpeedConfig,
    mut inputs: mpsc::Receiver<GameAction>,
    states: watch::Sender<GameState>,
) -> GameState {
    let mut state = initial;
    let mut ticker = ticker_for_level(state.level(), &speed);

    loop {
        let event = tokio::select! {
            _ = ticker.tick() => Event::Tick,
            action = inputs.recv() => match action {
                Some(action) => Event::Action(action),
                None => break,
            },
        };

        let next = state.step(event);
        if next.level() != state.level() {
            let period = tick_period(next.level(), &speed);
            info!(
                "level {} -> {}: tick period {}ms",
                state.level(),
                next.level(),
                period.as_millis()
            );
            ticker = ticker_for_level(next.level(), &speed);
        }
        if next != state {
            state = next;
            states.send_replace(state.clone());
        }
    }

    debug!("input closed, session ends with score {}", state.score());
    state
}

/// Handle to a running session task.
pub struct SessionHandle {
    actions: mpsc::Sender<GameAction>,
    states: watch::Receiver<GameState>,
    task: JoinHandle<GameState>,
}

/// Start a new game on the current tokio runtime.
pub fn spawn_session(config: &SessionConfig) -> SessionHandle {
    spawn_session_with_state(config, GameState::new(config.seed))
}

/// Start a session from an existing state.
pub fn spawn_session_with_state(config: &SessionConfig, initial: GameState) -> SessionHandle {
    let (action_tx, action_rx) = mpsc::channel(config.input_buffer.max(1));
    let (state_tx, state_rx) = watch::channel(initial.clone());
    let task = tokio::spawn(run_session(initial, config.speed, action_rx, state_tx));

    SessionHandle {
        actions: action_tx,
        states: state_rx,
        task,
    }
}

impl SessionHandle {
    /// Queue an action for the session.
    pub async fn send(&self, action: GameAction) -> Result<()> {
        self.actions
            .send(action)
            .await
            .map_err(|_| anyhow!("session closed"))
    }

    /// Sender for feeding actions from another task or thread.
    pub fn sender(&self) -> mpsc::Sender<GameAction> {
        self.actions.clone()
    }

    /// Receiver that is notified on every published state.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.states.clone()
    }

    /// Latest published state.
    pub fn state(&self) -> GameState {
        self.states.borrow().clone()
    }

    /// Close this handle's input and wait for the final state.
    ///
    /// The session keeps running while senders from [`SessionHandle::sender`]
    /// are alive.
    pub async fn finish(self) -> Result<GameState> {
        drop(self.actions);
        self.task.await.context("session task failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use blockfall_core::{spawn_piece, Board, Piece};
    use blockfall_types::{Cell, Color, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

    fn config() -> SessionConfig {
        SessionConfig {
            seed: 47583,
            ..SessionConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_follow_level_period() {
        let handle = spawn_session(&config());
        let start = *handle.state().active();

        // level 1: 900ms period
        tokio::time::sleep(Duration::from_millis(3 * 900 + 450)).await;
        assert_eq!(*handle.state().active(), start.translate(0, 3));

        handle.finish().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_applied_once() {
        let handle = spawn_session(&config());
        let mut rx = handle.subscribe();
        let start = *handle.state().active();

        handle.send(GameAction::MoveLeft).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow().active(), start.translate(-1, 0));

        let last = handle.finish().await.unwrap();
        assert_eq!(*last.active(), start.translate(-1, 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_restarts_when_level_changes() {
        // Rows 16..19 full except column 0; a vertical I in column 0 clears all four.
        let mut board = Board::new();
        for row in (BOARD_HEIGHT as i8 - 4)..BOARD_HEIGHT as i8 {
            for col in 1..BOARD_WIDTH as i8 {
                board.set(Cell::new(col, row), Some(Color::Green));
            }
        }
        let active = Piece::from_cells(
            ShapeKind::I,
            [
                Cell::new(0, 16),
                Cell::new(0, 17),
                Cell::new(0, 18),
                Cell::new(0, 19),
            ],
        );
        let seed = 99;
        let (spawned, _) = spawn_piece(seed);
        let handle = spawn_session_with_state(&config(), GameState::from_layout(board, active, seed));

        // Lock at 900ms: 4 rows -> score 4 -> level 3 -> 700ms period.
        tokio::time::sleep(Duration::from_millis(950)).await;
        let state = handle.state();
        assert_eq!(state.level(), 3);
        assert_eq!(*state.active(), spawned);

        // The next tick comes at 900 + 700, not 900 + 900.
        tokio::time::sleep(Duration::from_millis(700)).await;
        assert_eq!(*handle.state().active(), spawned.translate(0, 1));

        handle.finish().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_ends_when_all_senders_dropped() {
        let handle = spawn_session(&config());
        let start = *handle.state().active();
        let sender = handle.sender();

        sender.send(GameAction::MoveRight).await.unwrap();
        drop(sender);

        let last = handle.finish().await.unwrap();
        assert_eq!(*last.active(), start.translate(1, 0));
    }
}
