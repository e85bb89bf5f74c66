//! Blockfall runner (default binary).
//!
//! `blockfall [play]` reads the keyboard through crossterm and feeds a timed
//! session; a one-line status is printed whenever score, level or the game-over
//! flag change. Drawing the board is left to real renderers.
//!
//! `blockfall sim` runs a headless, untimed game and prints a JSON report.

use std::io::Write;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use log::info;
use tokio::sync::mpsc;

use blockfall::cli::{parse_args, Command};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::runtime::{spawn_session, SessionConfig};
use blockfall::sim::run_sim;
use blockfall::types::GameAction;

/// Restores cooked mode when dropped.
struct RawMode;

impl RawMode {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args, SessionConfig::from_env())? {
        Command::Play(config) => play(config).await,
        Command::Sim(options) => {
            let (_, report) = run_sim(&options);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

/// Forward mapped key presses until a quit key or a closed session.
fn read_keys(actions: mpsc::Sender<GameAction>) -> Result<()> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }
        if let Some(action) = handle_key_event(key) {
            if actions.blocking_send(action).is_err() {
                return Ok(());
            }
        }
    }
}

async fn play(config: SessionConfig) -> Result<()> {
    info!("starting session with seed {}", config.seed);
    let _raw = RawMode::enter()?;

    let session = spawn_session(&config);
    let mut states = session.subscribe();

    let sender = session.sender();
    let mut reader = tokio::task::spawn_blocking(move || read_keys(sender));

    let mut last_status = None;
    let mut stdout = std::io::stdout();
    let input_result = loop {
        let status = {
            let state = states.borrow_and_update();
            (state.score(), state.high_score(), state.level(), state.game_over())
        };
        if last_status != Some(status) {
            let (score, high_score, level, game_over) = status;
            let tail = if game_over { "  GAME OVER (r restarts, q quits)" } else { "" };
            write!(
                stdout,
                "\r\x1b[2Kscore {}  high {}  level {}{}",
                score, high_score, level, tail
            )?;
            stdout.flush()?;
            last_status = Some(status);
        }

        tokio::select! {
            changed = states.changed() => if changed.is_err() {
                break Ok(());
            },
            joined = &mut reader => {
                break joined.context("input task failed").and_then(|result| result);
            }
        }
    };

    let final_state = session.finish().await?;
    input_result?;

    write!(stdout, "\r\n")?;
    info!(
        "session over: score {} high score {}",
        final_state.score(),
        final_state.high_score()
    );
    Ok(())
}
