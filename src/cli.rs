//! Command-line parsing for the `blockfall` binary.

use anyhow::{anyhow, Result};
use log::warn;

use crate::runtime::SessionConfig;
use crate::types::GameAction;

/// Default number of ticks for `sim`
pub const DEFAULT_SIM_TICKS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimOptions {
    pub seed: u32,
    pub ticks: u32,
    /// Actions applied before each tick, cycling. Empty means gravity only.
    pub script: Vec<GameAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(SessionConfig),
    Sim(SimOptions),
}

/// Parse a comma-separated action list. Unknown names are skipped.
pub fn parse_script(list: &str) -> Vec<GameAction> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| {
            let action = GameAction::from_str(name);
            if action.is_none() {
                warn!("ignoring unknown action {:?}", name);
            }
            action
        })
        .collect()
}

/// Parse arguments (without the program name) on top of `config`.
///
/// `blockfall [play] [--seed N]` or
/// `blockfall sim [--seed N] [--ticks N] [--actions a,b,..]`.
pub fn parse_args(args: &[String], config: SessionConfig) -> Result<Command> {
    let (sim, rest) = match args.first().map(String::as_str) {
        Some("sim") => (true, &args[1..]),
        Some("play") => (false, &args[1..]),
        _ => (false, args),
    };

    let mut config = config;
    let mut ticks = DEFAULT_SIM_TICKS;
    let mut script = Vec::new();

    let mut i = 0usize;
    while i < rest.len() {
        let flag = rest[i].as_str();
        let value = || {
            rest.get(i + 1)
                .ok_or_else(|| anyhow!("missing value for {}", flag))
        };
        match flag {
            "--seed" => {
                let v = value()?;
                config.seed = v
                    .parse()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--ticks" if sim => {
                let v = value()?;
                ticks = v
                    .parse()
                    .map_err(|_| anyhow!("invalid --ticks value: {}", v))?;
            }
            "--actions" if sim => {
                script = parse_script(value()?);
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 2;
    }

    if sim {
        Ok(Command::Sim(SimOptions {
            seed: config.seed,
            ticks,
            script,
        }))
    } else {
        Ok(Command::Play(config))
    }
}
