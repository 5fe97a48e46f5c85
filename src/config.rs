//! Application configuration.
//!
//! Environment variables provide defaults; command-line arguments override them.
//!
//! - `TENNIS_SEED`: point generator seed (default: derived from the clock)
//! - `TENNIS_AUTOPLAY_MS`: play a random point every N ms (default: 0, off)
//! - `TENNIS_LOG_PATH`: append logs to this file (default: no logs while the UI runs)
//!
//! ```text
//! tui-tennis [--seed N] [--autoplay-ms N]
//! tui-tennis replay <FILE> [--json] [--seed N]
//! ```

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::logging::LogTarget;
use crate::types::DEFAULT_AUTOPLAY_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub autoplay_ms: u64,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            autoplay_ms: DEFAULT_AUTOPLAY_MS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from process environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup. Unparseable values fall back
    /// to the defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = var("TENNIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let autoplay_ms = var("TENNIS_AUTOPLAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.autoplay_ms);

        let log_path = var("TENNIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            seed,
            autoplay_ms,
            log_path,
        }
    }

    /// The interactive UI owns the terminal, so logs only go to a file.
    pub fn log_target(&self) -> LogTarget {
        match &self.log_path {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Off,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    pub path: PathBuf,
    pub json: bool,
    pub seed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(AppConfig),
    Replay(ReplayConfig),
}

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String], base: AppConfig) -> Result<Command> {
    match args.first().map(String::as_str) {
        Some("replay") => parse_replay_args(&args[1..], base).map(Command::Replay),
        _ => parse_play_args(args, base).map(Command::Play),
    }
}

fn parse_play_args(args: &[String], mut config: AppConfig) -> Result<AppConfig> {
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                config.seed = parse_value(args.get(i), "--seed", "play")?;
            }
            "--autoplay-ms" => {
                i += 1;
                config.autoplay_ms = parse_value(args.get(i), "--autoplay-ms", "play")?;
            }
            other => return Err(anyhow!("play: unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(config)
}

fn parse_replay_args(args: &[String], base: AppConfig) -> Result<ReplayConfig> {
    let mut path = None;
    let mut json = false;
    let mut seed = base.seed;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json = true,
            "--seed" => {
                i += 1;
                seed = parse_value(args.get(i), "--seed", "replay")?;
            }
            flag if flag.starts_with("--") => {
                return Err(anyhow!("replay: unknown argument: {}", flag));
            }
            file => {
                if path.is_some() {
                    return Err(anyhow!("replay: unexpected extra file: {}", file));
                }
                path = Some(PathBuf::from(file));
            }
        }
        i += 1;
    }

    let path = path.ok_or_else(|| anyhow!("replay: missing replay file"))?;
    Ok(ReplayConfig { path, json, seed })
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str, cmd: &str) -> Result<T> {
    let v = value.ok_or_else(|| anyhow!("{}: missing value for {}", cmd, flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("{}: invalid {} value: {}", cmd, flag, v))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
