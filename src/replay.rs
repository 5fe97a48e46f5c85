//! Replay files: a recorded sequence of points played back without a terminal UI.
//!
//! ```json
//! { "points": ["1", "playerTwo", "p1", "nextPoint", "restart"] }
//! ```
//!
//! Each entry is either a player (anything [`Player::from_str`] accepts, meaning
//! that player won the point) or an action name accepted by
//! [`GameAction::from_str`]. `nextPoint` entries are decided by the seeded point
//! generator, so a replay with the same seed always plays out the same way.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::core::{ScoreboardSnapshot, Session};
use crate::types::{GameAction, Player};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayFile {
    pub points: Vec<String>,
}

/// Parse one replay entry.
pub fn parse_entry(entry: &str) -> Option<GameAction> {
    Player::from_str(entry)
        .map(GameAction::WinPoint)
        .or_else(|| GameAction::from_str(entry.trim()))
}

/// Parse replay JSON into actions; the error names the first bad entry.
pub fn parse_replay(json: &str) -> Result<Vec<GameAction>> {
    let file: ReplayFile = serde_json::from_str(json).context("replay: invalid replay file")?;
    file.points
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            parse_entry(entry).ok_or_else(|| anyhow!("replay: entry {}: unknown point {:?}", i, entry))
        })
        .collect()
}

pub fn load_replay(path: &Path) -> Result<Vec<GameAction>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("replay: cannot read {}", path.display()))?;
    parse_replay(&json)
}

/// Play every action through a fresh session; one snapshot per action.
pub fn run_replay(actions: &[GameAction], seed: u32) -> Vec<ScoreboardSnapshot> {
    let mut session = Session::new(seed);
    actions
        .iter()
        .map(|&action| {
            session.apply_action(action);
            session.snapshot()
        })
        .collect()
}

/// `Player one: 15 | Player two: 0`
pub fn format_line(snap: &ScoreboardSnapshot) -> String {
    format!(
        "{}: {} | {}: {}",
        Player::PlayerOne,
        snap.player_one,
        Player::PlayerTwo,
        snap.player_two
    )
}

pub fn format_json_line(snap: &ScoreboardSnapshot) -> Result<String> {
    serde_json::to_string(snap).context("replay: cannot encode snapshot")
}
