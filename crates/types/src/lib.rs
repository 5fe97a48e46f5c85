//! Core types module - shared vocabulary for the tennis scorer
//!
//! This module defines the fundamental value types used throughout the application.
//! All types are plain `Copy` data with no external dependencies, making them
//! usable in any context (score engine, terminal rendering, replay files).
//!
//! # Point Ladder
//!
//! A player's count below 40 is a [`PointLevel`]:
//!
//! | Level | Display |
//! |-------|---------|
//! | `Love` | `0` |
//! | `Fifteen` | `15` |
//! | `Thirty` | `30` |
//!
//! There is deliberately no `Forty` level. Reaching 40 changes the shape of the
//! whole score (see `tui_tennis_core::ScoreState`), not the value of one field.
//!
//! # Host Timing
//!
//! - `TICK_MS`: 16ms - host loop tick
//! - `DEFAULT_AUTOPLAY_MS`: 0 - autoplay disabled unless configured
//!
//! # Examples
//!
//! ```
//! use tui_tennis_types::{GameAction, Player, PointLevel};
//!
//! let p = Player::from_str("p2").unwrap();
//! assert_eq!(p, Player::PlayerTwo);
//! assert_eq!(p.other(), Player::PlayerOne);
//!
//! assert_eq!(PointLevel::Love.next(), Some(PointLevel::Fifteen));
//! assert_eq!(PointLevel::Thirty.next(), None);
//!
//! let action = GameAction::from_str("winPoint1").unwrap();
//! assert_eq!(action, GameAction::WinPoint(Player::PlayerOne));
//! ```

use std::fmt;

/// Host loop tick in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default autoplay interval in milliseconds (0 = disabled)
pub const DEFAULT_AUTOPLAY_MS: u64 = 0;

/// One of the two players of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// Both players, player one first.
    pub const ALL: [Player; 2] = [Player::PlayerOne, Player::PlayerTwo];

    /// The opponent.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tennis_types::Player;
    ///
    /// assert_eq!(Player::PlayerOne.other(), Player::PlayerTwo);
    /// assert_eq!(Player::PlayerTwo.other(), Player::PlayerOne);
    /// ```
    pub fn other(&self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Parse player from string (case-insensitive)
    ///
    /// Accepts `1`, `one`, `p1`, `player1`, `playerone`, `player_one`, `player-one`
    /// and the equivalents for player two.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tennis_types::Player;
    ///
    /// assert_eq!(Player::from_str("1"), Some(Player::PlayerOne));
    /// assert_eq!(Player::from_str("playerTwo"), Some(Player::PlayerTwo));
    /// assert_eq!(Player::from_str("P2"), Some(Player::PlayerTwo));
    /// assert_eq!(Player::from_str("3"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "1" | "one" | "p1" | "player1" | "playerone" => Some(Player::PlayerOne),
            "2" | "two" | "p2" | "player2" | "playertwo" => Some(Player::PlayerTwo),
            _ => None,
        }
    }

    /// Convert to camelCase string (replay files, JSON output)
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::PlayerOne => "playerOne",
            Player::PlayerTwo => "playerTwo",
        }
    }

    /// Human-readable label used on the scoreboard.
    pub fn label(&self) -> &'static str {
        match self {
            Player::PlayerOne => "Player one",
            Player::PlayerTwo => "Player two",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A player's point count while under 40.
///
/// The ladder is `Love < Fifteen < Thirty`. Winning a point at `Thirty` moves the
/// score out of the two-counter representation altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointLevel {
    Love,
    Fifteen,
    Thirty,
}

impl PointLevel {
    /// All levels in ladder order.
    pub const ALL: [PointLevel; 3] = [PointLevel::Love, PointLevel::Fifteen, PointLevel::Thirty];

    /// One rung up the ladder, or `None` past `Thirty`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tennis_types::PointLevel;
    ///
    /// assert_eq!(PointLevel::Love.next(), Some(PointLevel::Fifteen));
    /// assert_eq!(PointLevel::Fifteen.next(), Some(PointLevel::Thirty));
    /// assert_eq!(PointLevel::Thirty.next(), None);
    /// ```
    pub fn next(&self) -> Option<Self> {
        match self {
            PointLevel::Love => Some(PointLevel::Fifteen),
            PointLevel::Fifteen => Some(PointLevel::Thirty),
            PointLevel::Thirty => None,
        }
    }
}

/// Player-facing score token.
///
/// Every variant renders to exactly one literal via [`DisplayToken::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayToken {
    Love,
    Fifteen,
    Thirty,
    Forty,
    Deuce,
    Advantage,
    /// Trailing player during advantage; no score is shown.
    Placeholder,
    Winner,
    Loser,
}

impl DisplayToken {
    /// The literal shown to players.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tennis_types::DisplayToken;
    ///
    /// assert_eq!(DisplayToken::Love.as_str(), "0");
    /// assert_eq!(DisplayToken::Forty.as_str(), "40");
    /// assert_eq!(DisplayToken::Placeholder.as_str(), "_");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayToken::Love => "0",
            DisplayToken::Fifteen => "15",
            DisplayToken::Thirty => "30",
            DisplayToken::Forty => "40",
            DisplayToken::Deuce => "Deuce",
            DisplayToken::Advantage => "Advantage",
            DisplayToken::Placeholder => "_",
            DisplayToken::Winner => "Winner",
            DisplayToken::Loser => "Loser",
        }
    }

    /// True for the two tokens only shown once a game is decided.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DisplayToken::Winner | DisplayToken::Loser)
    }
}

impl fmt::Display for DisplayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions a host can feed into a scoring session
///
/// Used by both keyboard input and replay files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Let the session's point generator choose who won the point
    NextPoint,
    /// The given player won the point
    WinPoint(Player),
    /// Throw away the current game and start again at love-all
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tennis_types::{GameAction, Player};
    ///
    /// assert_eq!(GameAction::from_str("nextPoint"), Some(GameAction::NextPoint));
    /// assert_eq!(GameAction::from_str("winpoint2"), Some(GameAction::WinPoint(Player::PlayerTwo)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("serve"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nextpoint" => Some(GameAction::NextPoint),
            "winpoint1" => Some(GameAction::WinPoint(Player::PlayerOne)),
            "winpoint2" => Some(GameAction::WinPoint(Player::PlayerTwo)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::NextPoint => "nextPoint",
            GameAction::WinPoint(Player::PlayerOne) => "winPoint1",
            GameAction::WinPoint(Player::PlayerTwo) => "winPoint2",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_ladder_is_ordered() {
        assert!(PointLevel::Love < PointLevel::Fifteen);
        assert!(PointLevel::Fifteen < PointLevel::Thirty);
        for level in PointLevel::ALL {
            if let Some(next) = level.next() {
                assert!(next > level);
            }
        }
    }

    #[test]
    fn player_parse_accepts_separators_and_case() {
        assert_eq!(Player::from_str("Player_One"), Some(Player::PlayerOne));
        assert_eq!(Player::from_str(" player-two "), Some(Player::PlayerTwo));
        assert_eq!(Player::from_str("PLAYER 1"), Some(Player::PlayerOne));
        assert_eq!(Player::from_str(""), None);
        for p in Player::ALL {
            assert_eq!(Player::from_str(p.as_str()), Some(p));
        }
    }

    #[test]
    fn only_winner_and_loser_are_terminal() {
        let terminal: Vec<_> = [
            DisplayToken::Love,
            DisplayToken::Fifteen,
            DisplayToken::Thirty,
            DisplayToken::Forty,
            DisplayToken::Deuce,
            DisplayToken::Advantage,
            DisplayToken::Placeholder,
            DisplayToken::Winner,
            DisplayToken::Loser,
        ]
        .into_iter()
        .filter(DisplayToken::is_terminal)
        .collect();
        assert_eq!(terminal, vec![DisplayToken::Winner, DisplayToken::Loser]);
    }

    #[test]
    fn action_strings_parse_back() {
        for action in [
            GameAction::NextPoint,
            GameAction::WinPoint(Player::PlayerOne),
            GameAction::WinPoint(Player::PlayerTwo),
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
