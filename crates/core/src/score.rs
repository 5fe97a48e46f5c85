//! Score representation for a single game.
//!
//! A score is always exactly one [`ScoreState`] variant. Each variant carries only
//! the fields that are meaningful in that phase of the game, so states such as
//! "40 with the opponent also at 40" cannot be written down; that situation is
//! [`ScoreState::Deuce`].

use crate::types::{Player, PointLevel};

/// Score of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreState {
    /// Both players under 40.
    Points {
        player1: PointLevel,
        player2: PointLevel,
    },
    /// `leader` has 40, the other player has `other_points`.
    Forty {
        leader: Player,
        other_points: PointLevel,
    },
    /// Tied at 40 or beyond.
    Deuce,
    /// `leader` is one point from the game after deuce.
    Advantage { leader: Player },
    /// Game decided.
    Game { winner: Player },
}

impl ScoreState {
    /// Love-all.
    pub const INITIAL: ScoreState = ScoreState::Points {
        player1: PointLevel::Love,
        player2: PointLevel::Love,
    };

    pub fn is_game(&self) -> bool {
        matches!(self, ScoreState::Game { .. })
    }

    /// The game winner, once there is one.
    pub fn winner(&self) -> Option<Player> {
        match *self {
            ScoreState::Game { winner } => Some(winner),
            ScoreState::Points { .. }
            | ScoreState::Forty { .. }
            | ScoreState::Deuce
            | ScoreState::Advantage { .. } => None,
        }
    }
}

/// Point level of `player` given both counters of a [`ScoreState::Points`] score.
pub(crate) fn points_of(player: Player, player1: PointLevel, player2: PointLevel) -> PointLevel {
    match player {
        Player::PlayerOne => player1,
        Player::PlayerTwo => player2,
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Score plus who won the most recent point.
///
/// `last_point_won_by` is informational (e.g. for highlighting on a scoreboard);
/// the transition rules never read it. It is `None` only in the initial model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Model {
    pub score: ScoreState,
    pub last_point_won_by: Option<Player>,
}

impl Model {
    /// Love-all, no point played yet.
    pub const fn initial() -> Self {
        Self {
            score: ScoreState::INITIAL,
            last_point_won_by: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_model_is_love_all() {
        let model = Model::initial();
        assert_eq!(
            model.score,
            ScoreState::Points {
                player1: PointLevel::Love,
                player2: PointLevel::Love
            }
        );
        assert_eq!(model.last_point_won_by, None);
        assert_eq!(model, Model::default());
    }

    #[test]
    fn points_of_picks_the_players_counter() {
        let (one, two) = (PointLevel::Thirty, PointLevel::Love);
        assert_eq!(points_of(Player::PlayerOne, one, two), PointLevel::Thirty);
        assert_eq!(points_of(Player::PlayerTwo, one, two), PointLevel::Love);
    }

    #[test]
    fn winner_only_in_game() {
        assert_eq!(ScoreState::INITIAL.winner(), None);
        assert_eq!(ScoreState::Deuce.winner(), None);
        assert_eq!(
            ScoreState::Advantage {
                leader: Player::PlayerOne
            }
            .winner(),
            None
        );
        let done = ScoreState::Game {
            winner: Player::PlayerTwo,
        };
        assert!(done.is_game());
        assert_eq!(done.winner(), Some(Player::PlayerTwo));
    }
}
