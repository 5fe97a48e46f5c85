//! Formatter: per-player score tokens.

use crate::score::{points_of, Model, ScoreState};
use crate::types::{DisplayToken, Player, PointLevel};

/// Token for a point level under 40.
pub fn point_token(level: PointLevel) -> DisplayToken {
    match level {
        PointLevel::Love => DisplayToken::Love,
        PointLevel::Fifteen => DisplayToken::Fifteen,
        PointLevel::Thirty => DisplayToken::Thirty,
    }
}

/// What `player` should see as their score.
///
/// # Examples
///
/// ```
/// use tui_tennis_core::{display, Model, ScoreState};
/// use tui_tennis_types::{DisplayToken, Player, PointLevel};
///
/// let model = Model {
///     score: ScoreState::Forty { leader: Player::PlayerOne, other_points: PointLevel::Fifteen },
///     last_point_won_by: Some(Player::PlayerTwo),
/// };
/// assert_eq!(display(Player::PlayerOne, &model), DisplayToken::Forty);
/// assert_eq!(display(Player::PlayerTwo, &model).as_str(), "15");
/// ```
pub fn display(player: Player, model: &Model) -> DisplayToken {
    match model.score {
        ScoreState::Points { player1, player2 } => {
            point_token(points_of(player, player1, player2))
        }
        ScoreState::Forty {
            leader,
            other_points,
        } => {
            if player == leader {
                DisplayToken::Forty
            } else {
                point_token(other_points)
            }
        }
        ScoreState::Deuce => DisplayToken::Deuce,
        ScoreState::Advantage { leader } => {
            if player == leader {
                DisplayToken::Advantage
            } else {
                DisplayToken::Placeholder
            }
        }
        ScoreState::Game { winner } => {
            if player == winner {
                DisplayToken::Winner
            } else {
                DisplayToken::Loser
            }
        }
    }
}

/// Both tokens, player one first.
pub fn scoreboard(model: &Model) -> (DisplayToken, DisplayToken) {
    (
        display(Player::PlayerOne, model),
        display(Player::PlayerTwo, model),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(score: ScoreState) -> Model {
        Model {
            score,
            last_point_won_by: None,
        }
    }

    #[test]
    fn test_points_tokens() {
        let m = model(ScoreState::Points {
            player1: PointLevel::Thirty,
            player2: PointLevel::Love,
        });
        assert_eq!(scoreboard(&m), (DisplayToken::Thirty, DisplayToken::Love));
        assert_eq!(scoreboard(&Model::initial()).0.as_str(), "0");
    }

    #[test]
    fn test_forty_tokens() {
        let m = model(ScoreState::Forty {
            leader: Player::PlayerTwo,
            other_points: PointLevel::Thirty,
        });
        assert_eq!(scoreboard(&m), (DisplayToken::Thirty, DisplayToken::Forty));
    }

    #[test]
    fn test_deuce_tokens() {
        let m = model(ScoreState::Deuce);
        assert_eq!(scoreboard(&m), (DisplayToken::Deuce, DisplayToken::Deuce));
    }

    #[test]
    fn test_advantage_tokens() {
        let m = model(ScoreState::Advantage {
            leader: Player::PlayerOne,
        });
        let (one, two) = scoreboard(&m);
        assert_eq!(one.as_str(), "Advantage");
        assert_eq!(two.as_str(), "_");
    }

    #[test]
    fn test_game_tokens() {
        let m = model(ScoreState::Game {
            winner: Player::PlayerTwo,
        });
        assert_eq!(scoreboard(&m), (DisplayToken::Loser, DisplayToken::Winner));
    }
}
