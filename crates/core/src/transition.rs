//! Transition engine: the next score after a point.
//!
//! [`apply_point`] is total and pure. Each phase of the game has its own helper
//! so the per-phase rules read in isolation.

use crate::score::{points_of, Model, ScoreState};
use crate::types::{Player, PointLevel};

/// Apply one "point won by `winner`" event and return the resulting model.
///
/// Any point after [`ScoreState::Game`] restarts the game: the result is
/// [`Model::initial`], so `last_point_won_by` is cleared as well.
///
/// # Examples
///
/// ```
/// use tui_tennis_core::{apply_point, Model, ScoreState};
/// use tui_tennis_types::{Player, PointLevel};
///
/// let model = apply_point(Player::PlayerTwo, Model::initial());
/// assert_eq!(
///     model.score,
///     ScoreState::Points { player1: PointLevel::Love, player2: PointLevel::Fifteen }
/// );
/// assert_eq!(model.last_point_won_by, Some(Player::PlayerTwo));
/// ```
pub fn apply_point(winner: Player, model: Model) -> Model {
    let score = match model.score {
        ScoreState::Points { player1, player2 } => points(winner, player1, player2),
        ScoreState::Forty {
            leader,
            other_points,
        } => forty(winner, leader, other_points),
        ScoreState::Deuce => ScoreState::Advantage { leader: winner },
        ScoreState::Advantage { leader } => advantage(winner, leader),
        ScoreState::Game { .. } => return Model::initial(),
    };

    Model {
        score,
        last_point_won_by: Some(winner),
    }
}

fn points(winner: Player, player1: PointLevel, player2: PointLevel) -> ScoreState {
    let won = points_of(winner, player1, player2);
    match (won.next(), winner) {
        (Some(next), Player::PlayerOne) => ScoreState::Points {
            player1: next,
            player2,
        },
        (Some(next), Player::PlayerTwo) => ScoreState::Points {
            player1,
            player2: next,
        },
        (None, _) => ScoreState::Forty {
            leader: winner,
            other_points: points_of(winner.other(), player1, player2),
        },
    }
}

fn forty(winner: Player, leader: Player, other_points: PointLevel) -> ScoreState {
    if winner == leader {
        return ScoreState::Game { winner };
    }
    match other_points.next() {
        Some(next) => ScoreState::Forty {
            leader,
            other_points: next,
        },
        None => ScoreState::Deuce,
    }
}

fn advantage(winner: Player, leader: Player) -> ScoreState {
    if winner == leader {
        ScoreState::Game { winner }
    } else {
        ScoreState::Deuce
    }
}
