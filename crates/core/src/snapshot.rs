use serde::{Serialize, Serializer};

use crate::display::scoreboard;
use crate::session::Session;
use crate::types::{DisplayToken, Player};

/// Everything a view needs to draw the scoreboard, detached from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScoreboardSnapshot {
    #[serde(serialize_with = "token_str")]
    pub player_one: DisplayToken,
    #[serde(serialize_with = "token_str")]
    pub player_two: DisplayToken,
    #[serde(serialize_with = "player_str")]
    pub last_point_won_by: Option<Player>,
    #[serde(serialize_with = "player_str")]
    pub winner: Option<Player>,
    pub game_id: u32,
    pub points_played: u32,
    pub games_completed: u32,
}

impl ScoreboardSnapshot {
    pub(crate) fn fill_from(&mut self, session: &Session) {
        let model = session.model();
        let (one, two) = scoreboard(model);
        self.player_one = one;
        self.player_two = two;
        self.last_point_won_by = model.last_point_won_by;
        self.winner = model.score.winner();
        self.game_id = session.game_id();
        self.points_played = session.points_played();
        self.games_completed = session.games_completed();
    }

    /// Token for one player.
    pub fn token(&self, player: Player) -> DisplayToken {
        match player {
            Player::PlayerOne => self.player_one,
            Player::PlayerTwo => self.player_two,
        }
    }
}

impl Default for ScoreboardSnapshot {
    fn default() -> Self {
        Self {
            player_one: DisplayToken::Love,
            player_two: DisplayToken::Love,
            last_point_won_by: None,
            winner: None,
            game_id: 0,
            points_played: 0,
            games_completed: 0,
        }
    }
}

fn token_str<S: Serializer>(token: &DisplayToken, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(token.as_str())
}

fn player_str<S: Serializer>(player: &Option<Player>, s: S) -> Result<S::Ok, S::Error> {
    match player {
        Some(p) => s.serialize_str(p.as_str()),
        None => s.serialize_none(),
    }
}
