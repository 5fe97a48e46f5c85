//! Session module - host-side driver around the pure score engine
//!
//! A [`Session`] owns the current [`Model`] and the [`PointPicker`] used for
//! `NextPoint`, and turns [`GameAction`]s into calls to [`apply_point`]. It is the
//! only stateful piece of the core crate and the only one that logs.

use tracing::{debug, info};

use crate::rng::PointPicker;
use crate::score::{Model, ScoreState};
use crate::snapshot::ScoreboardSnapshot;
use crate::transition::apply_point;
use crate::types::{GameAction, Player};

/// One scoring session: a sequence of games fed one point at a time.
#[derive(Debug, Clone)]
pub struct Session {
    model: Model,
    picker: PointPicker,
    /// Incremented on every fresh game (restart or post-game reset).
    game_id: u32,
    /// Points played in the current game.
    points_played: u32,
    /// Games that reached [`ScoreState::Game`] in this session.
    games_completed: u32,
}

impl Session {
    /// Create a session at love-all with the given point generator seed
    pub fn new(seed: u32) -> Self {
        Self {
            model: Model::initial(),
            picker: PointPicker::new(seed),
            game_id: 0,
            points_played: 0,
            games_completed: 0,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn score(&self) -> ScoreState {
        self.model.score
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn points_played(&self) -> u32 {
        self.points_played
    }

    pub fn games_completed(&self) -> u32 {
        self.games_completed
    }

    pub fn seed(&self) -> u32 {
        self.picker.seed()
    }

    /// Apply a host action.
    ///
    /// Returns the point winner when the action played a point, `None` for
    /// [`GameAction::Restart`].
    pub fn apply_action(&mut self, action: GameAction) -> Option<Player> {
        match action {
            GameAction::NextPoint => {
                let winner = self.picker.pick();
                self.play_point(winner);
                Some(winner)
            }
            GameAction::WinPoint(winner) => {
                self.play_point(winner);
                Some(winner)
            }
            GameAction::Restart => {
                self.restart();
                None
            }
        }
    }

    /// Feed one point into the score engine.
    pub fn play_point(&mut self, winner: Player) {
        let previous = self.model.score;
        self.model = apply_point(winner, self.model);

        if previous.is_game() {
            self.game_id = self.game_id.wrapping_add(1);
            self.points_played = 0;
            debug!(game_id = self.game_id, "point after game end, new game started");
            return;
        }

        self.points_played = self.points_played.saturating_add(1);
        debug!(
            winner = winner.as_str(),
            ?previous,
            next = ?self.model.score,
            points_played = self.points_played,
            "point played"
        );

        if let Some(game_winner) = self.model.score.winner() {
            self.games_completed = self.games_completed.saturating_add(1);
            info!(
                winner = game_winner.as_str(),
                points = self.points_played,
                games_completed = self.games_completed,
                "game won"
            );
        }
    }

    /// Start a fresh game; the point generator keeps its position.
    pub fn restart(&mut self) {
        self.model = Model::initial();
        self.game_id = self.game_id.wrapping_add(1);
        self.points_played = 0;
        info!(game_id = self.game_id, "game restarted");
    }

    pub fn snapshot_into(&self, out: &mut ScoreboardSnapshot) {
        out.fill_from(self);
    }

    pub fn snapshot(&self) -> ScoreboardSnapshot {
        let mut snap = ScoreboardSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
