//! Core scoring module - pure, deterministic, and testable
//!
//! This module contains the tennis game score engine and the small session layer
//! hosts use to drive it. The engine has **zero dependencies** on UI or I/O:
//!
//! - **Pure**: [`apply_point`] and [`display`] take values and return values
//! - **Total**: every (player, score) pair has a defined result, nothing fails
//! - **Exhaustive**: every match over [`ScoreState`] names all five variants,
//!   so a new variant is a compile error rather than a silent fallthrough
//!
//! # Module Structure
//!
//! - [`score`]: score representation ([`ScoreState`], [`Model`])
//! - [`transition`]: next score after a point is won
//! - [`display`]: per-player score tokens ("15", "Deuce", "Winner", ...)
//! - [`rng`]: seeded point generator for hosts that pick winners at random
//! - [`session`]: host-side wrapper that applies [`GameAction`](types::GameAction)s
//! - [`snapshot`]: render-ready view of a session
//!
//! # Game Rules
//!
//! - Points climb `0 → 15 → 30 → 40`
//! - Winning a point at 40 wins the game, unless the opponent is also at 40
//! - Both at 40 is deuce; the next point winner gets advantage
//! - Advantage plus one more point wins; losing it returns to deuce
//! - Any point after the game is decided starts a fresh game at love-all
//!
//! # Example
//!
//! ```
//! use tui_tennis_core::{apply_point, display, Model, ScoreState};
//! use tui_tennis_types::{DisplayToken, Player};
//!
//! let mut model = Model::initial();
//! for _ in 0..4 {
//!     model = apply_point(Player::PlayerOne, model);
//! }
//!
//! assert_eq!(model.score, ScoreState::Game { winner: Player::PlayerOne });
//! assert_eq!(display(Player::PlayerOne, &model), DisplayToken::Winner);
//! assert_eq!(display(Player::PlayerTwo, &model), DisplayToken::Loser);
//! ```

pub mod display;
pub mod rng;
pub mod score;
pub mod session;
pub mod snapshot;
pub mod transition;

pub use tui_tennis_types as types;

// Re-export commonly used types for convenience
pub use display::{display, point_token, scoreboard};
pub use rng::{PointPicker, SimpleRng};
pub use score::{Model, ScoreState};
pub use session::Session;
pub use snapshot::ScoreboardSnapshot;
pub use transition::apply_point;
