//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Every key
//! press is one discrete event; there is no repeat handling because a point is
//! never "held".

pub mod map;

pub use tui_tennis_types as types;

pub use map::{handle_key_event, should_quit};
