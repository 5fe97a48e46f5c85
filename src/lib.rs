//! TUI Tennis (workspace facade crate).
//!
//! Re-exports the workspace crates under short names (`tui_tennis::{core, input, term, types}`)
//! and hosts the application layer shared by the binary and the integration tests:
//! configuration, logging setup, and replay files.

pub mod config;
pub mod logging;
pub mod replay;

pub use tui_tennis_core as core;
pub use tui_tennis_input as input;
pub use tui_tennis_term as term;
pub use tui_tennis_types as types;
