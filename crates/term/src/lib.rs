//! Terminal scoreboard module.
//!
//! Renders a [`ScoreboardSnapshot`](crate::core::ScoreboardSnapshot) into a small
//! styled framebuffer and flushes it to the terminal with `crossterm`.
//!
//! - [`fb`]: framebuffer and style types
//! - [`scoreboard_view`]: pure snapshot-to-framebuffer layout (unit-testable)
//! - [`renderer`]: terminal setup/teardown and full or diff redraws

pub mod fb;
pub mod renderer;
pub mod scoreboard_view;

pub use tui_tennis_core as core;
pub use tui_tennis_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scoreboard_view::{ScoreboardView, Viewport, PANEL_HEIGHT, PANEL_WIDTH};
