//! ScoreboardView: maps a `ScoreboardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::ScoreboardSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{DisplayToken, Player};

/// Outer width of the scoreboard panel, border included.
pub const PANEL_WIDTH: u16 = 36;
/// Outer height of the scoreboard panel, border included.
pub const PANEL_HEIGHT: u16 = 10;

const TITLE: &str = "Tennis game";
const BUTTON: &str = "[ Next point ]";
const HELP: &str = "n next  1/2 point  r reset  q quit";

// Row offsets inside the panel.
const ROW_TITLE: u16 = 1;
const ROW_PLAYER_ONE: u16 = 3;
const ROW_PLAYER_TWO: u16 = 4;
const ROW_STATUS: u16 = 6;
const ROW_BUTTON: u16 = 7;
const ROW_HELP: u16 = 8;

/// Column of the player label, relative to the panel's left edge.
const LABEL_COL: u16 = 4;
/// Column of the score token: `"Player one: "` is 12 wide.
const TOKEN_COL: u16 = LABEL_COL + 12;

const BORDER: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200));
const TEXT: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220));
const ACCENT: CellStyle = CellStyle::plain(Rgb::new(240, 220, 80));
const WIN: CellStyle = CellStyle::plain(Rgb::new(100, 220, 120));
const LOSE: CellStyle = CellStyle::plain(Rgb::new(220, 80, 80));

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Centered scoreboard panel with one row per player.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreboardView;

impl ScoreboardView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &ScoreboardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let x0 = viewport.width.saturating_sub(PANEL_WIDTH) / 2;
        let y0 = viewport.height.saturating_sub(PANEL_HEIGHT) / 2;

        draw_border(fb, x0, y0, PANEL_WIDTH, PANEL_HEIGHT);
        let inner_x = x0 + 1;
        let inner_w = PANEL_WIDTH - 2;

        fb.put_str_centered(inner_x, y0 + ROW_TITLE, inner_w, TITLE, TEXT.bold());

        self.draw_player_row(fb, snap, Player::PlayerOne, x0, y0 + ROW_PLAYER_ONE);
        self.draw_player_row(fb, snap, Player::PlayerTwo, x0, y0 + ROW_PLAYER_TWO);

        if let Some(winner) = snap.winner {
            let y = y0 + ROW_STATUS;
            let end = fb.put_str(inner_x + 3, y, "Game won by ", ACCENT.bold());
            fb.put_str(end, y, winner.label(), ACCENT.bold());
        }

        fb.put_str_centered(inner_x, y0 + ROW_BUTTON, inner_w, BUTTON, ACCENT.bold());
        fb.put_str_centered(inner_x, y0 + ROW_HELP, inner_w, HELP, TEXT.dim());

        let footer_y = y0 + PANEL_HEIGHT;
        if footer_y < viewport.height {
            let mut x = fb.put_str(x0 + 1, footer_y, "Points ", TEXT.dim());
            x = fb.put_u32(x, footer_y, snap.points_played, TEXT.dim());
            x = fb.put_str(x, footer_y, "  Games ", TEXT.dim());
            fb.put_u32(x, footer_y, snap.games_completed, TEXT.dim());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &ScoreboardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_player_row(
        &self,
        fb: &mut FrameBuffer,
        snap: &ScoreboardSnapshot,
        player: Player,
        x0: u16,
        y: u16,
    ) {
        let scored_last = snap.last_point_won_by == Some(player);
        if scored_last {
            fb.put_char(x0 + LABEL_COL - 2, y, '●', ACCENT);
        }

        let label = if scored_last { TEXT.bold() } else { TEXT };
        let end = fb.put_str(x0 + LABEL_COL, y, player.label(), label);
        fb.put_char(end, y, ':', label);

        let token = snap.token(player);
        fb.put_str(x0 + TOKEN_COL, y, token.as_str(), token_style(token));
    }
}

fn token_style(token: DisplayToken) -> CellStyle {
    match token {
        DisplayToken::Winner => WIN.bold(),
        DisplayToken::Loser => LOSE,
        DisplayToken::Deuce | DisplayToken::Advantage => ACCENT.bold(),
        DisplayToken::Placeholder => TEXT.dim(),
        DisplayToken::Love
        | DisplayToken::Fifteen
        | DisplayToken::Thirty
        | DisplayToken::Forty => TEXT.bold(),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(right, y, '┐', BORDER);
    fb.put_char(x, bottom, '└', BORDER);
    fb.put_char(right, bottom, '┘', BORDER);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, bottom, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(right, y + dy, '│', BORDER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_fits_inside_border() {
        assert!(HELP.chars().count() as u16 <= PANEL_WIDTH - 2);
        assert!(TOKEN_COL + ("Advantage".len() as u16) < PANEL_WIDTH - 1);
    }

    #[test]
    fn token_styles_highlight_outcome() {
        assert!(token_style(DisplayToken::Winner).bold);
        assert!(token_style(DisplayToken::Placeholder).dim);
        assert_ne!(
            token_style(DisplayToken::Winner).fg,
            token_style(DisplayToken::Loser).fg
        );
    }
}
