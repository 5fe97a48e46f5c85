//! Terminal tennis scorer (default binary).
//!
//! Interactive mode draws the scoreboard with a custom framebuffer renderer and
//! feeds one point per key press (or per autoplay interval) into the session.
//! `tui-tennis replay <FILE>` plays a replay file and prints the scoreboard
//! after every point.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_tennis::config::{parse_args, AppConfig, Command, ReplayConfig};
use tui_tennis::core::Session;
use tui_tennis::input::{handle_key_event, should_quit};
use tui_tennis::logging::{self, LogTarget};
use tui_tennis::replay::{format_json_line, format_line, load_replay, run_replay};
use tui_tennis::term::{FrameBuffer, ScoreboardView, TerminalRenderer, Viewport};
use tui_tennis::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args, AppConfig::from_env())? {
        Command::Replay(config) => replay(&config),
        Command::Play(config) => play(&config),
    }
}

fn replay(config: &ReplayConfig) -> Result<()> {
    logging::init(LogTarget::Stderr)?;
    let actions = load_replay(&config.path)?;
    info!(path = %config.path.display(), points = actions.len(), "replaying");

    let mut out = io::stdout().lock();
    for snap in run_replay(&actions, config.seed) {
        let line = if config.json {
            format_json_line(&snap)?
        } else {
            format_line(&snap)
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn play(config: &AppConfig) -> Result<()> {
    logging::init(config.log_target())?;
    info!(seed = config.seed, autoplay_ms = config.autoplay_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut session = Session::new(config.seed);
    let view = ScoreboardView::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let autoplay = (config.autoplay_ms > 0).then(|| Duration::from_millis(config.autoplay_ms));
    let mut last_autoplay = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(
                            games_completed = session.games_completed(),
                            "quit"
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply(&mut session, action);
                        dirty = true;
                    }
                }
                Event::Resize(w, h) => {
                    debug!(w, h, "terminal resized");
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if let Some(interval) = autoplay {
            if last_autoplay.elapsed() >= interval {
                last_autoplay = Instant::now();
                apply(&mut session, GameAction::NextPoint);
                dirty = true;
            }
        }
    }
}

fn apply(session: &mut Session, action: GameAction) {
    debug!(action = action.as_str(), "action");
    session.apply_action(action);
}
