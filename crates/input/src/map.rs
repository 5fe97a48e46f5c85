//! Key mapping from terminal events to scoring actions.

use crate::types::{GameAction, Player};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to scoring actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char(' ') | KeyCode::Enter => {
            Some(GameAction::NextPoint)
        }

        // Manual scoring
        KeyCode::Char('1') => Some(GameAction::WinPoint(Player::PlayerOne)),
        KeyCode::Char('2') => Some(GameAction::WinPoint(Player::PlayerTwo)),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the scorer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_next_point_keys() {
        for code in [
            KeyCode::Char('n'),
            KeyCode::Char('N'),
            KeyCode::Char(' '),
            KeyCode::Enter,
        ] {
            assert_eq!(
                handle_key_event(KeyEvent::from(code)),
                Some(GameAction::NextPoint)
            );
        }
    }

    #[test]
    fn test_manual_point_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(GameAction::WinPoint(Player::PlayerOne))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('2'))),
            Some(GameAction::WinPoint(Player::PlayerTwo))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('3'))), None);
    }

    #[test]
    fn test_restart_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('n'))));
    }
}
