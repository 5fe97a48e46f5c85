//! Score engine properties: transitions and display tokens over every state.

use tui_tennis::core::{apply_point, display, scoreboard, Model, ScoreState};
use tui_tennis::types::{DisplayToken, Player, PointLevel};

use tui_tennis::types::Player::{PlayerOne as P1, PlayerTwo as P2};

/// Every score the engine can represent.
fn all_states() -> Vec<ScoreState> {
    let mut states = Vec::new();
    for player1 in PointLevel::ALL {
        for player2 in PointLevel::ALL {
            states.push(ScoreState::Points { player1, player2 });
        }
    }
    for leader in Player::ALL {
        for other_points in PointLevel::ALL {
            states.push(ScoreState::Forty {
                leader,
                other_points,
            });
        }
        states.push(ScoreState::Advantage { leader });
        states.push(ScoreState::Game { winner: leader });
    }
    states.push(ScoreState::Deuce);
    states
}

fn model(score: ScoreState) -> Model {
    Model {
        score,
        last_point_won_by: Some(P2),
    }
}

fn play(points: &[Player]) -> Model {
    points
        .iter()
        .fold(Model::initial(), |m, &winner| apply_point(winner, m))
}

#[test]
fn every_transition_lands_on_a_known_state() {
    let states = all_states();
    assert_eq!(states.len(), 20);
    for &state in &states {
        for winner in Player::ALL {
            let next = apply_point(winner, model(state));
            assert!(
                states.contains(&next.score),
                "{:?} + {:?} -> {:?}",
                state,
                winner,
                next.score
            );
        }
    }
}

#[test]
fn last_point_won_by_tracks_winner_except_after_game() {
    for state in all_states() {
        for winner in Player::ALL {
            let next = apply_point(winner, model(state));
            if state.is_game() {
                assert_eq!(next, Model::initial());
            } else {
                assert_eq!(next.last_point_won_by, Some(winner));
            }
        }
    }
}

#[test]
fn forty_other_points_never_reaches_forty() {
    // otherPoints is a PointLevel, so it is always below 40 by construction;
    // check the one place it could overflow goes to Deuce instead.
    for leader in Player::ALL {
        let next = apply_point(
            leader.other(),
            model(ScoreState::Forty {
                leader,
                other_points: PointLevel::Thirty,
            }),
        );
        assert_eq!(next.score, ScoreState::Deuce);
    }
}

#[test]
fn straight_game_in_four_points() {
    for winner in Player::ALL {
        let mut m = Model::initial();
        for _ in 0..4 {
            m = apply_point(winner, m);
            assert!(!matches!(
                m.score,
                ScoreState::Deuce | ScoreState::Advantage { .. }
            ));
        }
        assert_eq!(m.score, ScoreState::Game { winner });
    }
}

#[test]
fn deuce_oscillation() {
    let mut m = model(ScoreState::Forty {
        leader: P1,
        other_points: PointLevel::Thirty,
    });

    m = apply_point(P2, m);
    assert_eq!(m.score, ScoreState::Deuce);

    // Trade advantages a few times; never stuck, never skipped.
    for _ in 0..5 {
        m = apply_point(P1, m);
        assert_eq!(m.score, ScoreState::Advantage { leader: P1 });
        m = apply_point(P2, m);
        assert_eq!(m.score, ScoreState::Deuce);
        m = apply_point(P2, m);
        assert_eq!(m.score, ScoreState::Advantage { leader: P2 });
        m = apply_point(P1, m);
        assert_eq!(m.score, ScoreState::Deuce);
    }

    m = apply_point(P2, m);
    m = apply_point(P2, m);
    assert_eq!(m.score, ScoreState::Game { winner: P2 });
}

#[test]
fn non_terminal_states_never_show_winner_or_loser() {
    for state in all_states() {
        let m = model(state);
        let (one, two) = scoreboard(&m);
        match state {
            ScoreState::Game { winner } => {
                assert_eq!(display(winner, &m), DisplayToken::Winner);
                assert_eq!(display(winner.other(), &m), DisplayToken::Loser);
                assert_eq!(
                    [one, two]
                        .iter()
                        .filter(|t| **t == DisplayToken::Winner)
                        .count(),
                    1
                );
            }
            _ => {
                assert!(!one.is_terminal(), "{:?}", state);
                assert!(!two.is_terminal(), "{:?}", state);
            }
        }
    }
}

#[test]
fn game_then_point_resets() {
    let m = play(&[P2, P2, P2, P2]);
    assert_eq!(m.score, ScoreState::Game { winner: P2 });

    let m = apply_point(P1, m);
    assert_eq!(
        m.score,
        ScoreState::Points {
            player1: PointLevel::Love,
            player2: PointLevel::Love
        }
    );
    assert_eq!(m.last_point_won_by, None);
}

#[test]
fn example_trace() {
    let mut m = Model::initial();
    let expected = [
        (
            P1,
            ScoreState::Points {
                player1: PointLevel::Fifteen,
                player2: PointLevel::Love,
            },
        ),
        (
            P1,
            ScoreState::Points {
                player1: PointLevel::Thirty,
                player2: PointLevel::Love,
            },
        ),
        (
            P1,
            ScoreState::Forty {
                leader: P1,
                other_points: PointLevel::Love,
            },
        ),
        (
            P2,
            ScoreState::Forty {
                leader: P1,
                other_points: PointLevel::Fifteen,
            },
        ),
        (P1, ScoreState::Game { winner: P1 }),
    ];

    for (winner, score) in expected {
        m = apply_point(winner, m);
        assert_eq!(m.score, score);
    }

    assert_eq!(display(P1, &m).as_str(), "Winner");
    assert_eq!(display(P2, &m).as_str(), "Loser");
}

#[test]
fn display_strings_follow_a_full_game() {
    let points = [P1, P2, P2, P1, P1, P2, P2, P1, P1, P1];
    let expected = [
        ("15", "0"),
        ("15", "15"),
        ("15", "30"),
        ("30", "30"),
        ("40", "30"),
        ("Deuce", "Deuce"),
        ("_", "Advantage"),
        ("Deuce", "Deuce"),
        ("Advantage", "_"),
        ("Winner", "Loser"),
    ];

    let mut m = Model::initial();
    for (winner, (one, two)) in points.iter().zip(expected) {
        m = apply_point(*winner, m);
        let (a, b) = scoreboard(&m);
        assert_eq!((a.as_str(), b.as_str()), (one, two));
    }
}
