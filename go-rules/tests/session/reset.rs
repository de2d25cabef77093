use go_rules::{Board, GameSession, SessionConfig, Stage, Stone};

use crate::common::{from_layout, play_all, standard};

#[test]
fn reset_mid_game_restores_initial_state() {
    let mut session = standard();
    let initial = session.snapshot();
    play_all(&mut session, &[(0, 1), (0, 0), (1, 0), (5, 5)]);
    session.pass().unwrap();

    session.reset();
    assert_eq!(session.snapshot(), initial);
    assert!(session.history().is_empty());
}

#[test]
fn reset_keeps_board_size() {
    let mut session = GameSession::new(SessionConfig::new(9).unwrap()).unwrap();
    play_all(&mut session, &[(4, 4)]);
    session.reset();

    assert_eq!(session.size(), 9);
    assert_eq!(session.board(), &Board::new(9));
}

#[test]
fn reset_from_arranged_position_empties_board() {
    let mut session = from_layout(
        "XO.
         ...
         ...",
        Stone::White,
    );
    session.reset();

    assert!(session.board().is_empty());
    assert_eq!(session.stage(), Stage::BlackToMove);
}
