use go_rules::{Command, GoError, Stage, Stone};

use crate::common::{play_all, standard};

#[test]
fn pass_leaves_board_alone() {
    let mut session = standard();
    play_all(&mut session, &[(3, 3)]);
    let board = session.board().clone();

    assert_eq!(session.pass(), Ok(Stage::BlackToMove));
    assert_eq!(session.board(), &board);
    assert_eq!(session.state().passes().white, 1);
}

#[test]
fn pass_clears_last_captured() {
    let mut session = standard();
    play_all(&mut session, &[(0, 1), (0, 0), (1, 0)]);
    assert_eq!(session.state().last_captured(), &[(0, 0)]);

    let outcome = session.apply(Command::Pass).unwrap();
    assert!(outcome.captured.is_empty());
    assert!(outcome.state.last_captured().is_empty());
}

#[test]
fn streak_needs_both_colors_without_placement() {
    let mut session = standard();
    session.pass().unwrap();
    play_all(&mut session, &[(4, 4)]);
    session.pass().unwrap();
    assert!(!session.is_game_over());

    // White answers Black's pass.
    assert_eq!(session.to_move(), Stone::White);
    assert_eq!(session.pass(), Ok(Stage::GameOver));
}

#[test]
fn game_over_rejects_everything_but_reset() {
    let mut session = standard();
    play_all(&mut session, &[(3, 3), (15, 15)]);
    session.pass().unwrap();
    session.pass().unwrap();
    let before = session.snapshot();

    assert_eq!(session.attempt_move(9, 9).map(|_| ()), Err(GoError::GameOver));
    assert_eq!(session.pass(), Err(GoError::GameOver));
    assert_eq!(session.apply(Command::Place((0, 0))).map(|_| ()), Err(GoError::GameOver));
    assert_eq!(session.snapshot(), before);

    let outcome = session.apply(Command::Reset).unwrap();
    assert_eq!(outcome.state.stage(), Stage::BlackToMove);
}

#[test]
fn game_over_state_is_reported() {
    let mut session = standard();
    session.pass().unwrap();
    session.pass().unwrap();

    let json = serde_json::to_value(session.state()).unwrap();
    assert_eq!(json["game_over"], true);
    assert_eq!(json["passes"]["black"], 1);
    assert_eq!(json["passes"]["white"], 1);
}
