use go_rules::{Cell, GoError, Stage, Stone};

use crate::common::{from_layout, standard};

/// Scenario 1: First move on an empty board.
#[test]
fn black_opens_in_corner() {
    let mut session = standard();
    let outcome = session.attempt_move(0, 0).unwrap();

    assert_eq!(outcome.state.board().get((0, 0)), Ok(Cell::Black));
    assert_eq!(outcome.state.to_move(), Stone::White);
    assert!(!outcome.state.is_game_over());
    assert!(outcome.captured.is_empty());
}

/// Scenario 2: Black fills the last liberty of a lone white stone.
#[test]
fn black_captures_lone_white_stone() {
    let mut session = from_layout(
        ".X...
         XO...
         .X...
         .....
         .....",
        Stone::Black,
    );
    let outcome = session.attempt_move(1, 2).unwrap();

    assert_eq!(outcome.captured, vec![(1, 1)]);
    assert_eq!(outcome.state.prisoners().black, 1);
    assert_eq!(outcome.state.board().get((1, 1)), Ok(Cell::Empty));
    assert_eq!(session.state().last_captured(), &[(1, 1)]);
}

/// Scenario 3: A point surrounded by living white groups is suicide for Black.
#[test]
fn black_cannot_play_into_living_white_surround() {
    let mut session = from_layout(
        ".O...
         O.O..
         .O...
         .....
         .....",
        Stone::Black,
    );
    let before = session.snapshot();

    assert_eq!(session.attempt_move(1, 1).map(|_| ()), Err(GoError::Suicide));
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.stage(), Stage::BlackToMove);
}

/// Scenario 4: Black passes, White passes.
#[test]
fn consecutive_passes_end_game() {
    let mut session = standard();
    session.pass().unwrap();
    session.pass().unwrap();

    assert!(session.state().is_game_over());
    assert_eq!(session.stage(), Stage::GameOver);
}

/// Scenario 5: Black passes, White places.
#[test]
fn placement_after_pass_resets_counters() {
    let mut session = standard();
    session.pass().unwrap();
    assert_eq!(session.state().passes().black, 1);

    session.attempt_move(3, 3).unwrap();
    assert_eq!(session.state().passes().black, 0);
    assert_eq!(session.state().passes().white, 0);
    assert!(!session.is_game_over());
    assert_eq!(session.to_move(), Stone::Black);
}
