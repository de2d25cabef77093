use go_rules::{GoError, Stone};

use crate::common::from_layout;

#[test]
fn single_stone_suicide_is_rejected() {
    let mut session = from_layout(
        ".X...
         X....
         .....
         .....
         .....",
        Stone::White,
    );
    let before = session.snapshot();

    assert_eq!(session.attempt_move(0, 0).map(|_| ()), Err(GoError::Suicide));
    assert_eq!(session.snapshot(), before);
    assert!(session.history().is_empty());
}

#[test]
fn filling_own_last_liberty_is_rejected() {
    let mut session = from_layout(
        "O.X..
         XX...
         .....
         .....
         .....",
        Stone::White,
    );
    let before = session.snapshot();

    assert_eq!(session.attempt_move(0, 1).map(|_| ()), Err(GoError::Suicide));
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.board().stone_at((0, 0)), Some(Stone::White));
    assert_eq!(session.to_move(), Stone::White);
}

#[test]
fn rejected_move_can_be_followed_by_legal_one() {
    let mut session = from_layout(
        ".X...
         X....
         .....
         .....
         .....",
        Stone::White,
    );
    assert!(session.attempt_move(0, 0).is_err());
    session.attempt_move(4, 4).unwrap();
    assert_eq!(session.to_move(), Stone::Black);
    assert_eq!(session.prisoners().white, 0);
}

#[test]
fn capturing_move_is_not_suicide() {
    let mut session = from_layout(
        ".OX..
         OX...
         .....
         .....
         .....",
        Stone::Black,
    );
    let outcome = session.attempt_move(0, 0).unwrap();
    assert_eq!(outcome.captured, vec![(0, 1)]);
    assert_eq!(session.board().stone_at((0, 0)), Some(Stone::Black));
}
