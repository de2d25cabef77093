use go_rules::{Command, Stone};

use crate::common::{from_layout, play_all, standard};

#[test]
fn removes_entire_group_at_once() {
    let mut session = from_layout(
        "XOOOX
         XOOX.
         .X...
         .....
         .....",
        Stone::Black,
    );
    // Five white stones in one group, last liberty at (2,2).
    let outcome = session.attempt_move(2, 2).unwrap();

    let mut captured = outcome.captured;
    captured.sort();
    assert_eq!(captured, vec![(0, 1), (0, 2), (0, 3), (1, 1), (1, 2)]);
    assert_eq!(session.board().stone_count(Stone::White), 0);
    assert_eq!(session.prisoners().black, 5);
}

#[test]
fn captures_two_groups_with_one_stone() {
    let mut session = from_layout(
        "OX.XO
         .O.O.
         .....
         .....
         .....",
        Stone::White,
    );
    let outcome = session.attempt_move(0, 2).unwrap();

    assert_eq!(outcome.captured.len(), 2);
    assert_eq!(session.prisoners().white, 2);
    assert_eq!(session.board().stone_count(Stone::Black), 0);
}

#[test]
fn prisoners_accumulate_for_both_colors() {
    let mut session = standard();
    // Black captures at the top-left corner.
    play_all(&mut session, &[(0, 1), (0, 0), (1, 0)]);
    assert_eq!(session.prisoners().black, 1);

    // White captures at the bottom-right corner.
    play_all(&mut session, &[(18, 17), (18, 18), (17, 18)]);
    assert_eq!(session.prisoners().white, 1);
    assert_eq!(session.prisoners().black, 1);
    assert_eq!(session.board().stone_at((18, 18)), None);
}

#[test]
fn recapture_is_allowed_without_ko_rule() {
    let mut session = from_layout(
        ".XO.
         X.XO
         .XO.
         ....",
        Stone::White,
    );
    // White fills (1,1) and takes the black stone at (1,2).
    let outcome = session.apply(Command::Place((1, 1))).unwrap();
    assert_eq!(outcome.captured, vec![(1, 2)]);

    // Black retakes immediately.
    let outcome = session.apply(Command::Place((1, 2))).unwrap();
    assert_eq!(outcome.captured, vec![(1, 1)]);
}
