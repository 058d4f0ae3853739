//! Property-based tests for the session engine.
//!
//! Random move sequences (legal and illegal coordinates mixed) are driven
//! through a session and the observable guarantees are checked after every
//! call.

use proptest::prelude::*;
use tictactoe_engine::invariants::{InvariantSet, SessionInvariants};
use tictactoe_engine::{Mark, MoveError, Session, rules};

/// Coordinates biased toward the board but including off-board values.
fn arb_coordinate() -> impl Strategy<Value = i64> {
    prop_oneof![
        8 => 0i64..3,
        1 => -3i64..0,
        1 => 3i64..6,
    ]
}

fn arb_moves() -> impl Strategy<Value = Vec<(i64, i64)>> {
    proptest::collection::vec((arb_coordinate(), arb_coordinate()), 0..20)
}

proptest! {
    /// After N accepted moves in a running game, X is to move iff N is even.
    #[test]
    fn prop_turn_parity(moves in arb_moves()) {
        let mut session = Session::new();
        let mut accepted = 0usize;
        for (row, col) in moves {
            if session.apply_move(row, col).is_ok() {
                accepted += 1;
            }
            if !session.status().is_terminal() {
                let expected = if accepted % 2 == 0 { Mark::X } else { Mark::O };
                prop_assert_eq!(session.current_player(), expected);
            }
        }
        prop_assert_eq!(session.history().len(), accepted);
    }

    /// Rejected moves never mutate the session.
    #[test]
    fn prop_rejection_is_pure(moves in arb_moves()) {
        let mut session = Session::new();
        for (row, col) in moves {
            let before = session.clone();
            match session.apply_move(row, col) {
                Ok(_) => prop_assert_ne!(&session, &before),
                Err(err) => {
                    prop_assert_eq!(&session, &before);
                    let off_board = !(0..3).contains(&row) || !(0..3).contains(&col);
                    if off_board {
                        prop_assert_eq!(err, MoveError::OutOfRange { row, col });
                    } else if before.status().is_terminal() {
                        prop_assert_eq!(err, MoveError::GameOver);
                    } else {
                        prop_assert!(matches!(err, MoveError::CellOccupied(_)));
                    }
                }
            }
        }
    }

    /// All session invariants hold after every call, and winner/draw agree
    /// with the board.
    #[test]
    fn prop_invariants_hold(moves in arb_moves()) {
        let mut session = Session::new();
        for (row, col) in moves {
            let _ = session.apply_move(row, col);
            prop_assert!(SessionInvariants::check_all(&session).is_ok());

            let state = session.get_state();
            prop_assert!(!(state.winner.is_some() && state.draw));
            prop_assert_eq!(state.winner, rules::check_winner(session.board()));
            prop_assert_eq!(state.draw, rules::is_draw(session.board()));
        }
    }

    /// Reset always returns to the initial state.
    #[test]
    fn prop_reset_restores_initial_state(moves in arb_moves()) {
        let mut session = Session::new();
        for (row, col) in moves {
            let _ = session.apply_move(row, col);
        }
        prop_assert_eq!(session.reset(), Session::new().get_state());
        prop_assert_eq!(session, Session::new());
    }
}
