//! Status consistency invariant: the stored status agrees with the board.

use super::super::{GameStatus, Session, rules};
use super::Invariant;

/// Invariant: exactly one of {in progress, won, drawn} holds, and it is the
/// one the board shows.
///
/// - `Won(m)` iff some line is three `m`s.
/// - `Draw` iff the board is full with no such line.
/// - `InProgress` otherwise.
pub struct StatusConsistentInvariant;

impl Invariant<Session> for StatusConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let expected = match rules::check_winner(board) {
            Some(mark) => GameStatus::Won(mark),
            None if rules::is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
        session.status() == expected
    }

    fn description() -> &'static str {
        "Status matches the board (winner iff a line, draw iff full without one)"
    }
}
