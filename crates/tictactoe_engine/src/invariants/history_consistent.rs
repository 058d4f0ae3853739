//! History consistency invariant: replaying the history rebuilds the board.

use super::super::{Board, Cell, Session};
use super::Invariant;

/// Invariant: the board is exactly the marks recorded in history, and no
/// cell was played twice.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let mut replayed = Board::new();
        for action in session.history() {
            let index = action.position.index();
            if !replayed.is_empty(index) {
                return false;
            }
            replayed.set(index, Cell::Occupied(action.mark));
        }
        replayed == *session.board()
    }

    fn description() -> &'static str {
        "Board matches the recorded move history"
    }
}
