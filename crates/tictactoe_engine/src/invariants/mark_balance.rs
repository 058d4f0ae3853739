//! Mark balance invariant: X moves first, so X never trails O and never
//! leads by more than one.

use super::super::{Mark, Session};
use super::Invariant;

/// Invariant: `count(X) == count(O)` or `count(X) == count(O) + 1`.
pub struct MarkBalanceInvariant;

impl Invariant<Session> for MarkBalanceInvariant {
    fn holds(session: &Session) -> bool {
        let x = session.board().count(Mark::X);
        let o = session.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_new_session_holds() {
        assert!(MarkBalanceInvariant::holds(&Session::new()));
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut session = Session::new();
        for (row, col) in [(0, 0), (0, 1), (1, 1), (2, 2)] {
            session.apply_move(row, col).unwrap();
            assert!(MarkBalanceInvariant::holds(&session));
        }
    }

    #[test]
    fn test_o_leading_violates() {
        let mut session = Session::new();
        session.board.set(4, Cell::Occupied(Mark::O));
        assert!(!MarkBalanceInvariant::holds(&session));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut session = Session::new();
        session.board.set(0, Cell::Occupied(Mark::X));
        session.board.set(8, Cell::Occupied(Mark::X));
        assert!(!MarkBalanceInvariant::holds(&session));
    }
}
