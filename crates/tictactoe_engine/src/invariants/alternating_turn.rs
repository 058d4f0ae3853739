//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Mark, Session};
use super::Invariant;

/// Invariant: players alternate turns.
///
/// History must read X, O, X, ... and `current_player` must agree with it:
/// while the game runs it is the player after the last mover, once the game
/// is over it stays on the player who made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, action)| action.mark == if i % 2 == 0 { Mark::X } else { Mark::O });
        if !alternates {
            return false;
        }

        let expected = match history.last() {
            None => Mark::X,
            Some(last) if session.status().is_terminal() => last.mark,
            Some(last) => last.mark.opponent(),
        };
        session.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
