//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The session records each
//! accepted move so its history can be checked against the board.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub mark: Mark,
    /// Where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Why a move was rejected.
///
/// Every variant is an invalid move: the session is left untouched and the
/// caller decides how to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside `0..=2`.
    #[display("out of range: row {}, col {}", row, col)]
    OutOfRange {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// The game has already been won or drawn.
    #[display("game over")]
    GameOver,

    /// The target cell already holds a mark.
    #[display("cell occupied: {}", _0)]
    CellOccupied(#[error(not(source))] Position),
}

impl MoveError {
    /// Stable machine-readable code for this rejection.
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::OutOfRange { .. } => "out_of_range",
            MoveError::GameOver => "game_over",
            MoveError::CellOccupied(_) => "cell_occupied",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::OutOfRange { row: 3, col: 0 }.to_string(),
            "out of range: row 3, col 0"
        );
        assert_eq!(MoveError::GameOver.to_string(), "game over");
        let pos = Position::new(1, 1).unwrap();
        assert_eq!(
            MoveError::CellOccupied(pos).to_string(),
            "cell occupied: (1, 1)"
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            MoveError::OutOfRange { row: -1, col: 0 }.code(),
            MoveError::GameOver.code(),
            MoveError::CellOccupied(Position::new(0, 0).unwrap()).code(),
        ];
        assert_eq!(codes, ["out_of_range", "game_over", "cell_occupied"]);
    }

    #[test]
    fn test_move_display() {
        let action = Move::new(Mark::X, Position::new(0, 2).unwrap());
        assert_eq!(action.to_string(), "X -> (0, 2)");
    }

    #[test]
    fn test_move_rejects_off_board_position() {
        let ok: Move = serde_json::from_str(r#"{"mark":"O","position":{"row":2,"col":0}}"#).unwrap();
        assert_eq!(ok, Move::new(Mark::O, Position::new(2, 0).unwrap()));

        let bad = serde_json::from_str::<Move>(r#"{"mark":"X","position":{"row":0,"col":5}}"#);
        assert!(bad.is_err());
    }
}
