//! Board coordinates.

use super::action::MoveError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell coordinate on the board, zero-indexed.
///
/// A `Position` can only be built through [`Position::new`] or
/// [`Position::from_index`], so holding one means the coordinate is on the
/// board. Deserialization goes through [`Position::new`] as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: usize,
    col: usize,
}

/// Unchecked wire form of a [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: i64,
    col: i64,
}

impl TryFrom<RawPosition> for Position {
    type Error = MoveError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
    }
}

impl Position {
    /// Validates a raw coordinate pair.
    ///
    /// Coordinates arrive as signed integers because callers forward whatever
    /// the client sent; anything outside `0..=2` is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] when either coordinate is off the board.
    #[instrument]
    pub fn new(row: i64, col: i64) -> Result<Self, MoveError> {
        let in_range = |v: i64| usize::try_from(v).ok().filter(|v| *v < Board::SIZE);
        match (in_range(row), in_range(col)) {
            (Some(row), Some(col)) => Ok(Self { row, col }),
            _ => Err(MoveError::OutOfRange { row, col }),
        }
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Board::SIZE * Board::SIZE).then(|| Self {
            row: index / Board::SIZE,
            col: index % Board::SIZE,
        })
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts to a row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * Board::SIZE + self.col
    }

    /// All 9 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Board::SIZE * Board::SIZE).filter_map(Self::from_index)
    }

    /// Filters positions by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn empty_cells(board: &Board) -> Vec<Position> {
        Self::all().filter(|pos| board.is_empty(pos.index())).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Mark};

    #[test]
    fn test_new_accepts_board_coordinates() {
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::new(row, col).expect("on the board");
                assert_eq!(pos.row() as i64, row);
                assert_eq!(pos.col() as i64, col);
            }
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        for (row, col) in [(3, 0), (0, 3), (-1, 0), (0, -1), (i64::MAX, i64::MIN)] {
            assert_eq!(
                Position::new(row, col),
                Err(MoveError::OutOfRange { row, col })
            );
        }
    }

    #[test]
    fn test_index_round_trip() {
        assert_eq!(Position::new(0, 0).unwrap().index(), 0);
        assert_eq!(Position::new(1, 1).unwrap().index(), 4);
        assert_eq!(Position::new(2, 2).unwrap().index(), 8);
        assert_eq!(Position::from_index(5), Position::new(1, 2).ok());
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_empty_cells_filters_occupied() {
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Mark::X));
        board.set(4, Cell::Occupied(Mark::O));

        let empty = Position::empty_cells(&board);
        assert_eq!(empty.len(), 7);
        assert!(!empty.contains(&Position::new(0, 0).unwrap()));
        assert!(!empty.contains(&Position::new(1, 1).unwrap()));
        assert!(empty.contains(&Position::new(2, 2).unwrap()));
    }

    #[test]
    fn test_deserialize_validates() {
        let pos: Position = serde_json::from_str(r#"{"row":1,"col":2}"#).unwrap();
        assert_eq!(pos, Position::new(1, 2).unwrap());
        assert_eq!(serde_json::to_string(&pos).unwrap(), r#"{"row":1,"col":2}"#);

        for raw in [r#"{"row":0,"col":5}"#, r#"{"row":7,"col":0}"#, r#"{"row":-1,"col":0}"#] {
            let err = serde_json::from_str::<Position>(raw).unwrap_err();
            assert!(err.to_string().contains("out of range"), "{}", err);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 1).unwrap().to_string(), "(2, 1)");
    }
}
