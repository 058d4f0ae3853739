//! The authoritative game session.
//!
//! A [`Session`] is the single mutable entity of the system. It is created
//! empty with X to move, changes only through [`Session::apply_move`] and
//! [`Session::reset`], and freezes once the game is won or drawn.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, SessionInvariants};
use super::snapshot::SessionSnapshot;
use super::types::{Board, Cell, GameStatus, Mark};
use super::{Position, rules};
use tracing::{debug, info, instrument, warn};

/// One game of tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) current_player: Mark,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Session {
    /// Creates a session in its initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns a snapshot of the observable state. Never fails.
    #[instrument(skip(self))]
    pub fn get_state(&self) -> SessionSnapshot {
        debug!(status = ?self.status, moves = self.history.len(), "Reading session state");
        SessionSnapshot::of(self)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Preconditions are checked in order: coordinates on the board, game
    /// not over, cell empty. The first violation is returned and the session
    /// is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] describing the first violated precondition.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: i64, col: i64) -> Result<SessionSnapshot, MoveError> {
        let position = Position::new(row, col).inspect_err(|e| {
            warn!(row, col, error = %e, "Rejected move");
        })?;
        self.place(position)?;
        Ok(self.get_state())
    }

    /// Places the current player's mark at an already validated position.
    ///
    /// Returns the status after the move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] or [`MoveError::CellOccupied`].
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub(crate) fn place(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            warn!(status = ?self.status, "Rejected move after game end");
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position.index()) {
            warn!("Rejected move onto occupied cell");
            return Err(MoveError::CellOccupied(position));
        }

        let mark = self.current_player;
        self.board.set(position.index(), Cell::Occupied(mark));
        self.history.push(Move::new(mark, position));

        if let Some(winner) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
            info!(winner = %winner, moves = self.history.len(), "Game won");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!(moves = self.history.len(), "Game drawn");
        } else {
            self.current_player = mark.opponent();
            debug!(next = %self.current_player, "Move accepted");
        }

        debug_assert!(
            SessionInvariants::check_all(&*self).is_ok(),
            "session invariants violated after {}:\n{}",
            position,
            self.board.display()
        );

        Ok(self.status)
    }

    /// Returns the session to its initial state and returns the fresh snapshot.
    /// Always succeeds, even mid-game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> SessionSnapshot {
        info!(previous = ?self.status, moves = self.history.len(), "Resetting session");
        *self = Self::new();
        self.get_state()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whoever moves next. Once the game is over this is the player
    /// who made the final move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// True iff the board filled up with no winner.
    pub fn is_draw(&self) -> bool {
        self.status.is_draw()
    }

    /// Human-readable status line, derived on every call.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
            GameStatus::Won(mark) => format!("Player {} wins!", mark),
            GameStatus::Draw => "Draw".to_string(),
        }
    }

    /// Returns moves applied since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the cells still open for play; empty once the game is over.
    #[instrument(skip(self))]
    pub fn valid_positions(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        Position::empty_cells(&self.board)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(session: &mut Session, moves: &[(i64, i64)]) {
        for &(row, col) in moves {
            session.apply_move(row, col).expect("legal move");
        }
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert_eq!(session.current_player(), Mark::X);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.winner(), None);
        assert!(!session.is_draw());
        assert_eq!(session.status_text(), "Player X's turn");
        assert_eq!(session.valid_positions().len(), 9);
    }

    #[test]
    fn test_move_flips_turn() {
        let mut session = Session::new();
        let snapshot = session.apply_move(1, 1).unwrap();
        assert_eq!(snapshot.current_player, Mark::O);
        assert_eq!(snapshot.board[1][1], Some(Mark::X));
        assert_eq!(snapshot.status, "Player O's turn");
    }

    #[test]
    fn test_out_of_range_checked_before_game_over() {
        let mut session = Session::new();
        play(&mut session, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert_eq!(
            session.apply_move(3, 0),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_game_over_checked_before_occupied() {
        let mut session = Session::new();
        play(&mut session, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert_eq!(session.apply_move(0, 0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_winner_keeps_current_player() {
        let mut session = Session::new();
        play(&mut session, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert_eq!(session.current_player(), Mark::X);
        assert_eq!(session.status_text(), "Player X wins!");
        assert!(session.valid_positions().is_empty());
    }

    #[test]
    fn test_draw_status_text() {
        let mut session = Session::new();
        play(
            &mut session,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(session.status(), GameStatus::Draw);
        assert_eq!(session.status_text(), "Draw");
    }

    #[test]
    fn test_reset_clears_history() {
        let mut session = Session::new();
        play(&mut session, &[(0, 0), (2, 2)]);
        assert_eq!(session.history().len(), 2);
        session.reset();
        assert!(session.history().is_empty());
        assert_eq!(session, Session::new());
    }
}
