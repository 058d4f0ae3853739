//! Shared access to the process-wide game session.

use std::sync::{Arc, Mutex};
use tictactoe_engine::{MoveError, Session, SessionSnapshot};
use tracing::{error, info, instrument};

/// Errors from operating on the shared session.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SessionError {
    /// The engine rejected the move. The session is unchanged.
    #[display("Invalid move: {}", _0)]
    #[from]
    InvalidMove(MoveError),

    /// A previous holder of the lock panicked.
    #[display("Session unavailable: lock poisoned")]
    Unavailable,
}

/// Cheap-to-clone handle to the one active [`Session`].
///
/// Every operation takes the lock once and runs to completion inside it, so
/// two simultaneous moves can never both pass the occupied-cell check
/// against the same board.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    session: Arc<Mutex<Session>>,
}

impl SessionHandle {
    /// Creates a handle around a fresh session.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game session");
        Self::default()
    }

    /// Returns the current snapshot.
    #[instrument(skip(self))]
    pub fn get_state(&self) -> Result<SessionSnapshot, SessionError> {
        self.with_session(|session| session.get_state())
    }

    /// Applies a move for whoever's turn it is.
    #[instrument(skip(self))]
    pub fn apply_move(&self, row: i64, col: i64) -> Result<SessionSnapshot, SessionError> {
        self.with_session(|session| session.apply_move(row, col))?
            .map_err(SessionError::from)
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Result<SessionSnapshot, SessionError> {
        self.with_session(Session::reset)
    }

    fn with_session<T>(&self, op: impl FnOnce(&mut Session) -> T) -> Result<T, SessionError> {
        let mut session = self.session.lock().map_err(|_| {
            error!("Session lock poisoned");
            SessionError::Unavailable
        })?;
        Ok(op(&mut session))
    }
}
