//! Serializable view of a session.

use super::session::Session;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Owned copy of everything a client can observe about a session.
///
/// Serializes to the wire shape the browser UI consumes:
///
/// ```json
/// {
///   "board": [["X", null, null], [null, "O", null], [null, null, null]],
///   "current_player": "X",
///   "winner": null,
///   "draw": false,
///   "status": "Player X's turn"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Rows top to bottom, each cell `None` when empty.
    pub board: [[Option<Mark>; 3]; 3],
    /// Whoever moves next.
    pub current_player: Mark,
    /// The winner, once there is one.
    pub winner: Option<Mark>,
    /// True iff the board is full with no winner.
    pub draw: bool,
    /// Human-readable status line.
    pub status: String,
}

impl SessionSnapshot {
    pub(crate) fn of(session: &Session) -> Self {
        Self {
            board: session.board().rows(),
            current_player: session.current_player(),
            winner: session.winner(),
            draw: session.is_draw(),
            status: session.status_text(),
        }
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.draw
    }
}
