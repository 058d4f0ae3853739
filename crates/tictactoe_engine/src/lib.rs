//! Tic-tac-toe session engine.
//!
//! The engine is the single source of truth for one game: it tracks the
//! board, enforces turn order, validates moves, detects wins and draws, and
//! resets. It performs no I/O and knows nothing about transports; callers
//! exchange plain [`SessionSnapshot`]s with it.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Mark, MoveError, Session};
//!
//! let mut session = Session::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     session.apply_move(row, col)?;
//! }
//! let state = session.get_state();
//! assert_eq!(state.winner, Some(Mark::X));
//! assert_eq!(session.apply_move(2, 2), Err(MoveError::GameOver));
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use session::Session;
pub use snapshot::SessionSnapshot;
pub use types::{Board, Cell, GameStatus, Mark};
