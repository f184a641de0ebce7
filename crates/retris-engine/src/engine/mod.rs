//! Session state and progression on top of [`crate::core`].
//!
//! - [`GameSession`] - board, falling piece, next piece, gravity timer and game-over state
//! - [`GameStats`] - score, level, lines and per-lock statistics
//! - [`PieceSource`] - where new piece kinds come from ([`RandomPieces`], [`ScriptedPieces`])
//! - [`PieceSeed`] - 128-bit seed for a reproducible [`RandomPieces`] sequence
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`]; the first piece spawns immediately
//! 2. Each frame, apply at most one [`Command`] and call [`GameSession::increment_frame`]
//! 3. A piece that cannot move down locks, full rows clear, and the next piece spawns
//! 4. A spawn that collides ends the session until [`Command::Restart`]
//!
//! # Example
//!
//! ```
//! use retris_engine::{Command, GameSession, PieceKind, ScriptedPieces};
//!
//! let mut session = GameSession::new(50, Box::new(ScriptedPieces::new(vec![PieceKind::O])));
//!
//! session.apply(Command::MoveLeft);
//! session.apply(Command::Rotate);
//! for _ in 0..50 {
//!     session.increment_frame();
//! }
//!
//! assert!(session.session_state().is_playing());
//! assert_eq!(session.falling_piece().y(), 1);
//! ```

pub use self::{game_session::*, game_stats::*, piece_source::*};

mod game_session;
mod game_stats;
mod piece_source;
