//! Game logic for a classic falling-block puzzle on a 10×20 board.
//!
//! The crate is split in two layers:
//!
//! - [`core`] - board grid, piece catalog, collision, rotation and line clearing
//! - [`engine`] - session state machine, gravity timing, scoring and piece sources
//!
//! Nothing here touches the terminal. A front end owns a [`GameSession`], feeds it
//! [`Command`]s and frame ticks, and reads back the board, pieces and statistics
//! to draw them.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece colliding with walls or locked blocks")]
pub struct PieceCollisionError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("piece colliding after move")]
    PieceCollision(PieceCollisionError),
    #[display("game is over")]
    GameOver,
}

impl From<PieceCollisionError> for MoveError {
    fn from(err: PieceCollisionError) -> Self {
        MoveError::PieceCollision(err)
    }
}
