use std::time::Duration;

use log::{debug, info, trace};

use crate::{
    MoveError, PieceCollisionError,
    core::{
        board::Board,
        piece::{Piece, PieceKind},
    },
};

use super::{
    GameStats,
    piece_source::{PieceSeed, PieceSource, RandomPieces},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// A player request, applied with [`GameSession::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Restart,
}

/// What a downward step did to the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Moved,
    /// The piece could not move and locked into the board.
    Locked { cleared_lines: usize },
}

/// Frame rate the gravity curve is tuned for.
const BASE_FPS: u64 = 50;

/// Frames between forced drops at `level`, scaled from [`BASE_FPS`] to `fps`.
///
/// At 50 FPS this is `max(5, 50 - (level - 1) * 5)`: 50 frames at level 1, 5 fewer
/// per level, never below 5.
fn drop_frames(level: usize, fps: u64) -> u64 {
    let steps = level.saturating_sub(1) as u64;
    let base = 50_u64.saturating_sub(steps.saturating_mul(5)).max(5);
    (base.saturating_mul(fps) / BASE_FPS).max(1)
}

/// A running game: board, falling and next piece, statistics and the gravity timer.
///
/// The session advances one frame per [`Self::increment_frame`] call. Player input
/// goes through [`Self::apply`] or the individual `try_*` methods, all of which leave
/// the state untouched when the move is not possible.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    falling_piece: Piece,
    next_piece: PieceKind,
    stats: GameStats,
    session_state: SessionState,
    pieces: Box<dyn PieceSource>,
    fps: u64,
    total_frames: u64,
    drop_timer: u64,
    drop_frames: u64,
}

impl GameSession {
    /// Starts a session on an empty board and spawns the first piece.
    ///
    /// # Panics
    ///
    /// Panics if `fps` is zero.
    #[must_use]
    pub fn new(fps: u64, pieces: Box<dyn PieceSource>) -> Self {
        Self::from_board(fps, Board::EMPTY, pieces)
    }

    /// Like [`Self::new`], drawing pieces from a [`RandomPieces`] seeded with `seed`.
    #[must_use]
    pub fn with_seed(fps: u64, seed: PieceSeed) -> Self {
        Self::new(fps, Box::new(RandomPieces::with_seed(seed)))
    }

    /// Starts a session on a prepared board.
    ///
    /// The first piece spawns as usual, so a board that blocks the spawn position
    /// yields a session that is already over.
    ///
    /// # Panics
    ///
    /// Panics if `fps` is zero.
    #[must_use]
    pub fn from_board(fps: u64, board: Board, mut pieces: Box<dyn PieceSource>) -> Self {
        assert!(fps > 0, "frame rate must be positive");
        let stats = GameStats::new();
        let next_piece = pieces.next_kind();
        let mut this = Self {
            board,
            falling_piece: Piece::new(next_piece),
            next_piece,
            drop_frames: drop_frames(stats.level(), fps),
            stats,
            session_state: SessionState::Playing,
            pieces,
            fps,
            total_frames: 0,
            drop_timer: 0,
        };
        info!("session started ({fps} fps)");
        this.spawn_piece();
        this
    }

    /// Clears the board and statistics and spawns a fresh piece.
    ///
    /// Works in any state. The piece source keeps its position, so the new game
    /// continues the same sequence rather than replaying it.
    pub fn restart(&mut self) {
        self.board = Board::EMPTY;
        self.stats = GameStats::new();
        self.session_state = SessionState::Playing;
        self.total_frames = 0;
        self.drop_timer = 0;
        self.drop_frames = drop_frames(self.stats.level(), self.fps);
        self.next_piece = self.pieces.next_kind();
        info!("session restarted");
        self.spawn_piece();
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> Piece {
        self.falling_piece
    }

    #[must_use]
    pub fn next_piece(&self) -> PieceKind {
        self.next_piece
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn fps(&self) -> u64 {
        self.fps
    }

    /// Frames played since the session started or restarted.
    #[must_use]
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Frames between forced drops at the current level.
    #[must_use]
    pub fn drop_frames(&self) -> u64 {
        self.drop_frames
    }

    /// Play time derived from [`Self::total_frames`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        const NANOS_PER_SEC: u128 = 1_000_000_000;
        let secs = self.total_frames / self.fps;
        let nanos =
            u128::from(self.total_frames % self.fps) * NANOS_PER_SEC / u128::from(self.fps);
        // Below one second, so it always fits.
        let nanos = u64::try_from(nanos).unwrap_or(0);
        Duration::from_secs(secs) + Duration::from_nanos(nanos)
    }

    /// Replaces the falling piece if it fits on the board.
    pub fn set_falling_piece(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if self.board.is_colliding(&piece) {
            return Err(PieceCollisionError);
        }
        self.falling_piece = piece;
        Ok(())
    }

    /// Advances the session by one frame and applies gravity when its timer expires.
    ///
    /// Does nothing after game over.
    pub fn increment_frame(&mut self) {
        if self.session_state.is_game_over() {
            return;
        }
        self.total_frames += 1;
        self.drop_timer += 1;
        if self.drop_timer >= self.drop_frames {
            self.drop_timer = 0;
            self.drop_or_lock();
            self.drop_frames = drop_frames(self.stats.level(), self.fps);
        }
    }

    /// Applies one player command, ignoring it if the move is not possible.
    pub fn apply(&mut self, command: Command) {
        let result = match command {
            Command::MoveLeft => self.try_move_left(),
            Command::MoveRight => self.try_move_right(),
            Command::Rotate => self.try_rotate(),
            Command::SoftDrop => self.try_soft_drop().map(|_| ()),
            Command::Restart => {
                self.restart();
                Ok(())
            }
        };
        if let Err(err) = result {
            trace!("{command:?} rejected: {err}");
        }
    }

    pub fn try_move_left(&mut self) -> Result<(), MoveError> {
        self.ensure_playing()?;
        self.set_falling_piece(self.falling_piece.left())?;
        Ok(())
    }

    pub fn try_move_right(&mut self) -> Result<(), MoveError> {
        self.ensure_playing()?;
        self.set_falling_piece(self.falling_piece.right())?;
        Ok(())
    }

    /// Rotates clockwise with wall kicks.
    pub fn try_rotate(&mut self) -> Result<(), MoveError> {
        self.ensure_playing()?;
        let piece = self
            .falling_piece
            .kicked_rotation(&self.board)
            .ok_or(PieceCollisionError)?;
        self.falling_piece = piece;
        Ok(())
    }

    /// Moves the piece down one row, or locks it if it cannot move.
    ///
    /// Only fails after game over. The gravity timer is not reset.
    pub fn try_soft_drop(&mut self) -> Result<DropOutcome, MoveError> {
        self.ensure_playing()?;
        let outcome = self.drop_or_lock();
        if outcome.is_locked() {
            self.drop_frames = drop_frames(self.stats.level(), self.fps);
        }
        Ok(outcome)
    }

    fn ensure_playing(&self) -> Result<(), MoveError> {
        match self.session_state {
            SessionState::Playing => Ok(()),
            SessionState::GameOver => Err(MoveError::GameOver),
        }
    }

    fn drop_or_lock(&mut self) -> DropOutcome {
        if self.set_falling_piece(self.falling_piece.down()).is_ok() {
            return DropOutcome::Moved;
        }
        let cleared_lines = self.complete_piece_drop();
        DropOutcome::Locked { cleared_lines }
    }

    /// Locks the falling piece, clears full rows, updates statistics and spawns the
    /// next piece.
    fn complete_piece_drop(&mut self) -> usize {
        let piece = self.falling_piece;
        self.board.fill_piece(&piece);
        let cleared_lines = self.board.clear_lines();

        let level_before = self.stats.level();
        self.stats.complete_piece_drop(cleared_lines);
        debug!(
            "locked {:?} at ({}, {}), cleared {cleared_lines} lines, score {}",
            piece.kind(),
            piece.x(),
            piece.y(),
            self.stats.score()
        );
        if self.stats.level() != level_before {
            debug!("level up: {level_before} -> {}", self.stats.level());
        }

        self.spawn_piece();
        cleared_lines
    }

    /// Promotes the next piece to the falling piece and draws a new next piece.
    ///
    /// Ends the session if the new piece collides at the spawn position. The board
    /// is left as it is.
    fn spawn_piece(&mut self) {
        self.falling_piece = Piece::new(self.next_piece);
        self.next_piece = self.pieces.next_kind();
        if self.board.is_colliding(&self.falling_piece) {
            self.session_state = SessionState::GameOver;
            info!(
                "game over: score {}, level {}, lines {}",
                self.stats.score(),
                self.stats.level(),
                self.stats.total_cleared_lines()
            );
        }
    }
}
