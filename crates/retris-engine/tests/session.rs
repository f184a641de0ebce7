use retris_engine::{
    Block, Board, Command, DropOutcome, GameSession, Piece, PieceKind, PieceSeed, ScriptedPieces,
};

fn scripted(fps: u64, kinds: &[PieceKind]) -> GameSession {
    GameSession::new(fps, Box::new(ScriptedPieces::new(kinds.to_vec())))
}

fn board_with_rows(rows: impl IntoIterator<Item = usize>, gap: Option<usize>) -> Board {
    let mut board = Board::EMPTY;
    for y in rows {
        for x in 0..Board::WIDTH {
            if Some(x) != gap {
                board.set(x, y, Block::Piece(PieceKind::L));
            }
        }
    }
    board
}

fn drop_until_locked(session: &mut GameSession) -> usize {
    loop {
        if let DropOutcome::Locked { cleared_lines } = session.try_soft_drop().unwrap() {
            return cleared_lines;
        }
    }
}

#[test]
fn i_piece_soft_dropped_to_the_floor_fills_bottom_row() {
    let mut session = scripted(50, &[PieceKind::I, PieceKind::O]);
    let piece = Piece::at(PieceKind::I, 4, 0);
    assert!(!session.board().is_colliding(&piece));
    session.set_falling_piece(piece).unwrap();

    assert_eq!(drop_until_locked(&mut session), 0);

    let bottom: Vec<u8> = session.board().row(19).iter().map(|b| b.marker()).collect();
    assert_eq!(bottom, [0, 0, 0, 0, 1, 1, 1, 1, 0, 0]);
    assert!(
        session
            .board()
            .rows()
            .take(19)
            .flatten()
            .all(|b| b.is_empty())
    );
    assert_eq!(session.stats().total_cleared_lines(), 0);
    assert_eq!(session.falling_piece(), Piece::new(PieceKind::O));
}

#[test]
fn spawn_on_full_top_rows_ends_the_game_without_touching_the_board() {
    let board = board_with_rows([0, 1], None);
    let session = GameSession::from_board(
        50,
        board.clone(),
        Box::new(ScriptedPieces::new(vec![PieceKind::T])),
    );

    assert!(session.session_state().is_game_over());
    assert_eq!(session.board(), &board);
}

#[test]
fn every_kind_tops_out_on_blocked_spawn_rows() {
    for kind in PieceKind::ALL {
        let board = board_with_rows([1], None);
        let session =
            GameSession::from_board(50, board, Box::new(ScriptedPieces::new(vec![kind])));
        assert!(session.session_state().is_game_over(), "{kind:?}");
    }
}

#[test]
fn locking_into_the_stack_can_end_the_game() {
    // Column 9 stays open so no row is ever cleared.
    let board = board_with_rows(3..Board::HEIGHT, Some(9));
    let mut session =
        GameSession::from_board(50, board, Box::new(ScriptedPieces::new(vec![PieceKind::O])));
    assert!(session.session_state().is_playing());

    // O occupies rows 1..=2 at spawn and cannot move down.
    assert_eq!(drop_until_locked(&mut session), 0);
    assert!(session.session_state().is_game_over());
    assert_eq!(session.board().get(4, 2), Some(Block::Piece(PieceKind::O)));
}

#[test]
fn commands_are_ignored_after_game_over() {
    let board = board_with_rows([0, 1], None);
    let mut session =
        GameSession::from_board(50, board, Box::new(ScriptedPieces::new(vec![PieceKind::J])));
    let piece = session.falling_piece();

    for command in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::Rotate,
        Command::SoftDrop,
    ] {
        session.apply(command);
        assert_eq!(session.falling_piece(), piece);
    }
    for _ in 0..200 {
        session.increment_frame();
    }
    assert_eq!(session.falling_piece(), piece);
    assert!(session.session_state().is_game_over());
}

#[test]
fn restart_resets_board_stats_and_state() {
    let mut session = scripted(50, &[PieceKind::O, PieceKind::I, PieceKind::T]);
    drop_until_locked(&mut session);
    drop_until_locked(&mut session);
    assert_eq!(session.stats().completed_pieces(), 2);

    session.apply(Command::Restart);

    assert!(session.session_state().is_playing());
    assert_eq!(session.board(), &Board::EMPTY);
    assert_eq!(session.stats().completed_pieces(), 0);
    assert_eq!(session.stats().level(), 1);
    assert_eq!(session.falling_piece().y(), Piece::SPAWN_Y);
    assert_eq!(session.drop_frames(), 50);
}

#[test]
fn gravity_drops_one_row_per_interval_and_locks_on_the_floor() {
    let mut session = scripted(50, &[PieceKind::I, PieceKind::T]);
    // Flat I is on mask row 1 and reaches the floor at y = 18.
    for _ in 0..18 * 50 {
        session.increment_frame();
    }
    assert_eq!(session.falling_piece().kind(), PieceKind::I);
    assert_eq!(session.falling_piece().y(), 18);

    for _ in 0..50 {
        session.increment_frame();
    }
    assert_eq!(session.falling_piece(), Piece::new(PieceKind::T));
    assert_eq!(session.stats().completed_pieces(), 1);
}

#[test]
fn four_line_clear_outscores_single_line_clear() {
    // Rows 16..=19 filled except column 9; a vertical I fills the gap.
    let board = board_with_rows(16..Board::HEIGHT, Some(9));
    let mut tetris =
        GameSession::from_board(50, board, Box::new(ScriptedPieces::new(vec![PieceKind::I])));
    // Vertical I occupies mask column 2.
    let vertical = Piece::at(PieceKind::I, 7, 0).rotated_right();
    tetris.set_falling_piece(vertical).unwrap();
    assert_eq!(drop_until_locked(&mut tetris), 4);
    assert_eq!(tetris.stats().score(), 1600);
    assert_eq!(tetris.board(), &Board::EMPTY);

    let board = board_with_rows([19], Some(9));
    let mut single =
        GameSession::from_board(50, board, Box::new(ScriptedPieces::new(vec![PieceKind::I])));
    single.set_falling_piece(vertical).unwrap();
    assert_eq!(drop_until_locked(&mut single), 1);
    assert_eq!(single.stats().score(), 100);

    assert!(tetris.stats().score() > single.stats().score());
}

#[test]
fn level_rises_and_gravity_speeds_up_after_ten_lines() {
    let board = board_with_rows(10..Board::HEIGHT, Some(9));
    let mut session =
        GameSession::from_board(50, board, Box::new(ScriptedPieces::new(vec![PieceKind::I])));
    let vertical = Piece::at(PieceKind::I, 7, 0).rotated_right();

    for cleared in [4, 4] {
        session.set_falling_piece(vertical).unwrap();
        assert_eq!(drop_until_locked(&mut session), cleared);
    }
    assert_eq!(session.stats().level(), 1);
    assert_eq!(session.drop_frames(), 50);

    session.set_falling_piece(vertical).unwrap();
    assert_eq!(drop_until_locked(&mut session), 2);
    assert_eq!(session.stats().total_cleared_lines(), 10);
    assert_eq!(session.stats().level(), 2);
    assert_eq!(session.drop_frames(), 45);
    assert_eq!(session.stats().score(), 1600 + 1600 + 400);
}

#[test]
fn same_seed_replays_the_same_pieces() {
    let seed: PieceSeed = "00000000000000000000000000c0ffee".parse().unwrap();
    let mut a = GameSession::with_seed(50, seed);
    let mut b = GameSession::with_seed(50, seed);
    // Five spawn-orientation pieces stack at most ten rows high.
    for _ in 0..5 {
        assert_eq!(a.falling_piece(), b.falling_piece());
        assert_eq!(a.next_piece(), b.next_piece());
        drop_until_locked(&mut a);
        drop_until_locked(&mut b);
    }
}
