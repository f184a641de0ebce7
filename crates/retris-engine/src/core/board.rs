use arrayvec::ArrayVec;

use super::piece::{Piece, PieceKind, PieceMask};

pub(crate) const BOARD_WIDTH: usize = 10;
pub(crate) const BOARD_HEIGHT: usize = 20;
const CELL_COUNT: usize = BOARD_WIDTH * BOARD_HEIGHT;

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const WIDTH_I32: i32 = BOARD_WIDTH as i32;
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const HEIGHT_I32: i32 = BOARD_HEIGHT as i32;

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Block {
    /// Empty cell.
    #[default]
    Empty,
    /// Locked block left by a piece of the given kind.
    Piece(PieceKind),
}

impl Block {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Block::Empty
    }

    /// Returns the numeric cell marker: `0` for empty, `1..=7` for a piece kind.
    #[must_use]
    pub const fn marker(self) -> u8 {
        match self {
            Block::Empty => 0,
            Block::Piece(kind) => kind.marker(),
        }
    }

    #[must_use]
    pub const fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            0 => Some(Block::Empty),
            _ => match PieceKind::from_marker(marker) {
                Some(kind) => Some(Block::Piece(kind)),
                None => None,
            },
        }
    }
}

/// The 10×20 playfield of locked blocks.
///
/// Cells are stored row-major in one fixed-size array; row `0` is the top. The
/// falling piece is not part of the board until it locks (see [`Board::fill_piece`]).
///
/// # Example
///
/// ```
/// use retris_engine::{Block, Board, PieceKind};
///
/// let mut board = Board::EMPTY;
/// board.set(0, 19, Block::Piece(PieceKind::I));
/// assert_eq!(board.get(0, 19), Some(Block::Piece(PieceKind::I)));
/// assert_eq!(board.get(10, 19), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Block; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    pub const EMPTY: Self = Self {
        cells: [Block::Empty; CELL_COUNT],
    };

    /// Returns the cell at column `x`, row `y`, or `None` outside the board.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Block> {
        (x < BOARD_WIDTH && y < BOARD_HEIGHT).then(|| self.cells[y * BOARD_WIDTH + x])
    }

    /// Overwrites the cell at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the board.
    pub fn set(&mut self, x: usize, y: usize, block: Block) {
        assert!(
            x < BOARD_WIDTH && y < BOARD_HEIGHT,
            "cell ({x}, {y}) outside the board"
        );
        self.cells[y * BOARD_WIDTH + x] = block;
    }

    /// Returns row `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the board.
    #[must_use]
    pub fn row(&self, y: usize) -> &[Block] {
        &self.cells[y * BOARD_WIDTH..][..BOARD_WIDTH]
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Block]> {
        self.cells.chunks_exact(BOARD_WIDTH)
    }

    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).iter().all(|block| !block.is_empty())
    }

    /// Returns whether a mask placed with its top-left corner at `(x, y)` hits a wall,
    /// the floor, or a locked block.
    ///
    /// Occupied mask cells are checked one by one:
    ///
    /// - a column left of `0` or right of the last column collides
    /// - a row below the last row collides
    /// - a row `>= 0` collides if the board cell is occupied
    ///
    /// Cells above the top row are only checked against the side walls, so a piece
    /// may sit partly above the visible board.
    #[must_use]
    pub fn collides(&self, mask: PieceMask, x: i32, y: i32) -> bool {
        mask.cells().any(|(dx, dy)| {
            let cx = x + i32::from(dx);
            let cy = y + i32::from(dy);
            if !(0..WIDTH_I32).contains(&cx) || cy >= HEIGHT_I32 {
                return true;
            }
            match (usize::try_from(cx), usize::try_from(cy)) {
                (Ok(cx), Ok(cy)) => self.get(cx, cy).is_some_and(|block| !block.is_empty()),
                _ => false,
            }
        })
    }

    /// Like [`Self::collides`], for a piece at its own position.
    #[must_use]
    pub fn is_colliding(&self, piece: &Piece) -> bool {
        self.collides(piece.mask(), piece.x(), piece.y())
    }

    /// Writes the piece's cells into the board as locked blocks of its kind.
    ///
    /// Cells above the top row are dropped.
    ///
    /// # Panics
    ///
    /// Panics if a cell lands right of the last column or below the floor. A locked
    /// piece has passed [`Self::is_colliding`], so this never happens in play.
    pub fn fill_piece(&mut self, piece: &Piece) {
        let block = Block::Piece(piece.kind());
        for (x, y) in piece.occupied_positions() {
            // Rows above the board are negative and dropped here.
            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };
            self.set(x, y, block);
        }
    }

    /// Removes every full row and returns how many were removed.
    ///
    /// Full rows are collected top to bottom and then removed one at a time in that
    /// order: each removal copies every row above it one row down and empties row 0.
    /// A removal moves the rows above it, so any pending index above the removed row
    /// is bumped by one to keep pointing at the same blocks.
    ///
    /// A board without full rows is left untouched.
    pub fn clear_lines(&mut self) -> usize {
        let mut full_rows: ArrayVec<usize, BOARD_HEIGHT> = (0..BOARD_HEIGHT)
            .filter(|&y| self.is_row_full(y))
            .collect();

        for i in 0..full_rows.len() {
            let cleared = full_rows[i];
            for y in (1..=cleared).rev() {
                self.cells
                    .copy_within((y - 1) * BOARD_WIDTH..y * BOARD_WIDTH, y * BOARD_WIDTH);
            }
            self.cells[..BOARD_WIDTH].fill(Block::Empty);

            for pending in &mut full_rows[i + 1..] {
                if *pending < cleared {
                    *pending += 1;
                }
            }
        }

        full_rows.len()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const I: Block = Block::Piece(PieceKind::I);

    fn fill_row(board: &mut Board, y: usize, block: Block) {
        for x in 0..BOARD_WIDTH {
            board.set(x, y, block);
        }
    }

    /// Fills row `y` except one column, tagging blocks by row so shifts are visible.
    fn fill_row_with_gap(board: &mut Board, y: usize) {
        let kind = PieceKind::from_index(y % PieceKind::LEN);
        for x in 0..BOARD_WIDTH - 1 {
            board.set((x + y) % BOARD_WIDTH, y, Block::Piece(kind));
        }
    }

    #[test]
    fn test_empty_board() {
        let board = Board::EMPTY;
        assert_eq!(board.rows().count(), BOARD_HEIGHT);
        for row in board.rows() {
            assert_eq!(row.len(), BOARD_WIDTH);
            assert!(row.iter().all(|block| block.is_empty()));
        }
    }

    #[test]
    fn test_block_markers() {
        assert_eq!(Block::Empty.marker(), 0);
        assert_eq!(Block::Piece(PieceKind::I).marker(), 1);
        assert_eq!(Block::Piece(PieceKind::L).marker(), 7);
        for marker in 0..=7 {
            assert_eq!(Block::from_marker(marker).map(Block::marker), Some(marker));
        }
        assert_eq!(Block::from_marker(8), None);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::EMPTY;
        assert_eq!(board.get(9, 19), Some(Block::Empty));
        assert_eq!(board.get(10, 0), None);
        assert_eq!(board.get(0, 20), None);
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_set_out_of_bounds_panics() {
        let mut board = Board::EMPTY;
        board.set(BOARD_WIDTH, 0, I);
    }

    #[test]
    fn test_collides_with_walls_and_floor() {
        let board = Board::EMPTY;
        let mask = PieceKind::I.mask();
        // Flat I occupies mask row 1, columns 0..4.
        assert!(!board.collides(mask, 0, 0));
        assert!(!board.collides(mask, 6, 0));
        assert!(board.collides(mask, -1, 0));
        assert!(board.collides(mask, 7, 0));
        assert!(!board.collides(mask, 0, 18));
        assert!(board.collides(mask, 0, 19));
    }

    #[test]
    fn test_collides_above_top_row_only_checks_walls() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 0, I);
        let mask = PieceKind::I.mask();
        // Mask row 1 sits at board row -1.
        assert!(!board.collides(mask, 0, -2));
        assert!(board.collides(mask, -1, -2));
        assert!(board.collides(mask, 7, -2));
        // Mask row 1 at board row 0 hits the filled row.
        assert!(board.collides(mask, 0, -1));
    }

    #[test]
    fn test_collides_with_locked_block() {
        let mut board = Board::EMPTY;
        board.set(5, 10, I);
        let mask = PieceKind::O.mask();
        // O occupies mask (1..3, 1..3).
        assert!(board.collides(mask, 4, 9));
        assert!(board.collides(mask, 3, 8));
        assert!(!board.collides(mask, 5, 9));
        assert!(!board.collides(mask, 4, 10));
    }

    #[test]
    fn test_fill_piece_writes_kind_and_skips_hidden_rows() {
        let mut board = Board::EMPTY;
        board.fill_piece(&Piece::at(PieceKind::T, 0, -2));
        // T mask row 2 lands on board row 0; mask row 1 is above the board.
        let row0: Vec<_> = board.row(0).iter().map(|b| b.marker()).collect();
        assert_eq!(row0, vec![3, 3, 3, 0, 0, 0, 0, 0, 0, 0]);
        assert!(board.rows().skip(1).flatten().all(|b| b.is_empty()));
    }

    #[test]
    fn test_clear_lines_without_full_rows_is_noop() {
        let mut board = Board::EMPTY;
        for y in 10..BOARD_HEIGHT {
            fill_row_with_gap(&mut board, y);
        }
        let before = board.clone();
        assert_eq!(board.clear_lines(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_lines_single_bottom_row() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 19, I);
        board.set(0, 18, Block::Piece(PieceKind::O));

        assert_eq!(board.clear_lines(), 1);
        assert_eq!(board.get(0, 19), Some(Block::Piece(PieceKind::O)));
        assert!(board.row(18).iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_clear_lines_separated_rows() {
        let mut board = Board::EMPTY;
        for y in 0..BOARD_HEIGHT {
            fill_row_with_gap(&mut board, y);
        }
        fill_row(&mut board, 5, I);
        fill_row(&mut board, 7, I);
        let before = board.clone();

        assert_eq!(board.clear_lines(), 2);

        assert!(board.row(0).iter().all(|b| b.is_empty()));
        assert!(board.row(1).iter().all(|b| b.is_empty()));
        // Surviving rows above the cleared ones keep their order.
        for (new_y, old_y) in [(2, 0), (3, 1), (4, 2), (5, 3), (6, 4), (7, 6)] {
            assert_eq!(board.row(new_y), before.row(old_y), "row {new_y}");
        }
        // Rows below the lowest cleared row do not move.
        for y in 8..BOARD_HEIGHT {
            assert_eq!(board.row(y), before.row(y), "row {y}");
        }
    }

    #[test]
    fn test_clear_lines_four_consecutive() {
        let mut board = Board::EMPTY;
        for y in 16..BOARD_HEIGHT {
            fill_row(&mut board, y, I);
        }
        board.set(3, 15, Block::Piece(PieceKind::S));

        assert_eq!(board.clear_lines(), 4);
        assert_eq!(board.get(3, 19), Some(Block::Piece(PieceKind::S)));
        assert_eq!(
            board.rows().flatten().filter(|b| !b.is_empty()).count(),
            1
        );
    }

    #[test]
    fn test_clear_lines_all_filled() {
        let mut board = Board::EMPTY;
        for y in 0..BOARD_HEIGHT {
            fill_row(&mut board, y, I);
        }
        assert_eq!(board.clear_lines(), BOARD_HEIGHT);
        assert_eq!(board, Board::EMPTY);
    }

    fn any_board() -> impl Strategy<Value = Board> {
        proptest::collection::vec(0u8..=7, CELL_COUNT).prop_map(|markers| {
            let mut board = Board::EMPTY;
            for (i, marker) in markers.into_iter().enumerate() {
                // Keep roughly half of the cells empty.
                let block = if marker % 2 == 0 {
                    Block::Empty
                } else {
                    Block::from_marker(marker).unwrap_or_default()
                };
                board.set(i % BOARD_WIDTH, i / BOARD_WIDTH, block);
            }
            board
        })
    }

    fn any_kind() -> impl Strategy<Value = PieceKind> {
        (0..PieceKind::LEN).prop_map(PieceKind::from_index)
    }

    proptest! {
        #[test]
        fn collides_is_pure(board in any_board(), kind in any_kind(), x in -4i32..14, y in -4i32..24) {
            let before = board.clone();
            let first = board.collides(kind.mask(), x, y);
            let second = board.collides(kind.mask(), x, y);
            prop_assert_eq!(first, second);
            prop_assert_eq!(board, before);
        }

        #[test]
        fn collides_out_of_bounds_regardless_of_board(
            board in any_board(),
            kind in any_kind(),
            turns in 0usize..4,
            y in -3i32..17,
        ) {
            let mut mask = kind.mask();
            for _ in 0..turns {
                mask = mask.rotated_right();
            }
            for (dx, dy) in mask.cells() {
                let (dx, dy) = (i32::from(dx), i32::from(dy));
                // Place this cell at column -1, column WIDTH, and row HEIGHT.
                prop_assert!(board.collides(mask, -1 - dx, y));
                prop_assert!(board.collides(mask, WIDTH_I32 - dx, y));
                prop_assert!(board.collides(mask, 3, HEIGHT_I32 - dy));
            }
        }

        #[test]
        fn clear_lines_keeps_non_full_rows_in_order(board in any_board()) {
            let kept: Vec<Vec<Block>> = board
                .rows()
                .enumerate()
                .filter(|&(y, _)| !board.is_row_full(y))
                .map(|(_, row)| row.to_vec())
                .collect();
            let mut cleared = board.clone();
            let count = cleared.clear_lines();
            prop_assert_eq!(count, BOARD_HEIGHT - kept.len());
            for (offset, row) in kept.iter().enumerate() {
                prop_assert_eq!(cleared.row(count + offset), row.as_slice());
            }
        }
    }
}
