use std::fmt;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::board::{BOARD_WIDTH, Board};

const MASK_SIZE: usize = 4;

/// Wall-kick offsets tried, in order, after a clockwise rotation.
///
/// Offsets are `(dx, dy)` relative to the piece position before rotation. This is a
/// short fixed search, not a per-kind kick table.
pub const KICK_OFFSETS: [(i32, i32); 6] = [(0, 0), (-1, 0), (1, 0), (0, -1), (-2, 0), (2, 0)];

/// Enum representing the type of piece.
///
/// The discriminant is the catalog index. Boards store `index + 1` as the cell
/// marker so that `0` can mean an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// S-piece.
    S = 3,
    /// Z-piece.
    Z = 4,
    /// J-piece.
    J = 5,
    /// L-piece.
    L = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::from_index(rng.random_range(0..PieceKind::LEN))
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All kinds in catalog order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Looks up a kind by catalog index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..7`. Indices come from the piece source and
    /// never from user input, so an out-of-range value is a bug.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < Self::LEN, "piece index out of catalog");
        Self::ALL[index]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the value stored in board cells occupied by this kind (`1..=7`).
    #[must_use]
    pub const fn marker(self) -> u8 {
        self as u8 + 1
    }

    #[must_use]
    pub const fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            1..=7 => Some(Self::ALL[(marker - 1) as usize]),
            _ => None,
        }
    }

    /// Returns the canonical spawn mask of this kind.
    #[must_use]
    pub const fn mask(self) -> PieceMask {
        PIECE_MASKS[self as usize]
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use retris_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }
}

/// Occupancy of a piece inside its 4×4 bounding box.
///
/// Bit `x` of `rows[y]` is the cell at column `x`, row `y` of the box.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMask {
    rows: [u8; MASK_SIZE],
}

impl PieceMask {
    /// Side length of the bounding box.
    pub const SIZE: usize = MASK_SIZE;

    pub const EMPTY: Self = Self {
        rows: [0; MASK_SIZE],
    };

    #[must_use]
    pub const fn from_rows(cells: [[bool; MASK_SIZE]; MASK_SIZE]) -> Self {
        let mut rows = [0; MASK_SIZE];
        let mut y = 0;
        while y < MASK_SIZE {
            let mut x = 0;
            while x < MASK_SIZE {
                if cells[y][x] {
                    rows[y] |= 1 << x;
                }
                x += 1;
            }
            y += 1;
        }
        Self { rows }
    }

    /// Returns whether the cell at column `x`, row `y` of the box is occupied.
    ///
    /// Coordinates outside the box are reported as empty.
    #[must_use]
    pub const fn is_set(self, x: usize, y: usize) -> bool {
        x < MASK_SIZE && y < MASK_SIZE && self.rows[y] & (1 << x) != 0
    }

    /// Returns the mask turned 90° clockwise inside the box.
    ///
    /// Cell `(x, y)` moves to `(3 - y, x)` for every kind alike, so a shape that does
    /// not fill the box may drift inside it. Four turns always restore the mask.
    #[must_use]
    pub const fn rotated_right(self) -> Self {
        let mut rows = [0; MASK_SIZE];
        let mut y = 0;
        while y < MASK_SIZE {
            let mut x = 0;
            while x < MASK_SIZE {
                if self.is_set(x, y) {
                    rows[x] |= 1 << (MASK_SIZE - 1 - y);
                }
                x += 1;
            }
            y += 1;
        }
        Self { rows }
    }

    /// Iterates over the occupied cells as `(x, y)` offsets inside the box, row by row.
    pub fn cells(self) -> impl Iterator<Item = (u8, u8)> {
        (0..4u8).flat_map(move |y| {
            (0..4u8)
                .filter(move |&x| self.is_set(usize::from(x), usize::from(y)))
                .map(move |x| (x, y))
        })
    }

    #[must_use]
    pub fn count(self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }
}

impl fmt::Debug for PieceMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for y in 0..MASK_SIZE {
            let row: String = (0..MASK_SIZE)
                .map(|x| if self.is_set(x, y) { '#' } else { '.' })
                .collect();
            list.entry(&format_args!("{row}"));
        }
        list.finish()
    }
}

const PIECE_MASKS: [PieceMask; PieceKind::LEN] = {
    const C: bool = true;
    const E: bool = false;
    const EEEE: [bool; 4] = [E; 4];

    [
        // I-piece
        PieceMask::from_rows([EEEE, [C, C, C, C], EEEE, EEEE]),
        // O-piece
        PieceMask::from_rows([EEEE, [E, C, C, E], [E, C, C, E], EEEE]),
        // T-piece
        PieceMask::from_rows([EEEE, [E, C, E, E], [C, C, C, E], EEEE]),
        // S-piece
        PieceMask::from_rows([EEEE, [E, C, C, E], [C, C, E, E], EEEE]),
        // Z-piece
        PieceMask::from_rows([EEEE, [C, C, E, E], [E, C, C, E], EEEE]),
        // J-piece
        PieceMask::from_rows([EEEE, [C, E, E, E], [C, C, C, E], EEEE]),
        // L-piece
        PieceMask::from_rows([EEEE, [E, E, C, E], [C, C, C, E], EEEE]),
    ]
};

/// The falling piece.
///
/// Holds its own copy of the mask (rotation changes the mask, not a rotation index)
/// and the board position of the mask's top-left corner. Positions are signed: the
/// empty margin of the box may hang past a wall, and a wall kick may lift the box
/// above the top row.
///
/// Pieces are values. Movement and rotation return new pieces; collision is checked
/// by the caller against a [`Board`].
///
/// # Example
///
/// ```
/// use retris_engine::{Board, Piece, PieceKind};
///
/// let board = Board::EMPTY;
/// let piece = Piece::new(PieceKind::T);
/// assert!(!board.is_colliding(&piece.left()));
/// let rotated = piece.kicked_rotation(&board).unwrap();
/// assert_eq!(rotated.mask(), PieceKind::T.mask().rotated_right());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    mask: PieceMask,
    x: i32,
    y: i32,
}

impl Piece {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const SPAWN_X: i32 = (BOARD_WIDTH / 2) as i32 - 2;
    pub const SPAWN_Y: i32 = 0;

    /// Creates a piece of `kind` in spawn orientation at the spawn position.
    #[must_use]
    pub const fn new(kind: PieceKind) -> Self {
        Self::at(kind, Self::SPAWN_X, Self::SPAWN_Y)
    }

    /// Creates a piece of `kind` in spawn orientation with its box at `(x, y)`.
    #[must_use]
    pub const fn at(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            mask: kind.mask(),
            x,
            y,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn mask(&self) -> PieceMask {
        self.mask
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Iterates over the board coordinates `(x, y)` covered by this piece.
    pub fn occupied_positions(self) -> impl Iterator<Item = (i32, i32)> {
        self.mask
            .cells()
            .map(move |(dx, dy)| (self.x + i32::from(dx), self.y + i32::from(dy)))
    }

    #[must_use]
    pub const fn shifted(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    #[must_use]
    pub const fn left(self) -> Self {
        self.shifted(-1, 0)
    }

    #[must_use]
    pub const fn right(self) -> Self {
        self.shifted(1, 0)
    }

    #[must_use]
    pub const fn down(self) -> Self {
        self.shifted(0, 1)
    }

    /// Turns the mask clockwise in place, without any collision check.
    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self {
            mask: self.mask.rotated_right(),
            ..self
        }
    }

    /// Rotates clockwise, trying each of [`KICK_OFFSETS`] in order.
    ///
    /// The rotated mask is tested at the current position shifted by each offset and
    /// the first non-colliding placement wins.
    ///
    /// # Returns
    ///
    /// The rotated and possibly shifted piece, or `None` if every offset collides. In
    /// that case the rotation is dropped and the caller keeps `self` unchanged.
    #[must_use]
    pub fn kicked_rotation(self, board: &Board) -> Option<Self> {
        let rotated = self.rotated_right();
        KICK_OFFSETS
            .iter()
            .map(|&(dx, dy)| rotated.shifted(dx, dy))
            .find(|piece| !board.is_colliding(piece))
    }
}
