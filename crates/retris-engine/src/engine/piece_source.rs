use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;

use crate::core::piece::PieceKind;

/// Supplies the kind of every newly generated piece.
///
/// A [`GameSession`](crate::GameSession) owns one source for its whole lifetime,
/// including restarts.
pub trait PieceSource: fmt::Debug {
    /// Returns the kind of the next piece to enter the queue.
    fn next_kind(&mut self) -> PieceKind;
}

/// Picks each piece uniformly from the 7 kinds, independently of earlier picks.
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: Pcg32,
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPieces {
    /// Creates a source seeded from the thread-local generator.
    ///
    /// For a reproducible sequence, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }
}

impl PieceSource for RandomPieces {
    fn next_kind(&mut self) -> PieceKind {
        self.rng.random()
    }
}

/// Repeats a fixed list of kinds in order.
///
/// # Example
///
/// ```
/// use retris_engine::{PieceKind, PieceSource as _, ScriptedPieces};
///
/// let mut pieces = ScriptedPieces::new(vec![PieceKind::I, PieceKind::O]);
/// assert_eq!(pieces.next_kind(), PieceKind::I);
/// assert_eq!(pieces.next_kind(), PieceKind::O);
/// assert_eq!(pieces.next_kind(), PieceKind::I);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    kinds: Vec<PieceKind>,
    cursor: usize,
}

impl ScriptedPieces {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    #[must_use]
    pub fn new(kinds: Vec<PieceKind>) -> Self {
        assert!(!kinds.is_empty(), "scripted piece list must not be empty");
        Self { kinds, cursor: 0 }
    }
}

impl PieceSource for ScriptedPieces {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.cursor];
        self.cursor = (self.cursor + 1) % self.kinds.len();
        kind
    }
}

/// 128-bit seed for [`RandomPieces`].
///
/// The same seed always produces the same piece sequence. Seeds are written and
/// parsed as 32 hexadecimal digits.
///
/// # Example
///
/// ```
/// use retris_engine::{PieceSeed, PieceSource as _, RandomPieces};
/// use rand::Rng as _;
///
/// let seed: PieceSeed = rand::rng().random();
/// let parsed: PieceSeed = seed.to_string().parse().unwrap();
/// assert_eq!(parsed, seed);
///
/// let mut a = RandomPieces::with_seed(seed);
/// let mut b = RandomPieces::with_seed(parsed);
/// assert_eq!(a.next_kind(), b.next_kind());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSeed([u8; 16]);

const SEED_HEX_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePieceSeedError {
    #[display("invalid seed: expected 32 hex digits, got {len}")]
    InvalidLength { len: usize },
    #[display("invalid seed: {digit:?} is not a hex digit")]
    InvalidDigit { digit: char },
}

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for PieceSeed {
    type Err = ParsePieceSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != SEED_HEX_LEN {
            return Err(ParsePieceSeedError::InvalidLength { len });
        }
        let mut num = 0_u128;
        for digit in s.chars() {
            let value = digit
                .to_digit(16)
                .ok_or(ParsePieceSeedError::InvalidDigit { digit })?;
            num = (num << 4) | u128::from(value);
        }
        Ok(Self(num.to_be_bytes()))
    }
}

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}
