/// Points per cleared line before the line-count and level multipliers.
const LINE_SCORE: usize = 100;

/// Lines needed to advance one level.
const LINES_PER_LEVEL: usize = 10;

/// Score awarded for clearing `cleared_lines` rows at once at `level`.
///
/// The award is `cleared_lines² × 100 × level`, so a four-line clear is worth
/// sixteen single clears at the same level.
#[must_use]
pub const fn score_for_clear(cleared_lines: usize, level: usize) -> usize {
    cleared_lines * cleared_lines * LINE_SCORE * level
}

/// Game statistics tracking score, lines cleared, and piece count.
///
/// - **Score**: points earned from line clears
/// - **Level**: starts at 1 and rises by 1 for every 10 lines cleared
/// - **Completed pieces**: total number of pieces locked
/// - **Line clear distribution**: count of locks clearing 0, 1, 2, 3 and 4 lines
///
/// # Example
///
/// ```
/// use retris_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_drop(4);
///
/// assert_eq!(stats.score(), 1600);
/// assert_eq!(stats.total_cleared_lines(), 4);
/// assert_eq!(stats.line_cleared_counter()[4], 1);
/// assert_eq!(stats.level(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a new game statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the current level, `total_cleared_lines / 10 + 1`.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.total_cleared_lines / LINES_PER_LEVEL + 1
    }

    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of locks by cleared line count.
    ///
    /// - `[0]`: locks clearing nothing
    /// - `[1]`..`[4]`: singles, doubles, triples and four-line clears
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Updates statistics after a piece locks.
    ///
    /// The score uses the level in effect before `cleared_lines` are added.
    ///
    /// # Arguments
    ///
    /// * `cleared_lines` - Number of lines cleared by this lock (0-4)
    pub const fn complete_piece_drop(&mut self, cleared_lines: usize) {
        let level = self.level();
        self.completed_pieces += 1;
        self.score += score_for_clear(cleared_lines, level);
        self.total_cleared_lines += cleared_lines;
        if cleared_lines < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared_lines] += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats() {
        let stats = GameStats::new();
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.level(), 1);
        assert_eq!(stats.total_cleared_lines(), 0);
        assert_eq!(stats.completed_pieces(), 0);
    }

    #[test]
    fn test_score_for_clear() {
        assert_eq!(score_for_clear(0, 3), 0);
        assert_eq!(score_for_clear(1, 1), 100);
        assert_eq!(score_for_clear(2, 1), 400);
        assert_eq!(score_for_clear(3, 2), 1800);
        assert_eq!(score_for_clear(4, 1), 1600);
        for level in 1..20 {
            assert!(score_for_clear(4, level) > score_for_clear(1, level));
        }
    }

    #[test]
    fn test_drop_without_clear_counts_piece_only() {
        let mut stats = GameStats::new();
        stats.complete_piece_drop(0);
        assert_eq!(stats.completed_pieces(), 1);
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.line_cleared_counter(), &[1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_level_up_every_ten_lines() {
        let mut stats = GameStats::new();
        for _ in 0..9 {
            stats.complete_piece_drop(1);
        }
        assert_eq!(stats.level(), 1);
        stats.complete_piece_drop(1);
        assert_eq!(stats.level(), 2);
        assert_eq!(stats.total_cleared_lines(), 10);
    }

    #[test]
    fn test_score_uses_level_before_update() {
        let mut stats = GameStats::new();
        for _ in 0..8 {
            stats.complete_piece_drop(1);
        }
        assert_eq!(stats.score(), 800);

        // 8 + 4 lines crosses into level 2, but this clear is still scored at level 1.
        stats.complete_piece_drop(4);
        assert_eq!(stats.score(), 800 + 1600);
        assert_eq!(stats.level(), 2);

        stats.complete_piece_drop(1);
        assert_eq!(stats.score(), 800 + 1600 + 200);
    }
}
