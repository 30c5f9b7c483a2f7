//! Board configuration options.

/// Configuration options for a scoreboard.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use flipscore::BoardOptions;
///
/// let options = BoardOptions::default()
///     .with_win_threshold(150)
///     .with_max_players(6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOptions {
    /// Score at which a player is marked as a winner (display and rematch
    /// tallying only; the game never auto-stops).
    pub win_threshold: i64,
    /// Fixed bonus added when the flip bonus flag is set on a score entry.
    pub flip_bonus: i64,
    /// Maximum roster size.
    pub max_players: usize,
    /// Number of undo snapshots retained (oldest evicted first).
    pub undo_depth: usize,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            win_threshold: 200,
            flip_bonus: 15,
            max_players: 12,
            undo_depth: 5,
        }
    }
}

impl BoardOptions {
    /// Sets the winning score threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use flipscore::BoardOptions;
    ///
    /// let options = BoardOptions::default().with_win_threshold(300);
    /// assert_eq!(options.win_threshold, 300);
    /// ```
    #[must_use]
    pub const fn with_win_threshold(mut self, threshold: i64) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Sets the flip bonus value.
    ///
    /// # Example
    ///
    /// ```
    /// use flipscore::BoardOptions;
    ///
    /// let options = BoardOptions::default().with_flip_bonus(20);
    /// assert_eq!(options.flip_bonus, 20);
    /// ```
    #[must_use]
    pub const fn with_flip_bonus(mut self, bonus: i64) -> Self {
        self.flip_bonus = bonus;
        self
    }

    /// Sets the maximum roster size.
    ///
    /// # Example
    ///
    /// ```
    /// use flipscore::BoardOptions;
    ///
    /// let options = BoardOptions::default().with_max_players(4);
    /// assert_eq!(options.max_players, 4);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Sets the undo history depth.
    ///
    /// A depth of 0 disables undo entirely.
    ///
    /// # Example
    ///
    /// ```
    /// use flipscore::BoardOptions;
    ///
    /// let options = BoardOptions::default().with_undo_depth(10);
    /// assert_eq!(options.undo_depth, 10);
    /// ```
    #[must_use]
    pub const fn with_undo_depth(mut self, depth: usize) -> Self {
        self.undo_depth = depth;
        self
    }
}
